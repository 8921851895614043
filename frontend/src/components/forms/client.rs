//! Create / edit form of a client, with an optional logo upload.

use common::model::client::{Client, ClientPayload};
use common::model::COUNTRIES;
use common::validation::FormError;
use web_sys::File;
use yew::prelude::*;

use super::{area_field, file_field, form_buttons, input_field, is_valid_email, on_submit, options_of, select_field, text_field};
use crate::app::{app_context, AppContext};
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::http::{api, ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Email,
    Phone,
    Country,
    Website,
    Description,
    About,
}

pub enum Msg {
    Set(ClientField, String),
    Logo(Option<File>),
    Submit,
    Saved(Result<Client, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct ClientFormProps {
    #[prop_or_default]
    pub initial: Option<Client>,
    pub on_saved: Callback<Client>,
    pub on_cancel: Callback<()>,
}

pub struct ClientForm {
    context: AppContext,
    payload: ClientPayload,
    logo: Option<File>,
    processing: bool,
}

impl Component for ClientForm {
    type Message = Msg;
    type Properties = ClientFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            payload: ctx.props().initial.as_ref().map(ClientPayload::from).unwrap_or_default(),
            logo: None,
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                let target = match field {
                    ClientField::Name => &mut self.payload.name,
                    ClientField::Email => &mut self.payload.email,
                    ClientField::Phone => &mut self.payload.phone,
                    ClientField::Country => &mut self.payload.country,
                    ClientField::Website => &mut self.payload.website,
                    ClientField::Description => &mut self.payload.description,
                    ClientField::About => &mut self.payload.about,
                };
                *target = value;
                true
            }
            Msg::Logo(file) => {
                self.logo = file;
                false
            }
            Msg::Submit => {
                if self.processing {
                    return false;
                }
                if let Some(field) = self.payload.missing_field() {
                    toast_error(&FormError(field).to_string());
                    return false;
                }
                if !is_valid_email(&self.payload.email) {
                    toast_error("Enter a valid email address");
                    return false;
                }
                self.processing = true;
                let client = self.context.client.clone();
                let payload = self.payload.clone();
                let logo = self.logo.clone();
                let id = ctx.props().initial.as_ref().map(|client| client.id.clone());
                ctx.link().send_future(async move {
                    let result = match (id, logo) {
                        (None, None) => api::create_client_with_content(&client, &payload).await,
                        (None, Some(logo)) => api::create_client_with_attachment(&client, &payload, &logo).await,
                        (Some(id), None) => api::update_client_with_content(&client, &id, &payload).await,
                        (Some(id), Some(logo)) => {
                            api::update_client_with_attachment(&client, &id, &payload, &logo).await
                        }
                    };
                    Msg::Saved(result)
                });
                true
            }
            Msg::Saved(result) => {
                self.processing = false;
                match result {
                    Ok(saved) => {
                        let verb = if ctx.props().initial.is_some() { "updated" } else { "added" };
                        toast_success(&format!("Client {verb} successfully"));
                        ctx.props().on_saved.emit(saved);
                    }
                    Err(error) => toast_api_error("Failed to save client", &error),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let set = |field: ClientField| link.callback(move |value| Msg::Set(field, value));
        let payload = &self.payload;
        html! {
            <form class="form-grid" onsubmit={on_submit(link, || Msg::Submit)}>
                { text_field("Name", &payload.name, true, set(ClientField::Name)) }
                { input_field("Email", "email", &payload.email, true, set(ClientField::Email)) }
                { input_field("Phone", "tel", &payload.phone, false, set(ClientField::Phone)) }
                { select_field("Country", &payload.country, Some("Select a country"), &options_of(COUNTRIES), set(ClientField::Country)) }
                { input_field("Website", "url", &payload.website, false, set(ClientField::Website)) }
                { file_field("Logo", "image/*", link.callback(Msg::Logo)) }
                { area_field("Description", &payload.description, 3, set(ClientField::Description)) }
                { area_field("About", &payload.about, 5, set(ClientField::About)) }
                { form_buttons("Save client", self.processing, false, ctx.props().on_cancel.clone()) }
            </form>
        }
    }
}
