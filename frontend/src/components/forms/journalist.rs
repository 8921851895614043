use common::model::journalist::{Journalist, JournalistPayload};
use common::model::COUNTRIES;
use common::validation::FormError;
use yew::prelude::*;

use super::{form_buttons, input_field, is_valid_email, on_submit, options_of, select_field, text_field};
use crate::app::{app_context, AppContext};
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::http::{api, ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalistField {
    Name,
    Email,
    Phone,
    Country,
    Title,
    MediaHouse,
}

pub enum Msg {
    Set(JournalistField, String),
    Submit,
    Saved(Result<Journalist, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct JournalistFormProps {
    #[prop_or_default]
    pub initial: Option<Journalist>,
    pub on_saved: Callback<Journalist>,
    pub on_cancel: Callback<()>,
}

pub struct JournalistForm {
    context: AppContext,
    payload: JournalistPayload,
    processing: bool,
}

impl Component for JournalistForm {
    type Message = Msg;
    type Properties = JournalistFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            payload: ctx
                .props()
                .initial
                .as_ref()
                .map(JournalistPayload::from)
                .unwrap_or_default(),
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                let target = match field {
                    JournalistField::Name => &mut self.payload.name,
                    JournalistField::Email => &mut self.payload.email,
                    JournalistField::Phone => &mut self.payload.phone,
                    JournalistField::Country => &mut self.payload.country,
                    JournalistField::Title => &mut self.payload.title,
                    JournalistField::MediaHouse => &mut self.payload.media_house,
                };
                *target = value;
                true
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
                let id = ctx.props().initial.as_ref().map(|journalist| journalist.id.clone());
                ctx.link().send_future(async move {
                    let result = match id {
                        Some(id) => api::update_journalist(&client, &id, &payload).await,
                        None => api::create_journalist(&client, &payload).await,
                    };
                    Msg::Saved(result)
                });
                true
            }
            Msg::Saved(result) => {
                self.processing = false;
                match result {
                    Ok(saved) => {
                        toast_success("Journalist saved");
                        ctx.props().on_saved.emit(saved);
                    }
                    Err(error) => toast_api_error("Failed to save journalist", &error),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let set = |field: JournalistField| link.callback(move |value| Msg::Set(field, value));
        let payload = &self.payload;
        html! {
            <form class="form-grid" onsubmit={on_submit(link, || Msg::Submit)}>
                { text_field("Name", &payload.name, false, set(JournalistField::Name)) }
                { input_field("Email", "email", &payload.email, true, set(JournalistField::Email)) }
                { input_field("Phone", "tel", &payload.phone, false, set(JournalistField::Phone)) }
                { select_field("Country", &payload.country, Some("Select a country"), &options_of(COUNTRIES), set(JournalistField::Country)) }
                { text_field("Title", &payload.title, false, set(JournalistField::Title)) }
                { text_field("Media house", &payload.media_house, false, set(JournalistField::MediaHouse)) }
                { form_buttons("Save journalist", self.processing, false, ctx.props().on_cancel.clone()) }
            </form>
        }
    }
}
