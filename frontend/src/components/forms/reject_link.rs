//! Rejection notes for a pending published link.

use common::validation::reject_link;
use yew::prelude::*;

use super::{area_field, form_buttons, on_submit};
use crate::app::{app_context, AppContext};
use crate::components::toast::{toast_api_error, toast_success};
use crate::http::{api, ApiError};

pub enum Msg {
    Notes(String),
    Submit,
    Rejected(Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct RejectLinkProps {
    pub link_id: String,
    pub url: String,
    /// Called with the link id once the server accepted the rejection.
    pub on_rejected: Callback<String>,
    pub on_cancel: Callback<()>,
}

pub struct RejectLinkDialog {
    context: AppContext,
    notes: String,
    processing: bool,
}

impl Component for RejectLinkDialog {
    type Message = Msg;
    type Properties = RejectLinkProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            notes: String::new(),
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Notes(notes) => self.notes = notes,
            Msg::Submit => {
                let Ok(body) = reject_link(&self.notes) else {
                    return false;
                };
                if self.processing {
                    return false;
                }
                self.processing = true;
                let client = self.context.client.clone();
                let id = ctx.props().link_id.clone();
                ctx.link()
                    .send_future(async move { Msg::Rejected(api::reject_link(&client, &id, &body).await) });
            }
            Msg::Rejected(result) => {
                self.processing = false;
                match result {
                    Ok(()) => {
                        toast_success("Link rejected");
                        ctx.props().on_rejected.emit(ctx.props().link_id.clone());
                    }
                    Err(error) => toast_api_error("Failed to reject link", &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let blank = reject_link(&self.notes).is_err();
        html! {
            <form class="form-grid" onsubmit={on_submit(link, || Msg::Submit)}>
                <p class="form-hint">{ format!("Rejecting {}", ctx.props().url) }</p>
                { area_field("Reason for rejection", &self.notes, 4, link.callback(Msg::Notes)) }
                { form_buttons("Reject link", self.processing, blank, ctx.props().on_cancel.clone()) }
            </form>
        }
    }
}
