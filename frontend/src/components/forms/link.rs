//! Journalist's proof-of-publication form, for new and already submitted
//! links.

use chrono::NaiveDate;
use common::model::published_link::{NewPublishedLink, PublishedLink};
use yew::prelude::*;

use super::{form_buttons, input_field, on_submit, select_field, text_field};
use crate::app::{app_context, AppContext};
use crate::components::format::today;
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::http::{api, ApiError};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub enum Msg {
    PressRelease(String),
    Url(String),
    Title(String),
    Date(String),
    Submit,
    Saved(Result<PublishedLink, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct LinkFormProps {
    /// `(id, title)` of the press releases the journalist received.
    pub releases: Vec<(String, String)>,
    /// Press release picked beforehand, e.g. from the "submit link" shortcut.
    #[prop_or_default]
    pub preset: Option<String>,
    /// Submitted link being corrected.
    #[prop_or_default]
    pub editing: Option<PublishedLink>,
    pub on_saved: Callback<PublishedLink>,
    pub on_cancel: Callback<()>,
}

pub struct LinkForm {
    context: AppContext,
    link: NewPublishedLink,
    processing: bool,
}

impl Component for LinkForm {
    type Message = Msg;
    type Properties = LinkFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let preset = ctx.props().preset.clone().unwrap_or_default();
        let link = match (&ctx.props().editing, today()) {
            (Some(editing), _) => NewPublishedLink::from(editing),
            (None, Some(date)) => NewPublishedLink::for_release(preset, date),
            (None, None) => NewPublishedLink {
                press_release: preset,
                ..Default::default()
            },
        };
        Self {
            context: app_context(ctx),
            link,
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PressRelease(id) => self.link.press_release = id,
            Msg::Url(url) => self.link.url = url,
            Msg::Title(title) => self.link.title = title,
            Msg::Date(value) => self.link.publication_date = parse_date(&value),
            Msg::Submit => {
                if self.processing {
                    return false;
                }
                if let Err(error) = self.link.validate() {
                    toast_error(&error.to_string());
                    return false;
                }
                self.processing = true;
                let client = self.context.client.clone();
                let link = self.link.clone();
                let editing = ctx.props().editing.as_ref().map(|editing| editing.id.clone());
                ctx.link().send_future(async move {
                    let result = match editing {
                        Some(id) => api::update_published_link(&client, &id, &link).await,
                        None => api::create_published_link(&client, &link).await,
                    };
                    Msg::Saved(result)
                });
            }
            Msg::Saved(result) => {
                self.processing = false;
                match result {
                    Ok(link) => {
                        toast_success(if ctx.props().editing.is_some() { "Link updated" } else { "Link submitted for review" });
                        ctx.props().on_saved.emit(link);
                    }
                    Err(error) => toast_api_error("Failed to submit link", &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let date = self
            .link
            .publication_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        html! {
            <form class="form-grid" onsubmit={on_submit(link, || Msg::Submit)}>
                { select_field("Press release", &self.link.press_release, Some("Select a press release"), &ctx.props().releases, link.callback(Msg::PressRelease)) }
                { input_field("URL", "url", &self.link.url, true, link.callback(Msg::Url)) }
                { text_field("Article title", &self.link.title, false, link.callback(Msg::Title)) }
                { input_field("Publication date", "date", &date, false, link.callback(Msg::Date)) }
                { form_buttons(if ctx.props().editing.is_some() { "Save link" } else { "Submit link" }, self.processing, false, ctx.props().on_cancel.clone()) }
            </form>
        }
    }
}

/// Value of an `<input type="date">`; blank or malformed means no date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_date_inputs() {
        assert_eq!(parse_date("2025-02-14"), NaiveDate::from_ymd_opt(2025, 2, 14));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("14/02/2025"), None);
    }
}
