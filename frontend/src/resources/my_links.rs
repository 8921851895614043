//! The signed-in journalist's published links.

use common::events::{EventKind, ResourceKind};
use common::model::page::ListQuery;
use common::model::published_link::PublishedLink;
use web_sys::AbortSignal;
use yew::prelude::*;

use super::link_status_badge;
use crate::components::format::{format_date, format_day, or_dash};
use crate::components::forms::link::LinkForm;
use crate::components::resource_list::{FetchFuture, Outcome, Resource};
use crate::http::{api, HttpClient};

/// Press releases the journalist may submit a link for, as `(id, title)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReceivedReleases(pub Vec<(String, String)>);

#[derive(PartialEq)]
pub struct MyLinks;

impl Resource for MyLinks {
    type Item = PublishedLink;
    type Filter = ReceivedReleases;
    type Action = ();

    const TITLE: &'static str = "My published links";
    const EMPTY: &'static str = "You have not submitted any links yet.";
    const SEARCHABLE: bool = false;
    const CREATE_LABEL: Option<&'static str> = Some("Submit link");
    const EDITABLE: bool = true;
    const DELETE_KIND: Option<ResourceKind> = Some(ResourceKind::PublishedLink);
    /// The "submit link" shortcut on a received press release creates links
    /// outside this list.
    const RELOAD_ON: &'static [EventKind] = &[EventKind::ReloadDashboard];

    fn columns() -> &'static [&'static str] {
        &["Title", "URL", "Press release", "Published", "Submitted", "Status", "Notes"]
    }

    fn cells(link: &PublishedLink) -> Vec<Html> {
        vec![
            html! { <>{ or_dash(&link.title).to_string() }</> },
            html! { <a href={link.url.clone()} target="_blank" rel="noopener noreferrer">{ link.url.clone() }</a> },
            html! { <>{ or_dash(&link.press_release_title).to_string() }</> },
            html! { <>{ format_day(link.publication_date) }</> },
            html! { <>{ format_date(link.created_at) }</> },
            link_status_badge(link.status),
            html! { <>{ link.notes.clone().unwrap_or_default() }</> },
        ]
    }

    fn fetch(
        client: HttpClient,
        query: ListQuery,
        _filter: ReceivedReleases,
        signal: Option<AbortSignal>,
    ) -> FetchFuture<PublishedLink> {
        Box::pin(async move { api::list_published_links(&client, &query, signal.as_ref()).await })
    }

    fn form(
        editing: Option<&PublishedLink>,
        releases: &ReceivedReleases,
        on_done: Callback<Outcome<PublishedLink>>,
        on_cancel: Callback<()>,
    ) -> Html {
        let edit = editing.is_some();
        let on_saved = on_done.reform(move |link| if edit { Outcome::Replace(link) } else { Outcome::Insert(link) });
        html! {
            <LinkForm
                releases={releases.0.clone()}
                editing={editing.cloned()}
                {on_saved}
                {on_cancel}
            />
        }
    }
}
