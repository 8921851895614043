use common::events::{EventKind, ResourceKind};
use common::model::journalist::Journalist;
use common::model::page::ListQuery;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::format::{format_points, or_dash};
use crate::components::forms::journalist::JournalistForm;
use crate::components::resource_list::{FetchFuture, Outcome, Resource};
use crate::http::{api, HttpClient};

#[derive(PartialEq)]
pub struct Journalists;

impl Resource for Journalists {
    type Item = Journalist;
    type Filter = ();
    type Action = ();

    const TITLE: &'static str = "Journalists";
    const EMPTY: &'static str = "No journalists found.";
    const SEARCH_PLACEHOLDER: &'static str = "Search by name, email, country or media house...";
    const CREATE_LABEL: Option<&'static str> = Some("New journalist");
    const EDITABLE: bool = true;
    const DELETE_KIND: Option<ResourceKind> = Some(ResourceKind::Journalist);
    /// A bulk upload announces itself with `ReloadData`.
    const RELOAD_ON: &'static [EventKind] = &[EventKind::ReloadData];

    fn columns() -> &'static [&'static str] {
        &["Name", "Email", "Phone", "Country", "Media house", "Title", "Points"]
    }

    fn cells(journalist: &Journalist) -> Vec<Html> {
        [
            journalist.display_name(),
            journalist.email.as_str(),
            journalist.phone.as_str(),
            journalist.country.as_str(),
            journalist.media_house.as_str(),
            journalist.title.as_str(),
        ]
        .into_iter()
        .map(|text| html! { <>{ or_dash(text) }</> })
        .chain(std::iter::once(html! { <>{ format_points(journalist.total_points) }</> }))
        .collect()
    }

    fn fetch(client: HttpClient, query: ListQuery, _filter: (), signal: Option<AbortSignal>) -> FetchFuture<Journalist> {
        Box::pin(async move { api::list_journalists(&client, &query, signal.as_ref()).await })
    }

    fn form(
        editing: Option<&Journalist>,
        _filter: &(),
        on_done: Callback<Outcome<Journalist>>,
        on_cancel: Callback<()>,
    ) -> Html {
        let edit = editing.is_some();
        let on_saved = on_done.reform(move |journalist| {
            if edit {
                Outcome::Replace(journalist)
            } else {
                Outcome::Insert(journalist)
            }
        });
        html! { <JournalistForm initial={editing.cloned()} {on_saved} {on_cancel} /> }
    }
}
