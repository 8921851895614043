//! What a concrete list (clients, journalists, ...) plugs into
//! [`ResourcePage`](super::ResourcePage).

use common::events::{AppEvent, EventKind, ResourceKind};
use common::listing::{Identified, DEFAULT_PAGE_SIZE};
use common::model::page::{ListQuery, Page};
use futures_util::future::LocalBoxFuture;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::http::{ApiError, HttpClient};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Table,
    Cards,
}

/// How a confirmed mutation is reflected in the local list.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// A created item, appended without a refetch.
    Insert(T),
    /// The server copy of an edited or processed item.
    Replace(T),
    Remove(String),
    Navigate(Route),
    Nothing,
}

/// What clicking a row action does.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Open [`Resource::action_view`] for the row.
    Dialog,
    /// Call [`Resource::perform`] right away.
    Run,
    Navigate(Route),
    Emit(AppEvent),
}

pub type FetchFuture<T> = LocalBoxFuture<'static, Result<Page<T>, ApiError>>;
pub type ActionFuture<T> = LocalBoxFuture<'static, Result<Outcome<T>, ApiError>>;

pub trait Resource: PartialEq + 'static {
    type Item: Clone + PartialEq + Identified + 'static;
    /// Extra view input owned by the parent page, e.g. a status filter.
    type Filter: Clone + PartialEq + Default + 'static;
    type Action: Clone + PartialEq + 'static;

    const TITLE: &'static str;
    const EMPTY: &'static str = "Nothing here yet.";
    const PAGE_SIZE: u32 = DEFAULT_PAGE_SIZE;
    const SEARCHABLE: bool = true;
    const SEARCH_PLACEHOLDER: &'static str = "Search...";
    const LAYOUT: Layout = Layout::Table;
    /// Label of the create button; `None` hides it.
    const CREATE_LABEL: Option<&'static str> = None;
    const EDITABLE: bool = false;
    /// Kind used for the delete confirmation; `None` hides the delete button.
    const DELETE_KIND: Option<ResourceKind> = None;
    /// Bus events that trigger a refetch of the current page.
    const RELOAD_ON: &'static [EventKind] = &[];
    /// Whether the filter is sent to the server. A local filter only hides rows.
    const REMOTE_FILTER: bool = false;

    fn columns() -> &'static [&'static str] {
        &[]
    }

    fn cells(_item: &Self::Item) -> Vec<Html> {
        Vec::new()
    }

    /// Body of a card in the card layout.
    fn card(_item: &Self::Item) -> Html {
        html! {}
    }

    fn fetch(
        client: HttpClient,
        query: ListQuery,
        filter: Self::Filter,
        signal: Option<AbortSignal>,
    ) -> FetchFuture<Self::Item>;

    fn visible(_item: &Self::Item, _filter: &Self::Filter) -> bool {
        true
    }

    /// Create form when `editing` is `None`, edit form otherwise. Both report
    /// the saved item through `on_done`.
    fn form(
        _editing: Option<&Self::Item>,
        _filter: &Self::Filter,
        _on_done: Callback<Outcome<Self::Item>>,
        _on_cancel: Callback<()>,
    ) -> Html {
        html! {}
    }

    fn actions(_item: &Self::Item) -> Vec<Self::Action> {
        Vec::new()
    }

    fn action_label(_action: &Self::Action) -> &'static str {
        ""
    }

    fn step(_item: &Self::Item, _action: &Self::Action) -> Step {
        Step::Run
    }

    fn action_view(
        _item: &Self::Item,
        _action: &Self::Action,
        _on_done: Callback<Outcome<Self::Item>>,
        _on_cancel: Callback<()>,
    ) -> Html {
        html! {}
    }

    fn perform(_client: HttpClient, _item: Self::Item, _action: Self::Action) -> ActionFuture<Self::Item> {
        Box::pin(async { Ok(Outcome::Nothing) })
    }

    /// Broadcast after any confirmed mutation, e.g. to refresh dashboard
    /// counters.
    fn after_mutation() -> Option<AppEvent> {
        None
    }
}
