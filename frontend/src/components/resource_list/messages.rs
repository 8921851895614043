use common::listing::FetchTicket;
use common::model::page::Page;

use super::resource::{Outcome, Resource};
use crate::http::ApiError;

pub enum Msg<R: Resource> {
    Fetch,
    Loaded(FetchTicket, Result<Page<R::Item>, ApiError>),
    /// Raw keystrokes; applied after the debounce.
    SearchInput(String),
    ApplySearch(String),
    SetPage(u32),
    OpenCreate,
    OpenEdit(String),
    CloseForm,
    RequestDelete(String),
    /// A delete of this kind was confirmed anywhere in the app.
    Deleted(String),
    Act(String, R::Action),
    CloseDialog,
    Done(Outcome<R::Item>),
    Performed(String, Result<Outcome<R::Item>, ApiError>),
}
