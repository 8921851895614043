use common::events::Subscription;
use common::listing::ListResource;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use super::resource::Resource;
use crate::app::AppContext;

/// Which form is open, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<T> {
    Closed,
    Create,
    Edit(T),
}

pub struct ResourcePage<R: Resource> {
    pub context: AppContext,
    pub list: ListResource<R::Item>,
    /// Text in the search box, ahead of `list.search()` until the debounce fires.
    pub search_input: String,
    pub debounce: Option<Timeout>,
    /// Aborts the in-flight fetch.
    pub controller: Option<AbortController>,
    pub form: FormState<R::Item>,
    pub dialog: Option<(R::Item, R::Action)>,
    /// Row whose action is running.
    pub busy: Option<String>,
    pub subscriptions: Vec<Subscription>,
}

impl<R: Resource> ResourcePage<R> {
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            list: ListResource::new(R::PAGE_SIZE),
            search_input: String::new(),
            debounce: None,
            controller: None,
            form: FormState::Closed,
            dialog: None,
            busy: None,
            subscriptions: Vec::new(),
        }
    }

    pub fn abort_fetch(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }
}
