//! State transitions of the generic list.
//!
//! The list only changes after a confirmed success: failures show one toast
//! and leave `items` as they were.

use common::events::{AppEvent, DeleteTarget};
use common::listing::{Identified, ListResource};
use gloo_timers::callback::Timeout;
use web_sys::AbortController;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use super::messages::Msg;
use super::resource::{Outcome, Resource, Step};
use super::state::{FormState, ResourcePage};
use crate::components::toast::toast_api_error;
use crate::http::ApiError;
use crate::routes::Route;

const SEARCH_DEBOUNCE_MILLIS: u32 = 300;

pub fn update<R: Resource>(page: &mut ResourcePage<R>, ctx: &Context<ResourcePage<R>>, msg: Msg<R>) -> bool {
    match msg {
        Msg::Fetch => {
            fetch(page, ctx);
            true
        }
        Msg::Loaded(ticket, Ok(result)) => {
            let applied = page.list.apply_page(ticket, result);
            if applied {
                page.controller = None;
            }
            applied
        }
        Msg::Loaded(ticket, Err(error)) => {
            if error == ApiError::Aborted {
                log::debug!("{} fetch aborted", R::TITLE);
                return false;
            }
            let current = page.list.fail_fetch(ticket, error.to_string());
            if current {
                page.controller = None;
                toast_api_error(&format!("Failed to load {}", R::TITLE.to_lowercase()), &error);
            }
            current
        }
        Msg::SearchInput(value) => {
            page.search_input = value.clone();
            let link = ctx.link().clone();
            // Replacing the timeout drops, and so cancels, the previous one.
            page.debounce = Some(Timeout::new(SEARCH_DEBOUNCE_MILLIS, move || {
                link.send_message(Msg::ApplySearch(value));
            }));
            true
        }
        Msg::ApplySearch(value) => {
            page.debounce = None;
            if page.list.set_search(value) {
                fetch(page, ctx);
                true
            } else {
                false
            }
        }
        Msg::SetPage(number) => {
            if page.list.set_page(number) {
                fetch(page, ctx);
                true
            } else {
                false
            }
        }
        Msg::OpenCreate => {
            page.form = FormState::Create;
            true
        }
        Msg::OpenEdit(id) => match page.list.get(&id) {
            Some(item) => {
                page.form = FormState::Edit(item.clone());
                true
            }
            None => false,
        },
        Msg::CloseForm => {
            page.form = FormState::Closed;
            true
        }
        Msg::RequestDelete(id) => {
            if let Some(kind) = R::DELETE_KIND {
                page.context
                    .bus
                    .emit(AppEvent::OpenDeleteModal(DeleteTarget::new(id, kind)));
            }
            false
        }
        Msg::Deleted(id) => page.list.remove(&id).is_some(),
        Msg::Act(id, action) => {
            let Some(item) = page.list.get(&id).cloned() else {
                return false;
            };
            match R::step(&item, &action) {
                Step::Dialog => {
                    page.dialog = Some((item, action));
                    true
                }
                Step::Run => {
                    page.busy = Some(id.clone());
                    let future = R::perform(page.context.client.clone(), item, action);
                    ctx.link()
                        .send_future(async move { Msg::Performed(id, future.await) });
                    true
                }
                Step::Navigate(route) => {
                    navigate(ctx, route);
                    false
                }
                Step::Emit(event) => {
                    page.context.bus.emit(event);
                    false
                }
            }
        }
        Msg::CloseDialog => {
            page.dialog = None;
            true
        }
        Msg::Done(outcome) => {
            apply(page, ctx, Ok(outcome));
            true
        }
        Msg::Performed(id, result) => {
            if page.busy.as_deref() == Some(id.as_str()) {
                page.busy = None;
            }
            apply(page, ctx, result);
            true
        }
    }
}

/// Starts a fetch of the current page, aborting the one it supersedes.
pub fn fetch<R: Resource>(page: &mut ResourcePage<R>, ctx: &Context<ResourcePage<R>>) {
    page.abort_fetch();
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    page.controller = controller;

    let ticket = page.list.begin_fetch();
    let future = R::fetch(
        page.context.client.clone(),
        page.list.query(),
        ctx.props().filter.clone(),
        signal,
    );
    ctx.link()
        .send_future(async move { Msg::Loaded(ticket, future.await) });
}

/// Effect of an action result on the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    /// The list changed to match the server.
    Mutated,
    Navigate(Route),
    Unchanged,
    /// Nothing was touched.
    Failed(ApiError),
}

/// Applies the result of a row action or dialog to `list`. The items only
/// change on success and never trigger a refetch.
pub fn settle<T: Identified>(list: &mut ListResource<T>, result: Result<Outcome<T>, ApiError>) -> Settled {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(error) => return Settled::Failed(error),
    };
    match outcome {
        Outcome::Insert(item) => list.insert_created(item),
        Outcome::Replace(item) => {
            let id = item.id().to_string();
            if !list.replace(item) {
                log::debug!("{id} left the page before its update");
            }
        }
        Outcome::Remove(id) => {
            list.remove(&id);
        }
        Outcome::Navigate(route) => return Settled::Navigate(route),
        Outcome::Nothing => return Settled::Unchanged,
    }
    Settled::Mutated
}

fn apply<R: Resource>(
    page: &mut ResourcePage<R>,
    ctx: &Context<ResourcePage<R>>,
    result: Result<Outcome<R::Item>, ApiError>,
) {
    if result.is_ok() {
        page.form = FormState::Closed;
        page.dialog = None;
    }
    match settle(&mut page.list, result) {
        Settled::Mutated => {
            if let Some(event) = R::after_mutation() {
                page.context.bus.emit(event);
            }
        }
        Settled::Navigate(route) => navigate(ctx, route),
        Settled::Unchanged => {}
        Settled::Failed(error) => toast_api_error("Action failed", &error),
    }
}

fn navigate<R: Resource>(ctx: &Context<ResourcePage<R>>, route: Route) {
    match ctx.link().navigator() {
        Some(navigator) => {
            navigator.push(&route);
            ctx.props().on_navigate.emit(());
        }
        None => log::error!("no router around the {} list", R::TITLE),
    }
}

#[cfg(test)]
mod tests {
    use common::model::page::Page;
    use common::model::published_link::{LinkStatus, PublishedLink};

    use super::*;

    fn pending(ids: &[&str]) -> ListResource<PublishedLink> {
        let mut list = ListResource::new(10);
        let ticket = list.begin_fetch();
        let rows = ids
            .iter()
            .map(|id| PublishedLink {
                id: id.to_string(),
                status: LinkStatus::Pending,
                ..Default::default()
            })
            .collect();
        list.apply_page(ticket, Page::new(rows, ids.len() as u64));
        list
    }

    fn ids(list: &ListResource<PublishedLink>) -> Vec<&str> {
        list.items().iter().map(|link| link.id.as_str()).collect()
    }

    #[test]
    fn approved_link_leaves_the_list_without_a_refetch() {
        let mut list = pending(&["abc", "def"]);
        let settled = settle(&mut list, Ok(Outcome::Remove("abc".into())));
        assert_eq!(settled, Settled::Mutated);
        assert_eq!(ids(&list), ["def"]);
        assert!(!list.is_loading());
    }

    #[test]
    fn failed_action_leaves_the_list_alone() {
        let mut list = pending(&["abc", "def"]);
        let error = ApiError::Validation {
            status: 400,
            message: "Link already reviewed".into(),
        };
        assert_eq!(settle(&mut list, Err(error.clone())), Settled::Failed(error));
        assert_eq!(ids(&list), ["abc", "def"]);
        assert!(!list.is_loading());
    }

    #[test]
    fn processed_row_is_patched_in_place() {
        let mut list = pending(&["abc", "def"]);
        let approved = PublishedLink {
            id: "def".into(),
            status: LinkStatus::Approved,
            ..Default::default()
        };
        assert_eq!(settle(&mut list, Ok(Outcome::Replace(approved))), Settled::Mutated);
        assert_eq!(ids(&list), ["abc", "def"]);
        assert_eq!(list.get("def").map(|link| link.status), Some(LinkStatus::Approved));
    }

    #[test]
    fn navigation_and_no_op_outcomes_keep_the_items() {
        let mut list = pending(&["abc"]);
        let route = Route::Editor { id: "p1".into() };
        assert_eq!(settle(&mut list, Ok(Outcome::Navigate(route.clone()))), Settled::Navigate(route));
        assert_eq!(settle(&mut list, Ok(Outcome::Nothing)), Settled::Unchanged);
        assert_eq!(ids(&list), ["abc"]);
    }
}
