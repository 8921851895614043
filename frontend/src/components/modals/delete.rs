//! Delete confirmation for any [`ResourceKind`].
//!
//! Opened through `OpenDeleteModal`; on success it broadcasts `Deleted` so
//! every list holding the item drops it, and `ReloadPressReleases` for press
//! releases.

use common::events::{AppEvent, DeleteTarget, EventKind, ResourceKind, Subscription};
use yew::prelude::*;

use crate::app::{app_context, AppContext};
use crate::components::toast::{toast_api_error, toast_success};
use crate::components::top_sheet::TopSheet;
use crate::http::{api, ApiError, HttpClient};

pub enum Msg {
    Open(DeleteTarget),
    Close,
    Confirm,
    Finished(DeleteTarget, Result<(), ApiError>),
}

pub struct DeleteModal {
    context: AppContext,
    target: Option<DeleteTarget>,
    deleting: bool,
    _subscription: Subscription,
}

/// What a finished delete leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum Finish {
    /// Close the sheet and broadcast these events, `Deleted` first.
    Deleted(Vec<AppEvent>),
    /// Keep the sheet open and the item in place; one error toast.
    Failed { context: String, error: ApiError },
}

pub fn finish(target: DeleteTarget, result: Result<(), ApiError>) -> Finish {
    match result {
        Ok(()) => {
            let kind = target.kind;
            let mut events = vec![AppEvent::Deleted(target)];
            if kind == ResourceKind::PressRelease {
                events.push(AppEvent::ReloadPressReleases);
            }
            Finish::Deleted(events)
        }
        Err(error) => Finish::Failed {
            context: format!("Failed to delete the {}", target.kind.label()),
            error,
        },
    }
}

async fn delete(client: &HttpClient, target: &DeleteTarget) -> Result<(), ApiError> {
    match target.kind {
        ResourceKind::PressRelease => api::delete_press_release(client, &target.id).await,
        ResourceKind::Client => api::delete_client(client, &target.id).await,
        ResourceKind::Journalist => api::delete_journalist(client, &target.id).await,
        ResourceKind::PublishedLink => api::delete_published_link(client, &target.id).await,
    }
}

impl Component for DeleteModal {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let context = app_context(ctx);
        let link = ctx.link().clone();
        let subscription = context.bus.on(EventKind::OpenDeleteModal, move |event| {
            if let AppEvent::OpenDeleteModal(target) = event {
                link.send_message(Msg::Open(target.clone()));
            }
        });
        Self {
            context,
            target: None,
            deleting: false,
            _subscription: subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open(target) => {
                if self.deleting {
                    return false;
                }
                self.target = Some(target);
            }
            Msg::Close => {
                if self.deleting {
                    return false;
                }
                self.target = None;
            }
            Msg::Confirm => {
                let Some(target) = self.target.clone() else {
                    return false;
                };
                if self.deleting {
                    return false;
                }
                self.deleting = true;
                let client = self.context.client.clone();
                ctx.link().send_future(async move {
                    let result = delete(&client, &target).await;
                    Msg::Finished(target, result)
                });
            }
            Msg::Finished(target, result) => {
                self.deleting = false;
                let label = target.kind.label();
                match finish(target, result) {
                    Finish::Deleted(events) => {
                        log::info!("deleted a {label}");
                        toast_success(&format!("The {label} was deleted"));
                        self.target = None;
                        for event in events {
                            self.context.bus.emit(event);
                        }
                    }
                    Finish::Failed { context, error } => toast_api_error(&context, &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let label = self.target.as_ref().map_or("item", |target| target.kind.label());
        html! {
            <TopSheet open={self.target.is_some()} title={format!("Delete {label}")} on_close={link.callback(|_| Msg::Close)}>
                <p>{ format!("Are you sure you want to delete this {label}? This cannot be undone.") }</p>
                <div class="form-buttons">
                    <button type="button" class="btn btn-outline" disabled={self.deleting} onclick={link.callback(|_| Msg::Close)}>
                        { "Cancel" }
                    </button>
                    <button type="button" class="btn btn-danger" disabled={self.deleting} onclick={link.callback(|_| Msg::Confirm)}>
                        { if self.deleting { "Deleting..." } else { "Delete" } }
                    </button>
                </div>
            </TopSheet>
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use common::events::EventBus;
    use common::listing::ListResource;
    use common::model::client::Client;
    use common::model::page::Page;

    use super::*;

    fn clients() -> ListResource<Client> {
        let mut list = ListResource::new(10);
        let ticket = list.begin_fetch();
        let rows = ["x", "y"]
            .into_iter()
            .map(|id| Client {
                id: id.into(),
                ..Default::default()
            })
            .collect();
        list.apply_page(ticket, Page::new(rows, 2));
        list
    }

    /// Wires a bus the way `ResourcePage` does: `Deleted` of its kind drops the row.
    fn broadcast(finish: Finish, list: &Rc<RefCell<ListResource<Client>>>) -> usize {
        let bus: EventBus<AppEvent> = EventBus::new();
        let received = Rc::new(Cell::new(0));
        let _subscription = {
            let list = list.clone();
            let received = received.clone();
            bus.on(EventKind::Deleted, move |event| {
                received.set(received.get() + 1);
                if let AppEvent::Deleted(target) = event {
                    list.borrow_mut().remove(&target.id);
                }
            })
        };
        if let Finish::Deleted(events) = finish {
            for event in events {
                bus.emit(event);
            }
        }
        received.get()
    }

    #[test]
    fn successful_delete_removes_the_row() {
        let list = Rc::new(RefCell::new(clients()));
        let target = DeleteTarget::new("x", ResourceKind::Client);
        let finished = finish(target.clone(), Ok(()));
        assert_eq!(finished, Finish::Deleted(vec![AppEvent::Deleted(target)]));

        assert_eq!(broadcast(finished, &list), 1);
        assert!(!list.borrow().contains("x"));
        assert!(list.borrow().contains("y"));
    }

    #[test]
    fn failed_delete_keeps_the_row_and_reports_once() {
        let list = Rc::new(RefCell::new(clients()));
        let error = ApiError::Server { status: 500 };
        let finished = finish(DeleteTarget::new("x", ResourceKind::Client), Err(error.clone()));
        assert_eq!(
            finished,
            Finish::Failed {
                context: "Failed to delete the client".into(),
                error,
            }
        );

        assert_eq!(broadcast(finished, &list), 0);
        assert!(list.borrow().contains("x"));
        assert_eq!(list.borrow().items().len(), 2);
    }

    #[test]
    fn deleting_a_press_release_also_reloads_the_grid() {
        let target = DeleteTarget::new("p1", ResourceKind::PressRelease);
        assert_eq!(
            finish(target.clone(), Ok(())),
            Finish::Deleted(vec![AppEvent::Deleted(target), AppEvent::ReloadPressReleases])
        );
    }
}
