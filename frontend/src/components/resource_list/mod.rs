//! Generic paginated list: fetch, search, create, edit, delete and row
//! actions for any [`Resource`].
//!
//! Lifecycle
//! - On create: subscribe to the bus (deletions of our kind, reload events)
//!   and fetch page 1.
//! - Every fetch takes a ticket and aborts the one it supersedes; stale
//!   responses are dropped by [`ListResource`](common::listing::ListResource).
//! - On destroy: abort the in-flight fetch. The subscriptions are dropped with
//!   the state, which unregisters them.

use common::events::{AppEvent, EventKind};
use yew::prelude::*;

mod messages;
mod props;
pub mod resource;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ResourceProps;
pub use resource::{ActionFuture, FetchFuture, Layout, Outcome, Resource, Step};
pub use state::ResourcePage;

use crate::app::app_context;

impl<R: Resource> Component for ResourcePage<R> {
    type Message = Msg<R>;
    type Properties = ResourceProps<R>;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = ResourcePage::new(app_context(ctx));
        let bus = page.context.bus.clone();

        if let Some(kind) = R::DELETE_KIND {
            let link = ctx.link().clone();
            page.subscriptions.push(bus.on(EventKind::Deleted, move |event| {
                if let AppEvent::Deleted(target) = event {
                    if target.kind == kind {
                        link.send_message(Msg::Deleted(target.id.clone()));
                    }
                }
            }));
        }
        for kind in R::RELOAD_ON {
            let link = ctx.link().clone();
            page.subscriptions
                .push(bus.on(*kind, move |_| link.send_message(Msg::Fetch)));
        }

        update::fetch(&mut page, ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if R::REMOTE_FILTER && ctx.props().filter != old_props.filter {
            self.list.reset_page();
            update::fetch(self, ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.abort_fetch();
    }
}
