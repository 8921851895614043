//! Link review queue of the admin dashboard.

use common::events::AppEvent;
use common::model::page::ListQuery;
use common::model::published_link::PublishedLink;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::format::{format_date, format_day, or_dash};
use crate::components::forms::reject_link::RejectLinkDialog;
use crate::components::resource_list::{ActionFuture, FetchFuture, Outcome, Resource, Step};
use crate::components::toast::toast_success;
use crate::http::{api, HttpClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Approve,
    Reject,
}

#[derive(PartialEq)]
pub struct PendingLinks;

impl Resource for PendingLinks {
    type Item = PublishedLink;
    type Filter = ();
    type Action = Review;

    const TITLE: &'static str = "Pending links";
    const EMPTY: &'static str = "No links waiting for review.";
    const SEARCH_PLACEHOLDER: &'static str = "Search links...";

    fn columns() -> &'static [&'static str] {
        &["Journalist", "Press release", "Link", "Published", "Submitted"]
    }

    fn cells(link: &PublishedLink) -> Vec<Html> {
        let label = if link.title.trim().is_empty() { &link.url } else { &link.title };
        vec![
            html! { <>{ or_dash(&link.journalist_name).to_string() }</> },
            html! { <>{ or_dash(&link.press_release_title).to_string() }</> },
            html! { <a href={link.url.clone()} target="_blank" rel="noopener noreferrer">{ label.clone() }</a> },
            html! { <>{ format_day(link.publication_date) }</> },
            html! { <>{ format_date(link.created_at) }</> },
        ]
    }

    fn fetch(client: HttpClient, query: ListQuery, _filter: (), signal: Option<AbortSignal>) -> FetchFuture<PublishedLink> {
        Box::pin(async move { api::list_published_links(&client, &query, signal.as_ref()).await })
    }

    /// The queue endpoint may still hold rows reviewed elsewhere.
    fn visible(link: &PublishedLink, _filter: &()) -> bool {
        !link.status.is_terminal()
    }

    fn actions(link: &PublishedLink) -> Vec<Review> {
        if link.status.is_terminal() {
            Vec::new()
        } else {
            vec![Review::Approve, Review::Reject]
        }
    }

    fn action_label(action: &Review) -> &'static str {
        match action {
            Review::Approve => "Approve",
            Review::Reject => "Reject",
        }
    }

    fn step(_link: &PublishedLink, action: &Review) -> Step {
        match action {
            Review::Approve => Step::Run,
            Review::Reject => Step::Dialog,
        }
    }

    fn action_view(
        link: &PublishedLink,
        _action: &Review,
        on_done: Callback<Outcome<PublishedLink>>,
        on_cancel: Callback<()>,
    ) -> Html {
        let on_rejected = on_done.reform(Outcome::Remove);
        html! {
            <RejectLinkDialog link_id={link.id.clone()} url={link.url.clone()} {on_rejected} {on_cancel} />
        }
    }

    fn perform(client: HttpClient, link: PublishedLink, _action: Review) -> ActionFuture<PublishedLink> {
        Box::pin(async move {
            api::approve_link(&client, &link.id).await?;
            toast_success("Link approved");
            Ok(Outcome::Remove(link.id))
        })
    }

    /// Approval awards points and changes the pending counter.
    fn after_mutation() -> Option<AppEvent> {
        Some(AppEvent::ReloadDashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::published_link::LinkStatus;

    fn link(status: LinkStatus) -> PublishedLink {
        PublishedLink {
            id: "l1".into(),
            url: "https://news.example/story".into(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn only_pending_links_can_be_reviewed() {
        assert_eq!(PendingLinks::actions(&link(LinkStatus::Pending)), vec![Review::Approve, Review::Reject]);
        assert!(PendingLinks::actions(&link(LinkStatus::Approved)).is_empty());
        assert!(PendingLinks::actions(&link(LinkStatus::Rejected)).is_empty());
    }

    #[test]
    fn reject_opens_a_dialog_and_approve_runs() {
        let pending = link(LinkStatus::Pending);
        assert_eq!(PendingLinks::step(&pending, &Review::Approve), Step::Run);
        assert_eq!(PendingLinks::step(&pending, &Review::Reject), Step::Dialog);
    }

    #[test]
    fn reviewed_links_leave_the_queue() {
        assert!(PendingLinks::visible(&link(LinkStatus::Pending), &()));
        assert!(!PendingLinks::visible(&link(LinkStatus::Approved), &()));
    }
}
