use common::events::{AppEvent, EventKind, ResourceKind};
use common::model::page::ListQuery;
use common::model::press_release::PressRelease;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::format::{format_date, or_dash};
use crate::components::preview::DocumentView;
use crate::components::resource_list::{FetchFuture, Layout, Resource, Step};
use crate::http::{api, HttpClient};
use crate::routes::Route;

/// Words shown on a card before the preview is cut.
const PREVIEW_WORDS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressReleaseAction {
    Open,
    Share,
}

#[derive(PartialEq)]
pub struct PressReleases;

impl Resource for PressReleases {
    type Item = PressRelease;
    type Filter = ();
    type Action = PressReleaseAction;

    const TITLE: &'static str = "Press releases";
    const EMPTY: &'static str = "No press releases yet. Create one to get started.";
    const SEARCH_PLACEHOLDER: &'static str = "Search press releases...";
    const LAYOUT: Layout = Layout::Cards;
    const DELETE_KIND: Option<ResourceKind> = Some(ResourceKind::PressRelease);
    const RELOAD_ON: &'static [EventKind] = &[EventKind::ReloadPressReleases, EventKind::ReloadData];

    fn card(release: &PressRelease) -> Html {
        html! {
            <>
                <header class="card-header">
                    <h3>{ release.display_title().to_string() }</h3>
                    <span class={classes!("badge", if release.is_published { "badge-success" } else { "badge-muted" })}>
                        { if release.is_published { "Published" } else { "Draft" } }
                    </span>
                </header>
                <DocumentView document={release.document()} words={Some(PREVIEW_WORDS)} class={classes!("card-preview")} />
                <footer class="card-meta">
                    <span>{ format_date(release.created_at) }</span>
                    <span>{ or_dash(&release.client).to_string() }</span>
                    <span>{ or_dash(&release.country).to_string() }</span>
                    <span>{ or_dash(&release.author_name).to_string() }</span>
                </footer>
            </>
        }
    }

    fn fetch(client: HttpClient, query: ListQuery, _filter: (), signal: Option<AbortSignal>) -> FetchFuture<PressRelease> {
        Box::pin(async move { api::list_press_releases(&client, &query, signal.as_ref()).await })
    }

    fn actions(_release: &PressRelease) -> Vec<PressReleaseAction> {
        vec![PressReleaseAction::Open, PressReleaseAction::Share]
    }

    fn action_label(action: &PressReleaseAction) -> &'static str {
        match action {
            PressReleaseAction::Open => "Open",
            PressReleaseAction::Share => "Share",
        }
    }

    fn step(release: &PressRelease, action: &PressReleaseAction) -> Step {
        match action {
            PressReleaseAction::Open => Step::Navigate(Route::Editor {
                id: release.id.clone(),
            }),
            PressReleaseAction::Share => Step::Emit(AppEvent::OpenShareModal(release.id.clone())),
        }
    }
}
