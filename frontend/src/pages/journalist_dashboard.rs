//! A journalist's own view: balance, received press releases, submitted
//! links and withdrawal requests.

use common::events::{AppEvent, EventKind, Subscription};
use common::model::dashboard::JournalistDashboard;
use common::model::press_release::PressReleaseSummary;
use common::model::published_link::PublishedLink;
use yew::prelude::*;

use crate::app::{app_context, AppContext};
use crate::components::format::{format_date, format_ksh, format_points, or_dash};
use crate::components::forms::link::LinkForm;
use crate::components::resource_list::ResourcePage;
use crate::components::top_sheet::TopSheet;
use crate::http::{api, ApiError};
use crate::resources::my_links::{MyLinks, ReceivedReleases};
use crate::resources::my_withdrawals::{AvailablePoints, MyWithdrawals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Received,
    Links,
    Withdrawals,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Received, Tab::Links, Tab::Withdrawals];

    fn label(&self) -> &'static str {
        match self {
            Tab::Received => "Press releases",
            Tab::Links => "My links",
            Tab::Withdrawals => "Withdrawals",
        }
    }
}

pub enum Msg {
    Load,
    Loaded(Result<JournalistDashboard, ApiError>),
    SetTab(Tab),
    SubmitLink(String),
    CloseLinkForm,
    LinkSaved(PublishedLink),
}

pub struct JournalistDashboardPage {
    context: AppContext,
    dashboard: Option<JournalistDashboard>,
    error: Option<String>,
    tab: Tab,
    /// Press release the link form was opened for.
    submitting: Option<String>,
    _subscription: Subscription,
}

/// `(id, title)` choices for the link form.
pub fn received_releases(releases: &[PressReleaseSummary]) -> Vec<(String, String)> {
    releases
        .iter()
        .map(|release| {
            let title = if release.title.trim().is_empty() { "Untitled press release" } else { release.title.trim() };
            (release.id.clone(), title.to_string())
        })
        .collect()
}

impl JournalistDashboardPage {
    fn releases(&self) -> Vec<(String, String)> {
        self.dashboard
            .as_ref()
            .map(|dashboard| received_releases(&dashboard.press_releases))
            .unwrap_or_default()
    }

    fn build_header(&self) -> Html {
        let Some(dashboard) = &self.dashboard else {
            return html! {};
        };
        html! {
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-label">{ "Available points" }</span>
                    <span class="stat-value">{ format_points(dashboard.total_points) }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{ "Worth" }</span>
                    <span class="stat-value">{ format_ksh(dashboard.points_in_ksh) }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{ "Links submitted" }</span>
                    <span class="stat-value">{ dashboard.published_links.len().to_string() }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{ "Press releases received" }</span>
                    <span class="stat-value">{ dashboard.press_releases.len().to_string() }</span>
                </div>
            </div>
        }
    }

    fn build_received(&self, ctx: &Context<Self>) -> Html {
        let releases = self.dashboard.as_ref().map(|d| d.press_releases.as_slice()).unwrap_or_default();
        if releases.is_empty() {
            return html! { <div class="list-state empty">{ "No press releases have been shared with you yet." }</div> };
        }
        let link = ctx.link();
        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Title" }</th>
                        <th>{ "Client" }</th>
                        <th>{ "Country" }</th>
                        <th>{ "Received" }</th>
                        <th />
                    </tr>
                </thead>
                <tbody>
                    { for releases.iter().map(|release| {
                        let id = release.id.clone();
                        html! {
                            <tr key={release.id.clone()}>
                                <td>{ or_dash(&release.title).to_string() }</td>
                                <td>{ or_dash(&release.client).to_string() }</td>
                                <td>{ or_dash(&release.country).to_string() }</td>
                                <td>{ format_date(release.created_at) }</td>
                                <td class="row-actions">
                                    <button class="btn btn-small" onclick={link.callback(move |_| Msg::SubmitLink(id.clone()))}>
                                        { "Submit link" }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }
}

impl Component for JournalistDashboardPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let context = app_context(ctx);
        let link = ctx.link().clone();
        let subscription = context
            .bus
            .on(EventKind::ReloadDashboard, move |_| link.send_message(Msg::Load));
        ctx.link().send_message(Msg::Load);
        Self {
            context,
            dashboard: None,
            error: None,
            tab: Tab::Received,
            submitting: None,
            _subscription: subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let client = self.context.client.clone();
                ctx.link()
                    .send_future(async move { Msg::Loaded(api::journalist_dashboard(&client).await) });
                false
            }
            Msg::Loaded(Ok(dashboard)) => {
                self.dashboard = Some(dashboard);
                self.error = None;
                true
            }
            Msg::Loaded(Err(error)) => {
                log::warn!("journalist dashboard failed: {error}");
                self.error = Some(error.to_string());
                true
            }
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::SubmitLink(id) => {
                self.submitting = Some(id);
                true
            }
            Msg::CloseLinkForm => {
                self.submitting = None;
                true
            }
            Msg::LinkSaved(link) => {
                log::info!("link {} submitted for {}", link.id, link.press_release);
                self.submitting = None;
                self.context.bus.emit(AppEvent::ReloadDashboard);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let available = self.dashboard.as_ref().map_or(0, |dashboard| dashboard.total_points);
        let name = self
            .dashboard
            .as_ref()
            .map(|dashboard| dashboard.journalist.display_name().to_string())
            .unwrap_or_default();
        html! {
            <div class="page dashboard-page">
                <header class="page-header">
                    <div>
                        <h1>{ "My dashboard" }</h1>
                        <p class="subtitle">{ name }</p>
                    </div>
                </header>
                if let Some(error) = &self.error {
                    <div class="list-state error">
                        <p>{ error }</p>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
                    </div>
                }
                { self.build_header() }
                <div class="tabs">
                    { for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button
                                class={classes!("tab", (self.tab == tab).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetTab(tab))}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                </div>
                {
                    match self.tab {
                        Tab::Received => self.build_received(ctx),
                        Tab::Links => html! { <ResourcePage<MyLinks> filter={ReceivedReleases(self.releases())} /> },
                        Tab::Withdrawals => html! { <ResourcePage<MyWithdrawals> filter={AvailablePoints(available)} /> },
                    }
                }
                <TopSheet open={self.submitting.is_some()} title="Submit published link" on_close={link.callback(|_| Msg::CloseLinkForm)}>
                    <LinkForm
                        releases={self.releases()}
                        preset={self.submitting.clone()}
                        on_saved={link.callback(Msg::LinkSaved)}
                        on_cancel={link.callback(|_| Msg::CloseLinkForm)}
                    />
                </TopSheet>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn received_releases_fall_back_to_a_placeholder_title() {
        let releases = vec![
            PressReleaseSummary {
                id: "pr1".into(),
                title: " Harvest report ".into(),
                ..Default::default()
            },
            PressReleaseSummary {
                id: "pr2".into(),
                ..Default::default()
            },
        ];
        assert_eq!(
            received_releases(&releases),
            vec![
                ("pr1".to_string(), "Harvest report".to_string()),
                ("pr2".to_string(), "Untitled press release".to_string()),
            ]
        );
    }
}
