//! Staff dashboard: counters, leaders, the link review queue, withdrawal
//! processing and per-press-release publication stats.

use common::events::{EventKind, Subscription};
use common::model::dashboard::{AdminDashboard, PressReleaseStats};
use common::model::page::{ListQuery, Page};
use common::model::published_link::{LinkStatus, PublishedLink};
use common::model::withdrawal::WithdrawalStatus;
use yew::prelude::*;

use crate::app::{app_context, AppContext};
use crate::components::format::{format_day, format_ksh, format_points, or_dash};
use crate::components::forms::select_field;
use crate::components::resource_list::ResourcePage;
use crate::components::toast::toast_api_error;
use crate::http::{api, ApiError};
use crate::resources::link_status_badge;
use crate::resources::pending_links::PendingLinks;
use crate::resources::withdrawals::{StatusFilter, Withdrawals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Links,
    Withdrawals,
    Stats,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Links, Tab::Withdrawals, Tab::Stats];

    fn label(&self) -> &'static str {
        match self {
            Tab::Links => "Pending links",
            Tab::Withdrawals => "Withdrawals",
            Tab::Stats => "Press release stats",
        }
    }
}

pub enum Msg {
    Load,
    Loaded(Result<AdminDashboard, ApiError>),
    LinksLoaded(Result<Page<PublishedLink>, ApiError>),
    SetTab(Tab),
    StatusFilter(String),
    PickRelease(String),
    StatsLoaded(String, Result<PressReleaseStats, ApiError>),
}

pub struct AdminDashboardPage {
    context: AppContext,
    dashboard: Option<AdminDashboard>,
    error: Option<String>,
    tab: Tab,
    status: StatusFilter,
    /// `(id, title)` of every press release with at least one published link.
    releases: Vec<(String, String)>,
    selected: String,
    stats: Option<PressReleaseStats>,
    stats_loading: bool,
    _subscription: Subscription,
}

/// Press releases referenced by `links`, first occurrence first.
pub fn releases_with_links(links: &[PublishedLink]) -> Vec<(String, String)> {
    let mut releases: Vec<(String, String)> = Vec::new();
    for link in links {
        if link.press_release.is_empty() || releases.iter().any(|(id, _)| *id == link.press_release) {
            continue;
        }
        let title = if link.press_release_title.trim().is_empty() {
            link.press_release.clone()
        } else {
            link.press_release_title.trim().to_string()
        };
        releases.push((link.press_release.clone(), title));
    }
    releases
}

fn counter(label: &str, value: String) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-label">{ label }</span>
            <span class="stat-value">{ value }</span>
        </div>
    }
}

impl AdminDashboardPage {
    fn build_counters(&self) -> Html {
        let Some(dashboard) = &self.dashboard else {
            return html! {};
        };
        html! {
            <div class="stat-cards">
                { counter("Pending links", dashboard.pending_links.to_string()) }
                { counter("Pending withdrawals", dashboard.pending_withdrawals.to_string()) }
                { counter("Points awarded", format_points(dashboard.total_points_awarded)) }
                { counter("Points withdrawn", format_points(dashboard.total_points_withdrawn)) }
                { counter("Paid out", format_ksh(dashboard.total_ksh_processed)) }
            </div>
        }
    }

    fn build_leaders(&self) -> Html {
        let leaders = self.dashboard.as_ref().map(|d| d.top_journalists.as_slice()).unwrap_or_default();
        if leaders.is_empty() {
            return html! {};
        }
        html! {
            <section class="panel">
                <h2>{ "Top journalists" }</h2>
                <table class="data-table">
                    <thead>
                        <tr><th>{ "#" }</th><th>{ "Name" }</th><th>{ "Email" }</th><th>{ "Points" }</th></tr>
                    </thead>
                    <tbody>
                        { for leaders.iter().enumerate().map(|(rank, leader)| html! {
                            <tr>
                                <td>{ (rank + 1).to_string() }</td>
                                <td>{ or_dash(&leader.name).to_string() }</td>
                                <td>{ or_dash(&leader.email).to_string() }</td>
                                <td>{ format_points(leader.points) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
        }
    }

    fn build_withdrawals(&self, ctx: &Context<Self>) -> Html {
        let options: Vec<(String, String)> = WithdrawalStatus::ALL
            .iter()
            .map(|status| (status.as_str().to_string(), status.label().to_string()))
            .collect();
        let current = self.status.0.map_or("", |status| status.as_str());
        html! {
            <>
                <div class="page-actions">
                    { select_field("Status", current, Some("All statuses"), &options, ctx.link().callback(Msg::StatusFilter)) }
                </div>
                <ResourcePage<Withdrawals> filter={self.status} />
            </>
        }
    }

    fn build_stats(&self, ctx: &Context<Self>) -> Html {
        if self.releases.is_empty() {
            return html! { <div class="list-state empty">{ "No press release has published links yet." }</div> };
        }
        let picker = select_field(
            "Press release",
            &self.selected,
            Some("Choose a press release"),
            &self.releases,
            ctx.link().callback(Msg::PickRelease),
        );
        let body = match (&self.stats, self.stats_loading) {
            (_, true) => html! { <div class="list-state"><div class="spinner" /></div> },
            (Some(stats), false) => build_stats_body(stats),
            (None, false) => html! {},
        };
        html! {
            <section class="panel stats-panel">
                { picker }
                { body }
            </section>
        }
    }
}

fn build_stats_body(stats: &PressReleaseStats) -> Html {
    let links = &stats.press_release.published_links;
    html! {
        <>
            <div class="stat-cards">
                { for LinkStatus::ALL.iter().map(|status| counter(status.label(), stats.links_with(*status).to_string())) }
                { counter("Journalists reached", stats.journalists_shared.to_string()) }
                { counter("Journalists published", stats.journalists_published.to_string()) }
                { counter("Engagement", format!("{:.1}%", stats.engagement_rate)) }
            </div>
            if links.is_empty() {
                <div class="list-state empty">{ "No links submitted for this press release." }</div>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Journalist" }</th>
                            <th>{ "Title" }</th>
                            <th>{ "Link" }</th>
                            <th>{ "Published" }</th>
                            <th>{ "Status" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for links.iter().map(|link| html! {
                            <tr key={link.id.clone()}>
                                <td>{ or_dash(&link.journalist_name).to_string() }</td>
                                <td>{ or_dash(&link.title).to_string() }</td>
                                <td><a href={link.url.clone()} target="_blank" rel="noopener">{ link.url.clone() }</a></td>
                                <td>{ format_day(link.publication_date) }</td>
                                <td>{ link_status_badge(link.status) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </>
    }
}

impl Component for AdminDashboardPage {
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
            tab: Tab::Links,
            status: StatusFilter::default(),
            releases: Vec::new(),
            selected: String::new(),
            stats: None,
            stats_loading: false,
            _subscription: subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let client = self.context.client.clone();
                ctx.link().send_future(async move { Msg::Loaded(api::admin_dashboard(&client).await) });
                let client = self.context.client.clone();
                ctx.link().send_future(async move {
                    Msg::LinksLoaded(api::list_published_links(&client, &ListQuery::default(), None).await)
                });
                if !self.selected.is_empty() {
                    ctx.link().send_message(Msg::PickRelease(self.selected.clone()));
                }
                false
            }
            Msg::Loaded(Ok(dashboard)) => {
                self.dashboard = Some(dashboard);
                self.error = None;
                true
            }
            Msg::Loaded(Err(error)) => {
                log::warn!("admin dashboard failed: {error}");
                self.error = Some(error.to_string());
                true
            }
            Msg::LinksLoaded(Ok(page)) => {
                self.releases = releases_with_links(&page.results);
                true
            }
            Msg::LinksLoaded(Err(error)) => {
                log::warn!("published links for stats failed: {error}");
                false
            }
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::StatusFilter(value) => {
                self.status = StatusFilter(WithdrawalStatus::from_filter(&value));
                true
            }
            Msg::PickRelease(id) => {
                self.selected = id.clone();
                if id.is_empty() {
                    self.stats = None;
                    self.stats_loading = false;
                    return true;
                }
                self.stats_loading = true;
                let client = self.context.client.clone();
                ctx.link().send_future(async move {
                    let result = api::press_release_stats(&client, &id).await;
                    Msg::StatsLoaded(id, result)
                });
                true
            }
            Msg::StatsLoaded(id, result) => {
                if id != self.selected {
                    log::debug!("dropping stats of {id}, {} is selected", self.selected);
                    return false;
                }
                self.stats_loading = false;
                match result {
                    Ok(stats) => self.stats = Some(stats),
                    Err(error) => {
                        log::warn!("stats of {id} failed: {error}");
                        self.stats = None;
                        toast_api_error("Failed to load the statistics", &error);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="page dashboard-page">
                <header class="page-header">
                    <h1>{ "Admin dashboard" }</h1>
                </header>
                if let Some(error) = &self.error {
                    <div class="list-state error">
                        <p>{ error }</p>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
                    </div>
                }
                { self.build_counters() }
                { self.build_leaders() }
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
                        Tab::Links => html! { <ResourcePage<PendingLinks> /> },
                        Tab::Withdrawals => self.build_withdrawals(ctx),
                        Tab::Stats => self.build_stats(ctx),
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: &str, release: &str, title: &str) -> PublishedLink {
        PublishedLink {
            id: id.into(),
            press_release: release.into(),
            press_release_title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn releases_are_listed_once_in_first_seen_order() {
        let links = vec![
            link("l1", "pr2", "Solar farm opens"),
            link("l2", "pr1", ""),
            link("l3", "pr2", "Solar farm opens"),
            link("l4", "", "orphan"),
        ];
        assert_eq!(
            releases_with_links(&links),
            vec![
                ("pr2".to_string(), "Solar farm opens".to_string()),
                ("pr1".to_string(), "pr1".to_string()),
            ]
        );
    }
}
