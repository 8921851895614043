//! Distribution of a press release to journalists and whole countries.
//!
//! The recipients tab pages through the journalist directory with its own
//! [`ListResource`], independent of the journalists page.

use common::events::{AppEvent, EventKind, Subscription};
use common::listing::{FetchTicket, ListResource, DEFAULT_PAGE_SIZE};
use common::model::journalist::Journalist;
use common::model::page::Page;
use common::model::press_release::Distribution;
use common::model::COUNTRIES;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::{app_context, AppContext};
use crate::components::forms::area_field;
use crate::components::pagination::pagination;
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::components::top_sheet::TopSheet;
use crate::http::{api, ApiError};

const SEARCH_DEBOUNCE_MILLIS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Recipients,
    Countries,
    Message,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Recipients, Tab::Countries, Tab::Message];

    fn label(&self) -> &'static str {
        match self {
            Tab::Recipients => "Recipients",
            Tab::Countries => "Countries",
            Tab::Message => "Message",
        }
    }
}

pub enum Msg {
    Open(String),
    Close,
    SelectTab(Tab),
    Loaded(FetchTicket, Result<Page<Journalist>, ApiError>),
    SearchInput(String),
    ApplySearch(String),
    SetPage(u32),
    ToggleJournalist(String),
    ToggleCountry(&'static str),
    Message(String),
    Send,
    Sent(Result<(), ApiError>),
}

pub struct ShareModal {
    context: AppContext,
    open: bool,
    tab: Tab,
    distribution: Distribution,
    journalists: ListResource<Journalist>,
    search_input: String,
    debounce: Option<Timeout>,
    sending: bool,
    _subscription: Subscription,
}

impl ShareModal {
    fn fetch(&mut self, ctx: &Context<Self>) {
        let ticket = self.journalists.begin_fetch();
        let query = self.journalists.query();
        let client = self.context.client.clone();
        ctx.link().send_future(async move {
            Msg::Loaded(ticket, api::list_journalists(&client, &query, None).await)
        });
    }

    fn recipients_tab(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value()));
        let rows = if self.journalists.is_loading() {
            html! { <div class="list-state"><div class="spinner" /></div> }
        } else if self.journalists.is_empty() {
            html! { <p class="list-state empty">{ "No journalists found." }</p> }
        } else {
            html! {
                <ul class="checklist">
                    { for self.journalists.items().iter().map(|journalist| {
                        let email = journalist.email.clone();
                        let checked = self.distribution.journalists.contains(&journalist.email);
                        html! {
                            <li>
                                <label>
                                    <input type="checkbox" {checked}
                                        onchange={link.callback(move |_| Msg::ToggleJournalist(email.clone()))} />
                                    <span>{ journalist.display_name().to_string() }</span>
                                    <small>{ format!("{} · {}", journalist.media_house, journalist.country) }</small>
                                </label>
                            </li>
                        }
                    }) }
                </ul>
            }
        };
        html! {
            <>
                <input class="search" type="search" placeholder="Search journalists..." value={self.search_input.clone()} {oninput} />
                { rows }
                { pagination(self.journalists.current_page(), self.journalists.total_pages(), link.callback(Msg::SetPage)) }
                <p class="hint">{ format!("{} selected", self.distribution.journalists.len()) }</p>
            </>
        }
    }

    fn countries_tab(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <ul class="checklist">
                { for COUNTRIES.into_iter().map(|country| {
                    let checked = self.distribution.countries.iter().any(|c| c == country);
                    html! {
                        <li>
                            <label>
                                <input type="checkbox" {checked} onchange={link.callback(move |_| Msg::ToggleCountry(country))} />
                                <span>{ country }</span>
                            </label>
                        </li>
                    }
                }) }
            </ul>
        }
    }
}

/// Starts a fresh selection for `id`. A distribution being sent keeps its
/// selection until the response arrives.
fn reopen(distribution: &mut Distribution, sending: bool, id: String) -> bool {
    if sending {
        log::debug!("ignoring share of {id} while {} is being sent", distribution.id);
        return false;
    }
    *distribution = Distribution::new(id);
    true
}

impl Component for ShareModal {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let context = app_context(ctx);
        let link = ctx.link().clone();
        let subscription = context.bus.on(EventKind::OpenShareModal, move |event| {
            if let AppEvent::OpenShareModal(id) = event {
                link.send_message(Msg::Open(id.clone()));
            }
        });
        Self {
            context,
            open: false,
            tab: Tab::Recipients,
            distribution: Distribution::default(),
            journalists: ListResource::new(DEFAULT_PAGE_SIZE),
            search_input: String::new(),
            debounce: None,
            sending: false,
            _subscription: subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open(id) => {
                if !reopen(&mut self.distribution, self.sending, id) {
                    return false;
                }
                self.open = true;
                self.tab = Tab::Recipients;
                self.fetch(ctx);
            }
            Msg::Close => {
                if self.sending {
                    return false;
                }
                self.open = false;
                self.debounce = None;
            }
            Msg::SelectTab(tab) => self.tab = tab,
            Msg::Loaded(ticket, Ok(page)) => return self.journalists.apply_page(ticket, page),
            Msg::Loaded(ticket, Err(error)) => {
                if self.journalists.fail_fetch(ticket, error.to_string()) {
                    toast_api_error("Failed to load journalists", &error);
                }
            }
            Msg::SearchInput(value) => {
                self.search_input = value.clone();
                let link = ctx.link().clone();
                self.debounce = Some(Timeout::new(SEARCH_DEBOUNCE_MILLIS, move || {
                    link.send_message(Msg::ApplySearch(value));
                }));
            }
            Msg::ApplySearch(value) => {
                self.debounce = None;
                if !self.journalists.set_search(value) {
                    return false;
                }
                self.fetch(ctx);
            }
            Msg::SetPage(page) => {
                if !self.journalists.set_page(page) {
                    return false;
                }
                self.fetch(ctx);
            }
            Msg::ToggleJournalist(email) => self.distribution.toggle_journalist(&email),
            Msg::ToggleCountry(country) => self.distribution.toggle_country(country),
            Msg::Message(message) => self.distribution.message = message,
            Msg::Send => {
                if self.sending {
                    return false;
                }
                if !self.distribution.has_recipients() {
                    toast_error("Select at least one journalist or country");
                    return false;
                }
                self.sending = true;
                let client = self.context.client.clone();
                let distribution = self.distribution.clone();
                ctx.link().send_future(async move {
                    Msg::Sent(api::distribute_press_release(&client, &distribution).await)
                });
            }
            Msg::Sent(result) => {
                self.sending = false;
                match result {
                    Ok(()) => {
                        log::info!(
                            "distributed {} to {} journalists and {} countries",
                            self.distribution.id,
                            self.distribution.journalists.len(),
                            self.distribution.countries.len()
                        );
                        toast_success("Press release distributed");
                        self.distribution.reset();
                        self.open = false;
                        self.context.bus.emit(AppEvent::ReloadData);
                    }
                    Err(error) => toast_api_error("Failed to distribute the press release", &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let body = match self.tab {
            Tab::Recipients => self.recipients_tab(ctx),
            Tab::Countries => self.countries_tab(ctx),
            Tab::Message => area_field(
                "Message to recipients",
                &self.distribution.message,
                6,
                link.callback(Msg::Message),
            ),
        };
        html! {
            <TopSheet open={self.open} title="Share press release" wide=true on_close={link.callback(|_| Msg::Close)}>
                <nav class="tabs">
                    { for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button type="button" class={classes!("tab", (tab == self.tab).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SelectTab(tab))}>
                                { tab.label() }
                            </button>
                        }
                    }) }
                </nav>
                <div class="tab-body">{ body }</div>
                <div class="form-buttons">
                    <button type="button" class="btn btn-outline" disabled={self.sending} onclick={link.callback(|_| Msg::Close)}>
                        { "Cancel" }
                    </button>
                    <button type="button" class="btn btn-primary"
                        disabled={self.sending || !self.distribution.has_recipients()}
                        onclick={link.callback(|_| Msg::Send)}>
                        { if self.sending { "Sending..." } else { "Send" } }
                    </button>
                </div>
            </TopSheet>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_replaces_an_idle_selection() {
        let mut distribution = Distribution::new("p1");
        distribution.toggle_country("Kenya");
        assert!(reopen(&mut distribution, false, "p2".into()));
        assert_eq!(distribution, Distribution::new("p2"));
    }

    #[test]
    fn opening_while_sending_keeps_the_selection_in_flight() {
        let mut distribution = Distribution::new("p1");
        distribution.toggle_country("Kenya");
        let in_flight = distribution.clone();
        assert!(!reopen(&mut distribution, true, "p2".into()));
        assert_eq!(distribution, in_flight);
    }
}
