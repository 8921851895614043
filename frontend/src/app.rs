//! Application root.
//!
//! `App` mounts the router; `Root` loads the runtime configuration, builds the
//! shared [`AppContext`] once and provides it to every page. A 401 from any
//! call clears the stored session and navigates to the login page.

use std::rc::Rc;

use common::events::{AppEvent, EventBus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth_store::AuthStore;
use crate::config::RuntimeConfig;
use crate::http::HttpClient;
use crate::logging;
use crate::routes::{switch, Route};

/// What every component may reach through the Yew context.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub client: HttpClient,
    pub bus: EventBus<AppEvent>,
    pub config: Rc<RuntimeConfig>,
}

impl AppContext {
    fn new(config: RuntimeConfig, on_unauthorized: Callback<()>) -> Self {
        Self {
            client: HttpClient::new(&config.api_url, on_unauthorized),
            bus: EventBus::new(),
            config: Rc::new(config),
        }
    }

    /// Stand-in for components rendered outside the provider.
    fn detached() -> Self {
        log::warn!("component rendered without an application context");
        Self::new(RuntimeConfig::default(), Callback::noop())
    }
}

/// Reads the application context from a struct component.
pub fn app_context<C: Component>(ctx: &Context<C>) -> AppContext {
    ctx.link()
        .context::<AppContext>(Callback::noop())
        .map(|(context, _handle)| context)
        .unwrap_or_else(AppContext::detached)
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Root />
            </BrowserRouter>
        }
    }
}

pub enum RootMsg {
    ConfigLoaded(RuntimeConfig),
    Unauthorized,
}

pub struct Root {
    context: Option<AppContext>,
}

impl Component for Root {
    type Message = RootMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { RootMsg::ConfigLoaded(RuntimeConfig::load().await) });
        Self { context: None }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RootMsg::ConfigLoaded(config) => {
                logging::init(&config.log_level);
                log::info!("API base: {}", config.api_url);
                let on_unauthorized = ctx.link().callback(|_| RootMsg::Unauthorized);
                self.context = Some(AppContext::new(config, on_unauthorized));
                true
            }
            RootMsg::Unauthorized => {
                AuthStore::clear();
                match ctx.link().navigator() {
                    Some(navigator) => navigator.push(&Route::Login),
                    None => log::error!("no navigator to leave the protected page"),
                }
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.context {
            Some(context) => html! {
                <ContextProvider<AppContext> context={context.clone()}>
                    <Switch<Route> render={switch} />
                </ContextProvider<AppContext>>
            },
            None => html! { <div class="splash"><div class="spinner" /></div> },
        }
    }
}
