//! Sidebar: brand, the "new press release" shortcut, navigation and the
//! signed-in user.

use common::model::auth::User;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{app_context, AppContext};
use crate::auth_store::AuthStore;
use crate::components::modals::generate::start_draft;
use crate::http::{api, ApiError};
use crate::routes::Route;

static NAV: [(Route, &str, &str); 6] = [
    (Route::Home, "Dashboard", "dashboard"),
    (Route::Clients, "Clients", "business"),
    (Route::Journalists, "Journalists", "groups"),
    (Route::Templates, "Templates", "view_quilt"),
    (Route::JournalistDashboard, "Journalist dashboard", "stars"),
    (Route::AdminDashboard, "Admin dashboard", "admin_panel_settings"),
];

pub enum Msg {
    UserLoaded(Result<User, ApiError>),
    NewPressRelease,
    Logout,
}

pub struct Aside {
    context: AppContext,
    user: Option<User>,
}

impl Component for Aside {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let context = app_context(ctx);
        let client = context.client.clone();
        ctx.link().send_future(async move { Msg::UserLoaded(api::me(&client).await) });
        Self {
            context,
            user: AuthStore::user(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UserLoaded(Ok(user)) => {
                AuthStore::save_user(&user);
                self.user = Some(user);
                true
            }
            Msg::UserLoaded(Err(error)) => {
                log::warn!("cannot load the current user: {error}");
                false
            }
            Msg::NewPressRelease => {
                start_draft(&self.context);
                false
            }
            Msg::Logout => {
                AuthStore::clear();
                log::info!("signed out");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = link.route::<Route>();
        html! {
            <aside class="app-aside">
                <div class="brand">
                    <span class="material-icons">{ "campaign" }</span>
                    <span>{ "Wezawire" }</span>
                </div>
                <button class="btn btn-primary new-release" onclick={link.callback(|_| Msg::NewPressRelease)}>
                    <span class="material-icons">{ "add" }</span>
                    { "New Press Release" }
                </button>
                <nav class="nav">
                    { for NAV.iter().map(|(route, label, icon)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                <span class="material-icons">{ *icon }</span>
                                <span>{ *label }</span>
                            </Link<Route>>
                        }
                    }) }
                </nav>
                <div class="aside-user">
                    if let Some(user) = &self.user {
                        <div class="user-card">
                            <span class="user-name">{ user.full_name() }</span>
                            <span class="user-email">{ user.email.clone() }</span>
                        </div>
                    }
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Logout)}>
                        <span class="material-icons">{ "logout" }</span>
                        { "Log out" }
                    </button>
                </div>
            </aside>
        }
    }
}
