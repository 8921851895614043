use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth_store::AuthStore;
use crate::components::layout::Layout;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::clients::ClientsPage;
use crate::pages::editor::EditorPage;
use crate::pages::home::HomePage;
use crate::pages::journalist_dashboard::JournalistDashboardPage;
use crate::pages::journalists::JournalistsPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::templates::TemplatesPage;

#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/clients")]
    Clients,
    #[at("/journalists")]
    Journalists,
    #[at("/templates")]
    Templates,
    #[at("/editor/:id")]
    Editor { id: String },
    #[at("/journalist-dashboard")]
    JournalistDashboard,
    #[at("/admin-dashboard")]
    AdminDashboard,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register | Route::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    if !route.is_public() && !AuthStore::is_signed_in() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
        protected => html! { <Layout>{ protected_page(protected) }</Layout> },
    }
}

fn protected_page(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Clients => html! { <ClientsPage /> },
        Route::Journalists => html! { <JournalistsPage /> },
        Route::Templates => html! { <TemplatesPage /> },
        Route::Editor { id } => html! { <EditorPage key={id.clone()} id={id.clone()} /> },
        Route::JournalistDashboard => html! { <JournalistDashboardPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::Login | Route::Register | Route::NotFound => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_route_carries_the_id() {
        let route = Route::Editor { id: "42".into() };
        assert_eq!(route.to_path(), "/editor/42");
        assert_eq!(Route::recognize("/editor/42"), Some(route));
    }

    #[test]
    fn only_auth_pages_are_public() {
        assert!(Route::Login.is_public());
        assert!(Route::Register.is_public());
        assert!(!Route::Home.is_public());
        assert!(!Route::AdminDashboard.is_public());
    }
}
