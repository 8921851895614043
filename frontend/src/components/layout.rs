use yew::{html, Children, Component, Context, Html, Properties};

use super::aside::Aside;
use super::modals::GlobalModals;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Shell of every signed-in page: sidebar, routed content and the
/// bus-driven modals.
pub struct Layout;

impl Component for Layout {
    type Message = ();
    type Properties = LayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Layout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <Aside />
                <main class="app-main">
                    { for ctx.props().children.iter() }
                </main>
                <GlobalModals />
            </div>
        }
    }
}
