use common::events::AppEvent;
use yew::prelude::*;

use crate::app::{app_context, AppContext};
use crate::auth_store::AuthStore;
use crate::components::format::{greeting, local_hour};
use crate::components::modals::generate::start_draft;
use crate::components::resource_list::ResourcePage;
use crate::resources::press_releases::PressReleases;

pub enum Msg {
    NewPressRelease,
    FromTemplate,
}

pub struct HomePage {
    context: AppContext,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NewPressRelease => start_draft(&self.context),
            Msg::FromTemplate => self.context.bus.emit(AppEvent::OpenTemplateSelector),
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let name = AuthStore::user()
            .map(|user| user.first_name)
            .filter(|name| !name.trim().is_empty());
        let title = match name {
            Some(name) => format!("{}, {name}", greeting(local_hour())),
            None => greeting(local_hour()).to_string(),
        };
        html! {
            <div class="page home-page">
                <header class="page-header">
                    <div>
                        <h1>{ title }</h1>
                        <p class="subtitle">{ "Write, polish and distribute your press releases." }</p>
                    </div>
                    <div class="page-actions">
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::FromTemplate)}>
                            <span class="material-icons">{ "dashboard_customize" }</span>
                            { "From template" }
                        </button>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::NewPressRelease)}>
                            <span class="material-icons">{ "add" }</span>
                            { "New press release" }
                        </button>
                    </div>
                </header>
                <ResourcePage<PressReleases> />
            </div>
        }
    }
}
