//! Template picker opened from the home page and the templates shortcut.

use common::events::{EventKind, Subscription};
use common::model::template::TemplateType;
use common::templates::TemplateFilter;
use yew::prelude::*;

use crate::app::app_context;
use crate::components::resource_list::ResourcePage;
use crate::components::top_sheet::TopSheet;
use crate::resources::templates::Templates;

pub enum Msg {
    Open,
    Close,
    Filter(String),
}

pub struct TemplateSelector {
    open: bool,
    filter: TemplateFilter,
    _subscription: Subscription,
}

/// `<select>` over the catalog's template families.
pub fn type_filter(current: TemplateFilter, on_change: Callback<String>) -> Html {
    let options: Vec<(String, String)> = TemplateType::ALL
        .iter()
        .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
        .collect();
    let onchange = on_change.reform(|e: Event| e.target_unchecked_into::<web_sys::HtmlSelectElement>().value());
    html! {
        <select class="type-filter" {onchange}>
            <option value="all" selected={current == TemplateFilter::All}>{ "All types" }</option>
            { for options.into_iter().map(|(value, label)| {
                let selected = current.as_str() == value;
                html! { <option {value} {selected}>{ label }</option> }
            }) }
        </select>
    }
}

impl Component for TemplateSelector {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let subscription = app_context(ctx)
            .bus
            .on(EventKind::OpenTemplateSelector, move |_| link.send_message(Msg::Open));
        Self {
            open: false,
            filter: TemplateFilter::All,
            _subscription: subscription,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => {
                self.open = true;
                self.filter = TemplateFilter::All;
            }
            Msg::Close => self.open = false,
            Msg::Filter(value) => self.filter = TemplateFilter::parse(&value),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <TopSheet open={self.open} title="Choose a template" wide=true on_close={link.callback(|_| Msg::Close)}>
                { type_filter(self.filter, link.callback(Msg::Filter)) }
                <ResourcePage<Templates> filter={self.filter} on_navigate={link.callback(|_| Msg::Close)} />
            </TopSheet>
        }
    }
}
