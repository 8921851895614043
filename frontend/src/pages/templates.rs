use common::templates::TemplateFilter;
use yew::prelude::*;

use crate::components::modals::template_selector::type_filter;
use crate::components::resource_list::ResourcePage;
use crate::resources::templates::Templates;

#[function_component(TemplatesPage)]
pub fn templates_page() -> Html {
    let filter = use_state(TemplateFilter::default);
    let on_change = {
        let filter = filter.clone();
        Callback::from(move |value: String| filter.set(TemplateFilter::parse(&value)))
    };
    html! {
        <div class="page">
            <div class="page-actions">
                { type_filter(*filter, on_change) }
            </div>
            <ResourcePage<Templates> filter={*filter} />
        </div>
    }
}
