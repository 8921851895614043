use yew::prelude::*;

use crate::components::resource_list::ResourcePage;
use crate::resources::clients::Clients;

#[function_component(ClientsPage)]
pub fn clients_page() -> Html {
    html! {
        <div class="page">
            <ResourcePage<Clients> />
        </div>
    }
}
