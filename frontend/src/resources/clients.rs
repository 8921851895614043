use common::events::ResourceKind;
use common::model::client::Client;
use common::model::page::ListQuery;
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::format::or_dash;
use crate::components::forms::client::ClientForm;
use crate::components::resource_list::{FetchFuture, Outcome, Resource};
use crate::http::{api, HttpClient};

#[derive(PartialEq)]
pub struct Clients;

impl Resource for Clients {
    type Item = Client;
    type Filter = ();
    type Action = ();

    const TITLE: &'static str = "Clients";
    const EMPTY: &'static str = "No clients found.";
    const SEARCH_PLACEHOLDER: &'static str = "Search clients...";
    const CREATE_LABEL: Option<&'static str> = Some("New client");
    const EDITABLE: bool = true;
    const DELETE_KIND: Option<ResourceKind> = Some(ResourceKind::Client);

    fn columns() -> &'static [&'static str] {
        &["Client", "Email", "Phone", "Country", "Website"]
    }

    fn cells(client: &Client) -> Vec<Html> {
        let logo = client.logo.as_ref().map(|src| html! { <img class="avatar" src={src.clone()} alt="" /> });
        let website = if client.website.trim().is_empty() {
            html! { "-" }
        } else {
            html! { <a href={client.website.clone()} target="_blank" rel="noopener noreferrer">{ client.website.clone() }</a> }
        };
        vec![
            html! { <div class="identity">{ logo }<span>{ client.name.clone() }</span></div> },
            html! { <>{ or_dash(&client.email) }</> },
            html! { <>{ or_dash(&client.phone) }</> },
            html! { <>{ or_dash(&client.country) }</> },
            website,
        ]
    }

    fn fetch(client: HttpClient, query: ListQuery, _filter: (), signal: Option<AbortSignal>) -> FetchFuture<Client> {
        Box::pin(async move { api::list_clients(&client, &query, signal.as_ref()).await })
    }

    fn form(editing: Option<&Client>, _filter: &(), on_done: Callback<Outcome<Client>>, on_cancel: Callback<()>) -> Html {
        let edit = editing.is_some();
        let on_saved = on_done.reform(move |client| if edit { Outcome::Replace(client) } else { Outcome::Insert(client) });
        html! { <ClientForm initial={editing.cloned()} {on_saved} {on_cancel} /> }
    }
}
