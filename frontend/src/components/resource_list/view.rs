use common::listing::Identified;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::resource::{Layout, Resource};
use super::state::{FormState, ResourcePage};
use crate::components::pagination::pagination;
use crate::components::top_sheet::TopSheet;

pub fn view<R: Resource>(page: &ResourcePage<R>, ctx: &Context<ResourcePage<R>>) -> Html {
    let link = ctx.link();
    html! {
        <section class="resource-list">
            { build_header(page, link) }
            { build_body(page, ctx) }
            { pagination(page.list.current_page(), page.list.total_pages(), link.callback(Msg::SetPage)) }
            { build_form(page, ctx) }
            { build_dialog(page, link) }
        </section>
    }
}

fn build_header<R: Resource>(page: &ResourcePage<R>, link: &Scope<ResourcePage<R>>) -> Html {
    let search = R::SEARCHABLE.then(|| {
        let oninput = link.callback(|e: InputEvent| Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value()));
        html! {
            <div class="search-box">
                <span class="material-icons">{"search"}</span>
                <input
                    type="search"
                    placeholder={R::SEARCH_PLACEHOLDER}
                    value={page.search_input.clone()}
                    {oninput}
                />
            </div>
        }
    });
    let create = R::CREATE_LABEL.map(|label| {
        html! {
            <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                <span class="material-icons">{"add"}</span>{ label }
            </button>
        }
    });
    html! {
        <div class="resource-header">
            <h2>{ R::TITLE }</h2>
            <div class="resource-tools">
                { search }
                { create }
            </div>
        </div>
    }
}

fn build_body<R: Resource>(page: &ResourcePage<R>, ctx: &Context<ResourcePage<R>>) -> Html {
    let filter = &ctx.props().filter;
    let rows: Vec<&R::Item> = page
        .list
        .items()
        .iter()
        .filter(|item| R::visible(item, filter))
        .collect();

    if page.list.is_loading() && page.list.is_empty() {
        return html! { <div class="list-state"><div class="spinner" /></div> };
    }
    if let Some(error) = page.list.error() {
        if page.list.is_empty() {
            return html! {
                <div class="list-state error">
                    <p>{ error }</p>
                    <button class="btn btn-outline" onclick={ctx.link().callback(|_| Msg::Fetch)}>{"Retry"}</button>
                </div>
            };
        }
    }
    if rows.is_empty() {
        return html! { <div class="list-state empty">{ R::EMPTY }</div> };
    }

    match R::LAYOUT {
        Layout::Table => build_table(page, ctx.link(), &rows),
        Layout::Cards => build_cards(page, ctx.link(), &rows),
    }
}

fn build_table<R: Resource>(page: &ResourcePage<R>, link: &Scope<ResourcePage<R>>, rows: &[&R::Item]) -> Html {
    html! {
        <div class={classes!("table-wrapper", page.list.is_loading().then_some("refreshing"))}>
            <table class="data-table">
                <thead>
                    <tr>
                        { for R::columns().iter().map(|column| html! { <th>{ *column }</th> }) }
                        <th class="actions-column" />
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|item| html! {
                        <tr key={item.id().to_string()}>
                            { for R::cells(item).into_iter().map(|cell| html! { <td>{ cell }</td> }) }
                            <td class="row-actions">{ build_actions(page, link, item) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn build_cards<R: Resource>(page: &ResourcePage<R>, link: &Scope<ResourcePage<R>>, rows: &[&R::Item]) -> Html {
    html! {
        <div class={classes!("card-grid", page.list.is_loading().then_some("refreshing"))}>
            { for rows.iter().map(|item| html! {
                <article class="card" key={item.id().to_string()}>
                    { R::card(item) }
                    <div class="card-actions">{ build_actions(page, link, item) }</div>
                </article>
            }) }
        </div>
    }
}

fn build_actions<R: Resource>(page: &ResourcePage<R>, link: &Scope<ResourcePage<R>>, item: &R::Item) -> Html {
    let id = item.id().to_string();
    let busy = page.busy.as_deref() == Some(id.as_str());
    let custom = R::actions(item).into_iter().map(|action| {
        let label = R::action_label(&action);
        let id = id.clone();
        let onclick = link.callback(move |_| Msg::Act(id.clone(), action.clone()));
        html! { <button class="btn btn-small" disabled={busy} {onclick}>{ label }</button> }
    });
    let edit = R::EDITABLE.then(|| {
        let id = id.clone();
        html! {
            <button class="icon-button" title="Edit" disabled={busy} onclick={link.callback(move |_| Msg::OpenEdit(id.clone()))}>
                <span class="material-icons">{"edit"}</span>
            </button>
        }
    });
    let delete = R::DELETE_KIND.map(|_| {
        let id = id.clone();
        html! {
            <button class="icon-button danger" title="Delete" disabled={busy} onclick={link.callback(move |_| Msg::RequestDelete(id.clone()))}>
                <span class="material-icons">{"delete"}</span>
            </button>
        }
    });
    html! {
        <>
            { for custom }
            { edit }
            { delete }
        </>
    }
}

fn build_form<R: Resource>(page: &ResourcePage<R>, ctx: &Context<ResourcePage<R>>) -> Html {
    let link = ctx.link();
    let (title, editing) = match &page.form {
        FormState::Closed => return html! {},
        FormState::Create => (R::CREATE_LABEL.unwrap_or("Create"), None),
        FormState::Edit(item) => ("Edit", Some(item)),
    };
    let on_close = link.callback(|_| Msg::CloseForm);
    html! {
        <TopSheet open=true title={title} on_close={on_close.clone()}>
            { R::form(editing, &ctx.props().filter, link.callback(Msg::Done), on_close) }
        </TopSheet>
    }
}

fn build_dialog<R: Resource>(page: &ResourcePage<R>, link: &Scope<ResourcePage<R>>) -> Html {
    let Some((item, action)) = &page.dialog else {
        return html! {};
    };
    let on_close = link.callback(|_| Msg::CloseDialog);
    html! {
        <TopSheet open=true title={R::action_label(action)} on_close={on_close.clone()}>
            { R::action_view(item, action, link.callback(Msg::Done), on_close) }
        </TopSheet>
    }
}
