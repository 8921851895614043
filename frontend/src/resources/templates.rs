//! The bundled template catalog, paged locally.

use common::listing::paginate;
use common::model::page::{ListQuery, Page};
use common::model::press_release::NewPressRelease;
use common::model::template::Template;
use common::templates::{filtered, TemplateFilter, TEMPLATE_PAGE_SIZE};
use web_sys::AbortSignal;
use yew::prelude::*;

use crate::components::resource_list::{ActionFuture, FetchFuture, Layout, Outcome, Resource};
use crate::http::{api, HttpClient};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseTemplate;

#[derive(PartialEq)]
pub struct Templates;

impl Resource for Templates {
    type Item = Template;
    type Filter = TemplateFilter;
    type Action = UseTemplate;

    const TITLE: &'static str = "Templates";
    const EMPTY: &'static str = "No templates of this type.";
    const PAGE_SIZE: u32 = TEMPLATE_PAGE_SIZE;
    const SEARCHABLE: bool = false;
    const LAYOUT: Layout = Layout::Cards;
    const REMOTE_FILTER: bool = true;

    fn card(template: &Template) -> Html {
        html! {
            <>
                <img class="card-image" src={template.preview_url()} alt={template.title} loading="lazy" />
                <header class="card-header">
                    <h3>{ template.title }</h3>
                    <span class="badge badge-muted">{ template.kind.label() }</span>
                </header>
                <p class="card-description">{ template.description }</p>
            </>
        }
    }

    fn fetch(_client: HttpClient, query: ListQuery, filter: TemplateFilter, _signal: Option<AbortSignal>) -> FetchFuture<Template> {
        Box::pin(async move { Ok(catalog_page(filter, query.page)) })
    }

    fn actions(_template: &Template) -> Vec<UseTemplate> {
        vec![UseTemplate]
    }

    fn action_label(_action: &UseTemplate) -> &'static str {
        "Use template"
    }

    fn perform(client: HttpClient, template: Template, _action: UseTemplate) -> ActionFuture<Template> {
        Box::pin(async move {
            let draft = api::create_press_release(&client, &NewPressRelease::from_template(&template)).await?;
            log::info!("created press release {} from template {}", draft.id, template.id);
            Ok(Outcome::Navigate(Route::Editor { id: draft.id }))
        })
    }
}

fn catalog_page(filter: TemplateFilter, page: u32) -> Page<Template> {
    let matching = filtered(filter);
    let results = paginate(&matching, page, TEMPLATE_PAGE_SIZE)
        .iter()
        .map(|template| **template)
        .collect();
    Page::new(results, matching.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::template::TemplateType;

    #[test]
    fn pages_hold_at_most_six_cards() {
        let first = catalog_page(TemplateFilter::All, 1);
        assert_eq!(first.count, 8);
        assert_eq!(first.results.len(), 6);
        assert_eq!(catalog_page(TemplateFilter::All, 2).results.len(), 2);
    }

    #[test]
    fn filter_narrows_the_count() {
        let kind = TemplateType::ALL[0];
        let page = catalog_page(TemplateFilter::Only(kind), 1);
        assert!(page.results.iter().all(|template| template.kind == kind));
        assert_eq!(page.count as usize, filtered(TemplateFilter::Only(kind)).len());
    }
}
