//! Read-only rendering of a document tree.

use common::document::{preview, Node};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DocumentViewProps {
    pub document: Node,
    /// Cut the document to a single plain-text paragraph of this many words.
    #[prop_or_default]
    pub words: Option<usize>,
    #[prop_or_default]
    pub class: Classes,
}

pub struct DocumentView;

impl Component for DocumentView {
    type Message = ();
    type Properties = DocumentViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let rendered = match props.words {
            Some(limit) => preview(&props.document, limit).to_html(),
            None => props.document.to_html(),
        };
        html! {
            <div class={classes!("document", props.class.clone())}>
                { Html::from_html_unchecked(AttrValue::from(rendered)) }
            </div>
        }
    }
}
