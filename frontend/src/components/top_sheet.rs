//! Modal sheet sliding down from the top of the viewport.
//!
//! The sheet is mounted closed and gets the `show` class shortly after it
//! opens, so the CSS transition runs. Children are only rendered while open,
//! which resets every form when the sheet is reopened.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::prelude::*;

const SHOW_CLASS: &str = "show";
const TRANSITION_DELAY_MILLIS: u32 = 50;

pub struct TopSheet {
    id: String,
    node_ref: NodeRef,
    pending: Option<Timeout>,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    pub open: bool,
    #[prop_or_default]
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
            pending: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());
        html! {
            <div
                class={classes!("top-sheet", props.wide.then_some("wide"))}
                id={self.id.clone()}
                ref={self.node_ref.clone()}
                aria-hidden={(!props.open).to_string()}
            >
                if props.open {
                    <>
                    <div class="top-sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="icon-button" title="Close" onclick={on_close}>
                            <span class="material-icons">{"close"}</span>
                        </button>
                    </div>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                    </>
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.pending = Some(toggle_top_sheet(&self.node_ref, ctx.props().open));
    }
}

/// Adds or removes the `show` class after the transition delay. Dropping the
/// returned timeout cancels the toggle.
pub fn toggle_top_sheet(node_ref: &NodeRef, open: bool) -> Timeout {
    let node_ref = node_ref.clone();
    Timeout::new(TRANSITION_DELAY_MILLIS, move || {
        if let Some(sheet) = node_ref.cast::<HtmlElement>() {
            let classes = sheet.class_list();
            let result = if open {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
            if result.is_err() {
                log::debug!("cannot toggle top sheet {}", sheet.id());
            }
        }
    })
}
