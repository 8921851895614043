//! Press release editor: root module wiring the Yew `Component`
//! implementation to its state, update logic, view and helpers.
//!
//! The parent page loads the press release and passes its markdown in;
//! from there the editor owns the text and autosaves it.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::set_window_dirty_flag;
pub use messages::Msg;
pub use props::EditorProps;
pub use state::PressReleaseEditor;

use crate::app::app_context;

impl Component for PressReleaseEditor {
    type Message = Msg;
    type Properties = EditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        PressReleaseEditor::new(app_context(ctx), &ctx.props().initial)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.resize_textarea();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        set_window_dirty_flag(false);
    }
}
