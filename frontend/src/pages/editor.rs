//! Editing shell for one press release: metadata, render/download and
//! distribution actions around the [`PressReleaseEditor`].

use common::document::to_markdown;
use common::events::{AppEvent, DeleteTarget, EventKind, ResourceKind, Subscription};
use common::model::press_release::{PressRelease, RenderedFile};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::app::{app_context, AppContext};
use crate::components::editor::PressReleaseEditor;
use crate::components::format::{format_date, or_dash};
use crate::components::toast::{toast_api_error, toast_error};
use crate::http::{api, ApiError};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Preview,
    Download,
}

impl Render {
    fn label(&self) -> &'static str {
        match self {
            Render::Preview => "preview",
            Render::Download => "download",
        }
    }
}

pub enum Msg {
    Load,
    Loaded(Result<PressRelease, ApiError>),
    Saved(PressRelease),
    Render(Render),
    Rendered(Render, Result<RenderedFile, ApiError>),
    Share,
    Delete,
    Deleted,
}

#[derive(Properties, PartialEq)]
pub struct EditorPageProps {
    pub id: String,
}

pub struct EditorPage {
    context: AppContext,
    release: Option<PressRelease>,
    /// Markdown the editor was mounted with; only replaced on a reload.
    initial: AttrValue,
    /// Bumped when a reload brings different content, remounting the editor.
    revision: u32,
    error: Option<String>,
    rendering: Option<Render>,
    _subscriptions: Vec<Subscription>,
}

fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().and_then(|window| window.open_with_url_and_target(url, "_blank").ok().flatten());
    if opened.is_none() {
        log::warn!("popup blocked for {url}");
        toast_error("Allow pop-ups to open the document");
    }
}

impl Component for EditorPage {
    type Message = Msg;
    type Properties = EditorPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let context = app_context(ctx);
        let id = ctx.props().id.clone();

        let reload = {
            let link = ctx.link().clone();
            context.bus.on(EventKind::ReloadData, move |_| link.send_message(Msg::Load))
        };
        let deleted = {
            let link = ctx.link().clone();
            context.bus.on(EventKind::Deleted, move |event| {
                if let AppEvent::Deleted(target) = event {
                    if target.kind == ResourceKind::PressRelease && target.id == id {
                        link.send_message(Msg::Deleted);
                    }
                }
            })
        };

        ctx.link().send_message(Msg::Load);
        Self {
            context,
            release: None,
            initial: AttrValue::default(),
            revision: 0,
            error: None,
            rendering: None,
            _subscriptions: vec![reload, deleted],
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let client = self.context.client.clone();
                let id = ctx.props().id.clone();
                ctx.link().send_future(async move { Msg::Loaded(api::get_press_release(&client, &id).await) });
                false
            }
            Msg::Loaded(Ok(release)) => {
                let markdown = to_markdown(&release.document());
                if self.release.is_none() || markdown != self.initial.as_str() {
                    self.initial = markdown.into();
                    self.revision += 1;
                }
                self.release = Some(release);
                self.error = None;
                true
            }
            Msg::Loaded(Err(error)) => {
                log::warn!("cannot load press release {}: {error}", ctx.props().id);
                self.error = Some(error.to_string());
                true
            }
            Msg::Saved(release) => {
                self.release = Some(release);
                true
            }
            Msg::Render(kind) => {
                if self.rendering.is_some() {
                    return false;
                }
                self.rendering = Some(kind);
                let client = self.context.client.clone();
                let id = ctx.props().id.clone();
                ctx.link().send_future(async move {
                    let result = match kind {
                        Render::Preview => api::preview_press_release(&client, &id).await,
                        Render::Download => api::download_press_release(&client, &id).await,
                    };
                    Msg::Rendered(kind, result)
                });
                true
            }
            Msg::Rendered(kind, result) => {
                self.rendering = None;
                match result {
                    Ok(file) => open_in_new_tab(&self.context.client.url(&file.url)),
                    Err(error) => toast_api_error(&format!("Failed to {} the press release", kind.label()), &error),
                }
                true
            }
            Msg::Share => {
                self.context.bus.emit(AppEvent::OpenShareModal(ctx.props().id.clone()));
                false
            }
            Msg::Delete => {
                let target = DeleteTarget::new(ctx.props().id.clone(), ResourceKind::PressRelease);
                self.context.bus.emit(AppEvent::OpenDeleteModal(target));
                false
            }
            Msg::Deleted => {
                match ctx.link().navigator() {
                    Some(navigator) => navigator.push(&Route::Home),
                    None => log::error!("no navigator to leave a deleted press release"),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(release) = &self.release else {
            return match &self.error {
                Some(error) => html! {
                    <div class="list-state error">
                        <p>{ error }</p>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::Load)}>{ "Retry" }</button>
                    </div>
                },
                None => html! { <div class="list-state"><div class="spinner" /></div> },
            };
        };

        let busy = |kind: Render| self.rendering == Some(kind);
        html! {
            <div class="page editor-page">
                <header class="page-header">
                    <h1>{ release.display_title().to_string() }</h1>
                    <div class="page-actions">
                        <button class="btn btn-outline" disabled={self.rendering.is_some()} onclick={link.callback(|_| Msg::Render(Render::Preview))}>
                            <span class="material-icons">{ "visibility" }</span>
                            { if busy(Render::Preview) { "Rendering..." } else { "Preview" } }
                        </button>
                        <button class="btn btn-outline" disabled={self.rendering.is_some()} onclick={link.callback(|_| Msg::Render(Render::Download))}>
                            <span class="material-icons">{ "download" }</span>
                            { if busy(Render::Download) { "Rendering..." } else { "Download" } }
                        </button>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::Share)}>
                            <span class="material-icons">{ "send" }</span>
                            { "Share" }
                        </button>
                        <button class="icon-button" title="Delete" onclick={link.callback(|_| Msg::Delete)}>
                            <span class="material-icons">{ "delete" }</span>
                        </button>
                    </div>
                </header>
                <div class="editor-layout">
                    <PressReleaseEditor
                        key={self.revision}
                        release_id={AttrValue::from(release.id.clone())}
                        initial={self.initial.clone()}
                        on_saved={link.callback(Msg::Saved)}
                    />
                    <aside class="metadata-panel">
                        <h3>{ "Details" }</h3>
                        <dl>
                            <dt>{ "Created" }</dt>
                            <dd>{ format_date(release.created_at) }</dd>
                            <dt>{ "Updated" }</dt>
                            <dd>{ format_date(release.updated_at) }</dd>
                            <dt>{ "Client" }</dt>
                            <dd>{ or_dash(&release.client).to_string() }</dd>
                            <dt>{ "Country" }</dt>
                            <dd>{ or_dash(&release.country).to_string() }</dd>
                            <dt>{ "Author" }</dt>
                            <dd>{ or_dash(&release.author_name).to_string() }</dd>
                            <dt>{ "Shared with" }</dt>
                            <dd>{ format!("{} journalists", release.shared_with.len()) }</dd>
                        </dl>
                    </aside>
                </div>
            </div>
        }
    }
}
