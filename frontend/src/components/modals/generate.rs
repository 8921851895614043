//! AI generation of a press release body.
//!
//! Opened with the (usually empty) draft to fill. The request goes out as
//! JSON unless a document or a partner logo is attached, in which case it is
//! sent as multipart.

use common::events::{AppEvent, EventKind, Subscription};
use common::model::client::Client;
use common::model::page::{ListQuery, Page};
use common::model::press_release::{GenerateRequest, NewPressRelease, Partner, PressRelease};
use common::model::COUNTRIES;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::app::{app_context, AppContext};
use crate::components::forms::{area_field, file_field, on_submit, options_of, select_field};
use crate::components::preview::DocumentView;
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::components::top_sheet::TopSheet;
use crate::http::{api, ApiError};
use crate::routes::Route;

pub enum Msg {
    Open(PressRelease),
    Close,
    ClientsLoaded(Result<Page<Client>, ApiError>),
    Prompt(String),
    Client(String),
    Country(String),
    PartnerName(usize, String),
    PartnerLogo(usize, Option<File>),
    AddPartner,
    RemovePartner(usize),
    Attachment(Option<File>),
    Submit,
    Generated(Result<PressRelease, ApiError>),
    OpenEditor,
}

pub struct GenerateModal {
    context: AppContext,
    open: bool,
    clients: Vec<Client>,
    request: GenerateRequest,
    /// Indexed like `request.partners`.
    logos: Vec<Option<File>>,
    attachment: Option<File>,
    generating: bool,
    generated: Option<PressRelease>,
    _subscription: Subscription,
}

/// Creates an empty draft and opens the generation modal for it.
pub fn start_draft(context: &AppContext) {
    let context = context.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match api::create_press_release(&context.client, &NewPressRelease::default()).await {
            Ok(release) => {
                log::info!("created draft {}", release.id);
                context.bus.emit(AppEvent::ReloadPressReleases);
                context.bus.emit(AppEvent::OpenGenerateModal(release));
            }
            Err(error) => toast_api_error("Failed to create the press release", &error),
        }
    });
}

impl GenerateModal {
    fn reset(&mut self, release: &PressRelease) {
        self.request = GenerateRequest {
            id: release.id.clone(),
            partners: vec![Partner::default()],
            ..Default::default()
        };
        self.logos = vec![None];
        self.attachment = None;
        self.generated = None;
    }

    fn has_attachments(&self) -> bool {
        self.attachment.is_some() || self.logos.iter().any(Option::is_some)
    }

    fn partner_rows(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let removable = self.request.partners.len() > 1;
        html! {
            <fieldset class="partners">
                <legend>{ "Partners" }</legend>
                { for self.request.partners.iter().enumerate().map(|(index, partner)| {
                    let oninput = link.callback(move |e: InputEvent| {
                        Msg::PartnerName(index, e.target_unchecked_into::<HtmlInputElement>().value())
                    });
                    html! {
                        <div class="partner-row">
                            <input type="text" placeholder="Partner name" value={partner.name.clone()} {oninput} />
                            { file_field("Logo", "image/*", link.callback(move |file| Msg::PartnerLogo(index, file))) }
                            if removable {
                                <button type="button" class="icon-button" title="Remove partner"
                                    onclick={link.callback(move |_| Msg::RemovePartner(index))}>
                                    <span class="material-icons">{"close"}</span>
                                </button>
                            }
                        </div>
                    }
                }) }
                <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::AddPartner)}>
                    { "Add partner" }
                </button>
            </fieldset>
        }
    }

    fn form_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let clients: Vec<(String, String)> = self
            .clients
            .iter()
            .map(|client| (client.id.clone(), client.name.clone()))
            .collect();
        html! {
            <form onsubmit={on_submit(link, || Msg::Submit)}>
                { area_field("What is the press release about? *", &self.request.prompt, 5, link.callback(Msg::Prompt)) }
                { select_field("Client *", &self.request.client, Some("Select a client"), &clients, link.callback(Msg::Client)) }
                { select_field("Country *", &self.request.country, Some("Select a country"), &options_of(COUNTRIES), link.callback(Msg::Country)) }
                { self.partner_rows(ctx) }
                { file_field("Supporting document", ".pdf,.doc,.docx,.txt", link.callback(Msg::Attachment)) }
                <div class="form-buttons">
                    <button type="button" class="btn btn-outline" disabled={self.generating} onclick={link.callback(|_| Msg::Close)}>
                        { "Cancel" }
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={self.generating}>
                        { if self.generating { "Generating..." } else { "Generate" } }
                    </button>
                </div>
            </form>
        }
    }

    fn result_view(&self, ctx: &Context<Self>, release: &PressRelease) -> Html {
        let link = ctx.link();
        html! {
            <>
                <h3>{ release.display_title().to_string() }</h3>
                <DocumentView document={release.document()} class={classes!("generated-preview")} />
                <div class="form-buttons">
                    <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::Close)}>{ "Close" }</button>
                    <button type="button" class="btn btn-primary" onclick={link.callback(|_| Msg::OpenEditor)}>
                        { "Open in editor" }
                    </button>
                </div>
            </>
        }
    }
}

impl Component for GenerateModal {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let context = app_context(ctx);
        let link = ctx.link().clone();
        let subscription = context.bus.on(EventKind::OpenGenerateModal, move |event| {
            if let AppEvent::OpenGenerateModal(release) = event {
                link.send_message(Msg::Open(release.clone()));
            }
        });
        Self {
            context,
            open: false,
            clients: Vec::new(),
            request: GenerateRequest::default(),
            logos: Vec::new(),
            attachment: None,
            generating: false,
            generated: None,
            _subscription: subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open(release) => {
                self.reset(&release);
                self.open = true;
                let client = self.context.client.clone();
                ctx.link().send_future(async move {
                    Msg::ClientsLoaded(api::list_clients(&client, &ListQuery::default(), None).await)
                });
            }
            Msg::Close => {
                if self.generating {
                    return false;
                }
                self.open = false;
            }
            Msg::ClientsLoaded(Ok(page)) => self.clients = page.results,
            Msg::ClientsLoaded(Err(error)) => toast_api_error("Failed to load clients", &error),
            Msg::Prompt(prompt) => self.request.prompt = prompt,
            Msg::Client(client) => self.request.client = client,
            Msg::Country(country) => self.request.country = country,
            Msg::PartnerName(index, name) => match self.request.partners.get_mut(index) {
                Some(partner) => partner.name = name,
                None => return false,
            },
            Msg::PartnerLogo(index, file) => match self.logos.get_mut(index) {
                Some(logo) => *logo = file,
                None => return false,
            },
            Msg::AddPartner => {
                self.request.partners.push(Partner::default());
                self.logos.push(None);
            }
            Msg::RemovePartner(index) => {
                if self.request.partners.len() <= 1 || index >= self.request.partners.len() {
                    return false;
                }
                self.request.partners.remove(index);
                self.logos.remove(index);
            }
            Msg::Attachment(file) => self.attachment = file,
            Msg::Submit => {
                if self.generating {
                    return false;
                }
                if let Some(field) = self.request.missing_field() {
                    toast_error(&format!("{field} is required"));
                    return false;
                }
                self.generating = true;
                let client = self.context.client.clone();
                let request = self.request.clone();
                if self.has_attachments() {
                    let attachment = self.attachment.clone();
                    let logos = self.logos.clone();
                    ctx.link().send_future(async move {
                        let result =
                            api::generate_press_release_with_attachments(&client, &request, attachment.as_ref(), &logos)
                                .await;
                        Msg::Generated(result)
                    });
                } else {
                    ctx.link().send_future(async move {
                        Msg::Generated(api::generate_press_release(&client, &request).await)
                    });
                }
            }
            Msg::Generated(result) => {
                self.generating = false;
                match result {
                    Ok(release) => {
                        toast_success("Press release generated");
                        self.generated = Some(release);
                        self.context.bus.emit(AppEvent::ReloadPressReleases);
                    }
                    Err(error) => toast_api_error("Failed to generate the press release", &error),
                }
            }
            Msg::OpenEditor => {
                let Some(release) = self.generated.take() else {
                    return false;
                };
                self.open = false;
                match ctx.link().navigator() {
                    Some(navigator) => navigator.push(&Route::Editor { id: release.id }),
                    None => log::error!("generation modal rendered outside the router"),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.generated {
            Some(release) => self.result_view(ctx, release),
            None => self.form_view(ctx),
        };
        html! {
            <TopSheet open={self.open} title="Generate press release" wide=true on_close={ctx.link().callback(|_| Msg::Close)}>
                { body }
            </TopSheet>
        }
    }
}
