use common::model::auth::{AuthResponse, LoginRequest};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{app_context, AppContext};
use crate::auth_store::AuthStore;
use crate::components::forms::{input_field, is_valid_email, on_submit};
use crate::components::toast::{toast_api_error, toast_error};
use crate::http::{api, ApiError};
use crate::routes::Route;

pub enum Msg {
    Email(String),
    Password(String),
    Submit,
    Done(Result<AuthResponse, ApiError>),
}

pub struct LoginPage {
    context: AppContext,
    request: LoginRequest,
    processing: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            request: LoginRequest::default(),
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Email(value) => self.request.email = value,
            Msg::Password(value) => self.request.password = value,
            Msg::Submit => {
                if self.processing {
                    return false;
                }
                if !is_valid_email(&self.request.email) || self.request.password.is_empty() {
                    toast_error("Enter your email and password");
                    return false;
                }
                self.processing = true;
                let client = self.context.client.clone();
                let request = LoginRequest {
                    email: self.request.email.trim().to_string(),
                    password: self.request.password.clone(),
                };
                ctx.link()
                    .send_future(async move { Msg::Done(api::login(&client, &request).await) });
            }
            Msg::Done(result) => {
                self.processing = false;
                match result {
                    Ok(response) => {
                        AuthStore::save(&response);
                        log::info!("signed in as {}", self.request.email.trim());
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(error) => toast_api_error("Sign in failed", &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="auth-page">
                <form class="auth-card" onsubmit={on_submit(link, || Msg::Submit)}>
                    <h1 class="brand">{ "Wezawire" }</h1>
                    <p class="subtitle">{ "Sign in to your dashboard" }</p>
                    { input_field("Email", "email", &self.request.email, true, link.callback(Msg::Email)) }
                    { input_field("Password", "password", &self.request.password, true, link.callback(Msg::Password)) }
                    <button type="submit" class="btn btn-primary" disabled={self.processing}>
                        { if self.processing { "Signing in..." } else { "Sign in" } }
                    </button>
                    <p class="auth-switch">
                        { "No account yet? " }
                        <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
                    </p>
                </form>
            </div>
        }
    }
}
