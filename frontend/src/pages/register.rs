use common::model::auth::{AuthResponse, RegisterRequest};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{app_context, AppContext};
use crate::auth_store::AuthStore;
use crate::components::forms::{input_field, is_valid_email, on_submit, text_field};
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::http::{api, ApiError};
use crate::routes::Route;

const MIN_PASSWORD_LEN: usize = 8;

pub enum Msg {
    FirstName(String),
    LastName(String),
    Email(String),
    Password(String),
    Confirm(String),
    Submit,
    Done(Result<AuthResponse, ApiError>),
}

pub struct RegisterPage {
    context: AppContext,
    request: RegisterRequest,
    confirm: String,
    processing: bool,
}

/// Client-side checks before the account is requested.
pub fn check_registration(request: &RegisterRequest, confirm: &str) -> Result<(), &'static str> {
    if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
        return Err("Enter your first and last name");
    }
    if !is_valid_email(&request.email) {
        return Err("Enter a valid email address");
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("The password needs at least 8 characters");
    }
    if request.password != confirm {
        return Err("The passwords do not match");
    }
    Ok(())
}

impl Component for RegisterPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            request: RegisterRequest::default(),
            confirm: String::new(),
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FirstName(value) => self.request.first_name = value,
            Msg::LastName(value) => self.request.last_name = value,
            Msg::Email(value) => self.request.email = value,
            Msg::Password(value) => self.request.password = value,
            Msg::Confirm(value) => self.confirm = value,
            Msg::Submit => {
                if self.processing {
                    return false;
                }
                if let Err(message) = check_registration(&self.request, &self.confirm) {
                    toast_error(message);
                    return false;
                }
                self.processing = true;
                let client = self.context.client.clone();
                let request = RegisterRequest {
                    first_name: self.request.first_name.trim().to_string(),
                    last_name: self.request.last_name.trim().to_string(),
                    email: self.request.email.trim().to_string(),
                    password: self.request.password.clone(),
                };
                ctx.link()
                    .send_future(async move { Msg::Done(api::register(&client, &request).await) });
            }
            Msg::Done(result) => {
                self.processing = false;
                match result {
                    Ok(response) => {
                        AuthStore::save(&response);
                        toast_success("Welcome to Wezawire");
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(error) => toast_api_error("Registration failed", &error),
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
                    <p class="subtitle">{ "Create your account" }</p>
                    <div class="field-row">
                        { text_field("First name", &self.request.first_name, true, link.callback(Msg::FirstName)) }
                        { text_field("Last name", &self.request.last_name, true, link.callback(Msg::LastName)) }
                    </div>
                    { input_field("Email", "email", &self.request.email, true, link.callback(Msg::Email)) }
                    { input_field("Password", "password", &self.request.password, true, link.callback(Msg::Password)) }
                    { input_field("Confirm password", "password", &self.confirm, true, link.callback(Msg::Confirm)) }
                    <button type="submit" class="btn btn-primary" disabled={self.processing}>
                        { if self.processing { "Creating account..." } else { "Register" } }
                    </button>
                    <p class="auth-switch">
                        { "Already registered? " }
                        <Link<Route> to={Route::Login}>{ "Sign in" }</Link<Route>>
                    </p>
                </form>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "Amina".into(),
            last_name: "Otieno".into(),
            email: "amina@wezawire.com".into(),
            password: password.into(),
        }
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert_eq!(
            check_registration(&request("s3cretpass"), "s3cretpas"),
            Err("The passwords do not match")
        );
        assert_eq!(check_registration(&request("s3cretpass"), "s3cretpass"), Ok(()));
    }

    #[test]
    fn short_passwords_and_bad_emails_are_rejected() {
        assert!(check_registration(&request("short"), "short").is_err());
        let mut bad_email = request("s3cretpass");
        bad_email.email = "amina".into();
        assert_eq!(check_registration(&bad_email, "s3cretpass"), Err("Enter a valid email address"));
    }
}
