//! Withdrawal request form. Nothing is sent unless the form validates
//! against the available balance.

use common::model::withdrawal::{PaymentMethod, WithdrawalRequest};
use common::validation::{estimate_ksh, WithdrawalForm as Form};
use yew::prelude::*;

use super::{form_buttons, input_field, on_submit, options_of, select_field, text_field};
use crate::app::{app_context, AppContext};
use crate::components::format::{format_ksh, format_points};
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::http::{api, ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalField {
    Points,
    PhoneNumber,
    Name,
    AccountNumber,
    BankName,
    AccountName,
}

pub enum Msg {
    Set(WithdrawalField, String),
    Method(String),
    Submit,
    Saved(Result<WithdrawalRequest, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct WithdrawalFormProps {
    pub available_points: i64,
    pub on_saved: Callback<WithdrawalRequest>,
    pub on_cancel: Callback<()>,
}

pub struct WithdrawalForm {
    context: AppContext,
    form: Form,
    processing: bool,
}

impl Component for WithdrawalForm {
    type Message = Msg;
    type Properties = WithdrawalFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            form: Form::default(),
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                let target = match field {
                    WithdrawalField::Points => &mut self.form.points,
                    WithdrawalField::PhoneNumber => &mut self.form.phone_number,
                    WithdrawalField::Name => &mut self.form.name,
                    WithdrawalField::AccountNumber => &mut self.form.account_number,
                    WithdrawalField::BankName => &mut self.form.bank_name,
                    WithdrawalField::AccountName => &mut self.form.account_name,
                };
                *target = value;
            }
            Msg::Method(value) => {
                if let Some(method) = PaymentMethod::parse(&value) {
                    self.form.payment_method = method;
                }
            }
            Msg::Submit => {
                if self.processing {
                    return false;
                }
                let request = match self.form.validate(ctx.props().available_points) {
                    Ok(request) => request,
                    Err(error) => {
                        toast_error(&error.to_string());
                        return false;
                    }
                };
                self.processing = true;
                let client = self.context.client.clone();
                ctx.link()
                    .send_future(async move { Msg::Saved(api::create_withdrawal(&client, &request).await) });
            }
            Msg::Saved(result) => {
                self.processing = false;
                match result {
                    Ok(request) => {
                        toast_success("Withdrawal request submitted");
                        self.form = Form::default();
                        ctx.props().on_saved.emit(request);
                    }
                    Err(error) => toast_api_error("Failed to submit withdrawal request", &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let set = |field: WithdrawalField| link.callback(move |value| Msg::Set(field, value));
        let form = &self.form;
        let methods = options_of(PaymentMethod::ALL.iter().map(PaymentMethod::as_str));
        let details = match form.payment_method {
            PaymentMethod::MPesa => html! {
                <>
                    { input_field("Phone number", "tel", &form.phone_number, true, set(WithdrawalField::PhoneNumber)) }
                    { text_field("Registered name", &form.name, false, set(WithdrawalField::Name)) }
                </>
            },
            PaymentMethod::BankTransfer => html! {
                <>
                    { text_field("Account number", &form.account_number, true, set(WithdrawalField::AccountNumber)) }
                    { text_field("Bank name", &form.bank_name, true, set(WithdrawalField::BankName)) }
                    { text_field("Account name", &form.account_name, true, set(WithdrawalField::AccountName)) }
                </>
            },
        };
        html! {
            <form class="form-grid" onsubmit={on_submit(link, || Msg::Submit)}>
                <p class="form-hint">
                    { format!("Available: {} points. Withdrawals are made in multiples of 5 points.", format_points(ctx.props().available_points)) }
                </p>
                { input_field("Points", "number", &form.points, true, set(WithdrawalField::Points)) }
                <p class="form-estimate">{ format!("Estimated payout: {}", format_ksh(estimate_ksh(form.points()))) }</p>
                { select_field("Payment method", form.payment_method.as_str(), None, &methods, link.callback(Msg::Method)) }
                { details }
                { form_buttons("Request withdrawal", self.processing, false, ctx.props().on_cancel.clone()) }
            </form>
        }
    }
}
