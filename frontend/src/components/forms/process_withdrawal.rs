//! Admin decision on a withdrawal request. Completion needs the payment's
//! transaction reference.

use common::model::withdrawal::{ProcessWithdrawal, WithdrawalRequest};
use common::validation::{ProcessAction, ProcessForm};
use yew::prelude::*;

use super::{area_field, form_buttons, on_submit, text_field};
use crate::app::{app_context, AppContext};
use crate::components::format::{format_ksh, format_points};
use crate::components::toast::{toast_api_error, toast_error, toast_success};
use crate::http::{api, ApiError};

pub enum Msg {
    Notes(String),
    Reference(String),
    Submit,
    Processed(ProcessWithdrawal, Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct ProcessWithdrawalProps {
    pub request: WithdrawalRequest,
    pub action: ProcessAction,
    /// Receives the request patched with the new status.
    pub on_processed: Callback<WithdrawalRequest>,
    pub on_cancel: Callback<()>,
}

pub struct ProcessWithdrawalDialog {
    context: AppContext,
    form: ProcessForm,
    processing: bool,
}

impl Component for ProcessWithdrawalDialog {
    type Message = Msg;
    type Properties = ProcessWithdrawalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            context: app_context(ctx),
            form: ProcessForm::new(ctx.props().action),
            processing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Notes(notes) => self.form.notes = notes,
            Msg::Reference(reference) => self.form.transaction_reference = reference,
            Msg::Submit => {
                if self.processing {
                    return false;
                }
                let body = match self.form.validate() {
                    Ok(body) => body,
                    Err(error) => {
                        toast_error(&error.to_string());
                        return false;
                    }
                };
                self.processing = true;
                let client = self.context.client.clone();
                let id = ctx.props().request.id.clone();
                ctx.link().send_future(async move {
                    let result = api::process_withdrawal(&client, &id, &body).await;
                    Msg::Processed(body, result)
                });
            }
            Msg::Processed(body, result) => {
                self.processing = false;
                match result {
                    Ok(()) => {
                        toast_success(&format!("Withdrawal {}", body.status.label().to_lowercase()));
                        ctx.props().on_processed.emit(patched(&ctx.props().request, body));
                    }
                    Err(error) => toast_api_error("Failed to process withdrawal", &error),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let request = &ctx.props().request;
        let reference = (self.form.action == ProcessAction::Complete).then(|| {
            text_field(
                "Transaction reference",
                &self.form.transaction_reference,
                true,
                link.callback(Msg::Reference),
            )
        });
        html! {
            <form class="form-grid" onsubmit={on_submit(link, || Msg::Submit)}>
                <p class="form-hint">
                    { format!(
                        "{} requests {} points ({}) via {}.",
                        request.journalist_name,
                        format_points(request.points),
                        format_ksh(request.amount),
                        request.payment_method,
                    ) }
                </p>
                { reference }
                { area_field("Notes", &self.form.notes, 3, link.callback(Msg::Notes)) }
                { form_buttons(self.form.action.label(), self.processing, !self.form.can_submit(), ctx.props().on_cancel.clone()) }
            </form>
        }
    }
}

/// Local copy of `request` after the server accepted `body`.
pub fn patched(request: &WithdrawalRequest, body: ProcessWithdrawal) -> WithdrawalRequest {
    let mut request = request.clone();
    request.status = body.status;
    if body.notes.is_some() {
        request.notes = body.notes;
    }
    if body.transaction_reference.is_some() {
        request.transaction_reference = body.transaction_reference;
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::withdrawal::WithdrawalStatus;

    fn pending() -> WithdrawalRequest {
        WithdrawalRequest {
            id: "w1".into(),
            points: 50,
            status: WithdrawalStatus::Approved,
            notes: Some("checked".into()),
            ..Default::default()
        }
    }

    #[test]
    fn completion_records_the_reference() {
        let mut form = ProcessForm::new(ProcessAction::Complete);
        form.transaction_reference = "QX12AB".into();
        let updated = patched(&pending(), form.validate().unwrap());
        assert_eq!(updated.status, WithdrawalStatus::Completed);
        assert_eq!(updated.transaction_reference.as_deref(), Some("QX12AB"));
        assert_eq!(updated.notes.as_deref(), Some("checked"));
        assert_eq!(updated.points, 50);
    }

    #[test]
    fn rejection_keeps_the_other_fields() {
        let mut form = ProcessForm::new(ProcessAction::Reject);
        form.notes = "Duplicate request".into();
        let updated = patched(&pending(), form.validate().unwrap());
        assert_eq!(updated.status, WithdrawalStatus::Rejected);
        assert_eq!(updated.notes.as_deref(), Some("Duplicate request"));
        assert_eq!(updated.transaction_reference, None);
    }
}
