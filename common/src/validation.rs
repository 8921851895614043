//! Client-side checks run before a form is submitted. A failing check means
//! no request is sent.

use thiserror::Error;

use crate::model::published_link::{NewPublishedLink, RejectLink};
use crate::model::withdrawal::{NewWithdrawal, PaymentDetails, PaymentMethod, ProcessWithdrawal, WithdrawalStatus};

/// Points are withdrawn in blocks of this size.
pub const POINTS_PER_UNIT: i64 = 5;
/// Shillings paid per block of points. Display only; the server computes the
/// amount actually paid.
pub const KSH_PER_UNIT: f64 = 100.0;

/// Estimated payout shown next to the points field.
pub fn estimate_ksh(points: i64) -> f64 {
    points as f64 / POINTS_PER_UNIT as f64 * KSH_PER_UNIT
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WithdrawalError {
    #[error("Please enter a valid number of points to withdraw")]
    NotPositive,
    #[error("You can't withdraw more than your available points ({available})")]
    ExceedsBalance { available: i64 },
    #[error("Points must be in multiples of 5")]
    NotMultiple,
    #[error("Please enter a phone number for M-Pesa withdrawal")]
    MissingPhone,
    #[error("Please enter the account number, bank name and account name")]
    MissingBankDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("A transaction reference is required to complete a withdrawal")]
    MissingReference,
    #[error("Please explain why the link is rejected")]
    BlankNotes,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is required")]
pub struct FormError(pub &'static str);

/// Raw state of the withdrawal form. Every input is kept as typed text until
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WithdrawalForm {
    pub points: String,
    pub payment_method: PaymentMethod,
    pub phone_number: String,
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub account_name: String,
}

impl WithdrawalForm {
    /// Parsed points, zero when the field is blank or not a number.
    pub fn points(&self) -> i64 {
        self.points.trim().parse().unwrap_or(0)
    }

    /// Checks the form against `available` points and builds the request body.
    pub fn validate(&self, available: i64) -> Result<NewWithdrawal, WithdrawalError> {
        let points = validate_points(self.points(), available)?;
        let payment_details = match self.payment_method {
            PaymentMethod::MPesa => {
                if self.phone_number.trim().is_empty() {
                    return Err(WithdrawalError::MissingPhone);
                }
                PaymentDetails::MPesa {
                    phone_number: self.phone_number.trim().to_string(),
                    name: self.name.trim().to_string(),
                }
            }
            PaymentMethod::BankTransfer => {
                let fields = [&self.account_number, &self.bank_name, &self.account_name];
                if fields.iter().any(|field| field.trim().is_empty()) {
                    return Err(WithdrawalError::MissingBankDetails);
                }
                PaymentDetails::Bank {
                    account_number: self.account_number.trim().to_string(),
                    bank_name: self.bank_name.trim().to_string(),
                    account_name: self.account_name.trim().to_string(),
                }
            }
        };
        Ok(NewWithdrawal {
            points,
            payment_method: self.payment_method,
            payment_details,
        })
    }
}

/// Accepts `points` when `0 < points <= available` and it is a whole number
/// of units.
pub fn validate_points(points: i64, available: i64) -> Result<i64, WithdrawalError> {
    if points <= 0 {
        return Err(WithdrawalError::NotPositive);
    }
    if points > available {
        return Err(WithdrawalError::ExceedsBalance { available });
    }
    if points % POINTS_PER_UNIT != 0 {
        return Err(WithdrawalError::NotMultiple);
    }
    Ok(points)
}

/// Admin decision on a withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessAction {
    Approve,
    Reject,
    Complete,
}

impl ProcessAction {
    pub fn target(&self) -> WithdrawalStatus {
        match self {
            ProcessAction::Approve => WithdrawalStatus::Approved,
            ProcessAction::Reject => WithdrawalStatus::Rejected,
            ProcessAction::Complete => WithdrawalStatus::Completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessAction::Approve => "Approve",
            ProcessAction::Reject => "Reject",
            ProcessAction::Complete => "Complete",
        }
    }

    /// Actions offered for a request in `status`.
    pub fn available_for(status: WithdrawalStatus) -> &'static [ProcessAction] {
        match status {
            WithdrawalStatus::Pending => &[ProcessAction::Approve, ProcessAction::Reject],
            WithdrawalStatus::Approved => &[ProcessAction::Complete],
            WithdrawalStatus::Rejected | WithdrawalStatus::Completed => &[],
        }
    }
}

/// State of the process modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessForm {
    pub action: ProcessAction,
    pub notes: String,
    pub transaction_reference: String,
}

impl ProcessForm {
    pub fn new(action: ProcessAction) -> Self {
        Self {
            action,
            notes: String::new(),
            transaction_reference: String::new(),
        }
    }

    /// Completion stays disabled until a reference is typed.
    pub fn can_submit(&self) -> bool {
        self.action != ProcessAction::Complete || !self.transaction_reference.trim().is_empty()
    }

    pub fn validate(&self) -> Result<ProcessWithdrawal, ActionError> {
        if !self.can_submit() {
            return Err(ActionError::MissingReference);
        }
        let notes = Some(self.notes.trim().to_string()).filter(|notes| !notes.is_empty());
        let transaction_reference = match self.action {
            ProcessAction::Complete => Some(self.transaction_reference.trim().to_string()),
            _ => None,
        };
        Ok(ProcessWithdrawal {
            status: self.action.target(),
            notes,
            transaction_reference,
        })
    }
}

/// Builds the reject body; the notes must not be blank.
pub fn reject_link(notes: &str) -> Result<RejectLink, ActionError> {
    let notes = notes.trim();
    if notes.is_empty() {
        return Err(ActionError::BlankNotes);
    }
    Ok(RejectLink {
        notes: notes.to_string(),
    })
}

impl NewPublishedLink {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.press_release.trim().is_empty() {
            return Err(FormError("Press release"));
        }
        if self.url.trim().is_empty() {
            return Err(FormError("URL"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mpesa(points: &str) -> WithdrawalForm {
        WithdrawalForm {
            points: points.into(),
            phone_number: "0712345678".into(),
            ..Default::default()
        }
    }

    #[test]
    fn points_rules() {
        assert_eq!(validate_points(0, 100), Err(WithdrawalError::NotPositive));
        assert_eq!(validate_points(-5, 100), Err(WithdrawalError::NotPositive));
        assert_eq!(
            validate_points(105, 100),
            Err(WithdrawalError::ExceedsBalance { available: 100 })
        );
        assert_eq!(validate_points(12, 100), Err(WithdrawalError::NotMultiple));
        assert_eq!(validate_points(100, 100), Ok(100));
        assert_eq!(validate_points(5, 100), Ok(5));
    }

    #[test]
    fn blank_or_garbage_points_are_not_positive() {
        assert_eq!(mpesa("").validate(50), Err(WithdrawalError::NotPositive));
        assert_eq!(mpesa("abc").validate(50), Err(WithdrawalError::NotPositive));
    }

    #[test]
    fn mpesa_needs_a_phone_number() {
        let mut form = mpesa("20");
        form.phone_number = "  ".into();
        assert_eq!(form.validate(50), Err(WithdrawalError::MissingPhone));
    }

    #[test]
    fn bank_transfer_needs_every_account_field() {
        let mut form = WithdrawalForm {
            points: "10".into(),
            payment_method: PaymentMethod::BankTransfer,
            account_number: "0011".into(),
            bank_name: "KCB".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(50), Err(WithdrawalError::MissingBankDetails));
        form.account_name = "Otieno".into();
        let request = form.validate(50).unwrap();
        assert_eq!(request.payment_details.method(), PaymentMethod::BankTransfer);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["payment_method"], "Bank Transfer");
        assert_eq!(body["payment_details"]["bank_name"], "KCB");
    }

    #[test]
    fn valid_request_body() {
        let request = mpesa("25").validate(100).unwrap();
        assert_eq!(request.points, 25);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["payment_details"]["phone_number"], "0712345678");
    }

    #[test]
    fn ksh_estimate() {
        assert_eq!(estimate_ksh(5), 100.0);
        assert_eq!(estimate_ksh(25), 500.0);
        assert_eq!(estimate_ksh(0), 0.0);
    }

    #[test]
    fn completion_is_blocked_without_reference() {
        let mut form = ProcessForm::new(ProcessAction::Complete);
        assert!(!form.can_submit());
        assert_eq!(form.validate(), Err(ActionError::MissingReference));

        form.transaction_reference = "QK12ABC".into();
        assert!(form.can_submit());
        let body = form.validate().unwrap();
        assert_eq!(body.status, WithdrawalStatus::Completed);
        assert_eq!(body.transaction_reference.as_deref(), Some("QK12ABC"));
        assert_eq!(body.notes, None);
    }

    #[test]
    fn approve_and_reject_need_nothing_extra() {
        assert!(ProcessForm::new(ProcessAction::Approve).can_submit());
        let mut reject = ProcessForm::new(ProcessAction::Reject);
        reject.notes = "duplicate".into();
        let body = reject.validate().unwrap();
        assert_eq!(body.status, WithdrawalStatus::Rejected);
        assert_eq!(body.transaction_reference, None);
    }

    #[test]
    fn actions_follow_the_lifecycle() {
        assert_eq!(
            ProcessAction::available_for(WithdrawalStatus::Pending),
            &[ProcessAction::Approve, ProcessAction::Reject]
        );
        assert_eq!(
            ProcessAction::available_for(WithdrawalStatus::Approved),
            &[ProcessAction::Complete]
        );
        assert!(ProcessAction::available_for(WithdrawalStatus::Completed).is_empty());
    }

    #[test]
    fn link_rejection_needs_notes() {
        assert_eq!(reject_link("   "), Err(ActionError::BlankNotes));
        assert_eq!(
            reject_link("broken link"),
            Ok(RejectLink {
                notes: "broken link".into()
            })
        );
    }

    #[test]
    fn new_link_requires_release_and_url() {
        let mut link = NewPublishedLink::default();
        assert_eq!(link.validate(), Err(FormError("Press release")));
        link.press_release = "pr1".into();
        assert_eq!(link.validate(), Err(FormError("URL")));
        link.url = "https://news.example/a".into();
        assert_eq!(link.validate(), Ok(()));
    }
}
