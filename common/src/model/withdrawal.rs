use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;
use crate::listing::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl WithdrawalStatus {
    pub const ALL: [WithdrawalStatus; 4] = [
        WithdrawalStatus::Pending,
        WithdrawalStatus::Approved,
        WithdrawalStatus::Rejected,
        WithdrawalStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
            WithdrawalStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "Pending",
            WithdrawalStatus::Approved => "Approved",
            WithdrawalStatus::Rejected => "Rejected",
            WithdrawalStatus::Completed => "Completed",
        }
    }

    /// Parses the status filter value; `all` and unknown values yield `None`.
    pub fn from_filter(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "M-Pesa")]
    MPesa,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::MPesa, PaymentMethod::BankTransfer];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::MPesa => "M-Pesa",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == value)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the money goes. The shape depends on the payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentDetails {
    Bank {
        account_number: String,
        bank_name: String,
        account_name: String,
    },
    MPesa {
        phone_number: String,
        #[serde(default)]
        name: String,
    },
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::MPesa { .. } => PaymentMethod::MPesa,
            PaymentDetails::Bank { .. } => PaymentMethod::BankTransfer,
        }
    }

    /// One-line summary for tables.
    pub fn summary(&self) -> String {
        match self {
            PaymentDetails::MPesa { phone_number, name } if name.is_empty() => phone_number.clone(),
            PaymentDetails::MPesa { phone_number, name } => format!("{name} ({phone_number})"),
            PaymentDetails::Bank {
                account_number,
                bank_name,
                account_name,
            } => format!("{bank_name} {account_number} ({account_name})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub journalist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub journalist_name: String,
    #[serde(default)]
    pub points: i64,
    /// KSH amount computed by the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default)]
    pub status: WithdrawalStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
    /// Kept untyped: older rows carry every form field regardless of method.
    #[serde(default)]
    pub payment_details: Value,
    #[serde(default)]
    pub processed_by: Option<String>,
    #[serde(default)]
    pub processor_name: Option<String>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub transaction_reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl WithdrawalRequest {
    /// Typed view of `payment_details`, decoded by the recorded method.
    pub fn details(&self) -> Option<PaymentDetails> {
        let details = self.payment_details.clone();
        match PaymentMethod::parse(&self.payment_method)? {
            PaymentMethod::MPesa => {
                let MPesaShape { phone_number, name } = serde_json::from_value(details).ok()?;
                Some(PaymentDetails::MPesa { phone_number, name })
            }
            PaymentMethod::BankTransfer => {
                let BankShape {
                    account_number,
                    bank_name,
                    account_name,
                } = serde_json::from_value(details).ok()?;
                Some(PaymentDetails::Bank {
                    account_number,
                    bank_name,
                    account_name,
                })
            }
        }
    }
}

#[derive(Deserialize)]
struct MPesaShape {
    phone_number: String,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct BankShape {
    account_number: String,
    bank_name: String,
    account_name: String,
}

impl Identified for WithdrawalRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST withdrawal-requests/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWithdrawal {
    pub points: i64,
    pub payment_method: PaymentMethod,
    pub payment_details: PaymentDetails,
}

/// Body of `POST withdrawal-requests/{id}/process/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessWithdrawal {
    pub status: WithdrawalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payment_method_uses_display_names_on_the_wire() {
        assert_eq!(serde_json::to_value(PaymentMethod::MPesa).unwrap(), "M-Pesa");
        assert_eq!(
            serde_json::to_value(PaymentMethod::BankTransfer).unwrap(),
            "Bank Transfer"
        );
        assert_eq!(PaymentMethod::parse("Bank Transfer"), Some(PaymentMethod::BankTransfer));
    }

    #[test]
    fn details_follow_the_recorded_method() {
        let mut request = WithdrawalRequest {
            payment_method: "M-Pesa".into(),
            payment_details: json!({
                "phone_number": "0700000000",
                "name": "Achieng",
                "account_number": "",
                "bank_name": "",
                "account_name": ""
            }),
            ..Default::default()
        };
        assert_eq!(
            request.details(),
            Some(PaymentDetails::MPesa {
                phone_number: "0700000000".into(),
                name: "Achieng".into()
            })
        );

        request.payment_method = "Bank Transfer".into();
        assert_eq!(request.details().map(|d| d.method()), Some(PaymentMethod::BankTransfer));
    }

    #[test]
    fn process_body_omits_absent_fields() {
        let body = ProcessWithdrawal {
            status: WithdrawalStatus::Approved,
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"status": "approved"}));
    }

    #[test]
    fn status_filter_parses_known_values() {
        assert_eq!(WithdrawalStatus::from_filter("completed"), Some(WithdrawalStatus::Completed));
        assert_eq!(WithdrawalStatus::from_filter("all"), None);
    }
}
