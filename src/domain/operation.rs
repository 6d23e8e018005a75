use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer, ser::Error as _};

/// Amounts are exact decimals, so folding a statement never drifts.
pub type Amount = Decimal;

/// Write an amount as a JSON number: whole amounts as integers (`70`),
/// fractional ones as floats (`12.5`).
pub fn serialize_amount<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match normalized.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => Err(S::Error::custom(format!("amount {} is not representable", amount))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money coming in (deposits)
    Credit,
    /// Money going out (withdrawals)
    Debit,
}

/// A single statement entry. Operations are immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Operation {
    pub fn new(kind: OperationKind, amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            amount,
            description: None,
            created_at,
        }
    }

    /// A credit timestamped now.
    pub fn deposit(amount: Amount) -> Self {
        Self::new(OperationKind::Credit, amount, Utc::now())
    }

    /// A debit timestamped now. Withdrawals carry no description.
    pub fn withdrawal(amount: Amount) -> Self {
        Self::new(OperationKind::Debit, amount, Utc::now())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_credit(&self) -> bool {
        self.kind == OperationKind::Credit
    }
}
