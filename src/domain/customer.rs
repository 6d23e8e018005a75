use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Operation;

pub type CustomerId = Uuid;

/// The national tax ID a customer is registered and looked up by.
pub type TaxId = String;

/// An account holder and the full history of their operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "cpf")]
    pub tax_id: TaxId,
    pub name: String,
    pub id: CustomerId,
    /// Append-only; insertion order is creation order
    pub statement: Vec<Operation>,
}

impl Customer {
    pub fn new(tax_id: impl Into<TaxId>, name: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
            name: name.into(),
            id: Uuid::new_v4(),
            statement: Vec::new(),
        }
    }

    pub fn record(&mut self, operation: Operation) {
        self.statement.push(operation);
    }
}
