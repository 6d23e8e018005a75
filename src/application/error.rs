use thiserror::Error;

use crate::domain::{Amount, BalanceOverflow, ParseDateError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Customer not found!")]
    CustomerNotFound(String),

    #[error("Customer already exists!")]
    CustomerAlreadyExists(String),

    #[error("Insufficient funds!")]
    InsufficientFunds { balance: Amount, required: Amount },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),

    #[error("Amount out of range: {0}")]
    BalanceOverflow(#[from] BalanceOverflow),

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

impl From<ParseDateError> for AppError {
    fn from(value: ParseDateError) -> Self {
        AppError::InvalidDate(value.to_string())
    }
}
