use chrono::{NaiveDate, TimeZone};

use super::{Amount, Operation};

/// Compute a balance by folding a statement left to right.
/// Balance = sum of credits - sum of debits
pub fn compute_balance(statement: &[Operation]) -> Result<Amount, BalanceOverflow> {
    statement.iter().try_fold(Amount::ZERO, apply_operation)
}

/// The balance after `operation` is applied to `balance`.
pub fn apply_operation(
    balance: Amount,
    operation: &Operation,
) -> Result<Amount, BalanceOverflow> {
    let next = if operation.is_credit() {
        balance.checked_add(operation.amount)
    } else {
        balance.checked_sub(operation.amount)
    };
    next.ok_or(BalanceOverflow {
        balance,
        amount: operation.amount,
    })
}

/// Select the operations created on `date`, as seen from the `tz` time zone.
/// Time of day is ignored and the statement order is preserved.
pub fn statement_on<Tz: TimeZone>(
    statement: &[Operation],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<Operation> {
    statement
        .iter()
        .filter(|op| op.created_at.with_timezone(tz).date_naive() == date)
        .cloned()
        .collect()
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_statement_date(input: &str) -> Result<NaiveDate, ParseDateError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ParseDateError::InvalidFormat(input.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    InvalidFormat(String),
}

impl std::fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseDateError::InvalidFormat(input) => {
                write!(f, "'{}', expected YYYY-MM-DD", input)
            }
        }
    }
}

impl std::error::Error for ParseDateError {}

/// A balance left the range an `Amount` can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceOverflow {
    pub balance: Amount,
    pub amount: Amount,
}

impl std::fmt::Display for BalanceOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "applying {} to a balance of {} is out of range",
            self.amount, self.balance
        )
    }
}

impl std::error::Error for BalanceOverflow {}
