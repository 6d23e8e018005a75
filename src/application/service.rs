use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::domain::{
    Amount, Customer, Operation, apply_operation, compute_balance, statement_on,
};
use crate::storage::{Repository, StoreStats};

use super::AppError;

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (HTTP, tests, etc.).
pub struct LedgerService {
    repo: Repository,
    strict_amounts: bool,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            strict_amounts: false,
        }
    }

    /// Create a service over an empty store.
    pub fn in_memory() -> Self {
        Self::new(Repository::new())
    }

    /// Reject negative deposit and withdrawal amounts. Off by default, in which
    /// case a negative deposit debits the account and a negative withdrawal
    /// credits it.
    pub fn with_strict_amounts(mut self, strict: bool) -> Self {
        self.strict_amounts = strict;
        self
    }

    // ========================
    // Account operations
    // ========================

    /// Register a new customer with an empty statement.
    pub async fn create_account(
        &self,
        tax_id: String,
        name: String,
    ) -> Result<Customer, AppError> {
        let customer = Customer::new(tax_id, name);
        if !self.repo.insert_customer(customer.clone()).await {
            warn!(tax_id = %customer.tax_id, "customer already exists");
            return Err(AppError::CustomerAlreadyExists(customer.tax_id));
        }

        info!(tax_id = %customer.tax_id, id = %customer.id, "account created");
        Ok(customer)
    }

    /// Get a customer by tax ID.
    pub async fn get_customer(&self, tax_id: &str) -> Result<Customer, AppError> {
        let customer = self.repo.get_customer(tax_id).await;
        if customer.is_none() {
            debug!(tax_id, "customer lookup missed");
        }
        customer.ok_or_else(|| AppError::CustomerNotFound(tax_id.to_string()))
    }

    /// Overwrite a customer's name.
    pub async fn update_name(&self, tax_id: &str, name: String) -> Result<Customer, AppError> {
        let customer = self
            .repo
            .update_customer(tax_id, |customer| {
                customer.name = name;
                customer.clone()
            })
            .await
            .ok_or_else(|| AppError::CustomerNotFound(tax_id.to_string()))?;

        info!(tax_id, "account renamed");
        Ok(customer)
    }

    /// Delete the account registered under `tax_id` and return the customers left.
    pub async fn delete_account(&self, tax_id: &str) -> Result<Vec<Customer>, AppError> {
        let remaining = self
            .repo
            .remove_customer_and_list(tax_id)
            .await
            .ok_or_else(|| AppError::CustomerNotFound(tax_id.to_string()))?;

        info!(tax_id, remaining = remaining.len(), "account deleted");
        Ok(remaining)
    }

    /// List all customers in creation order.
    pub async fn list_customers(&self) -> Vec<Customer> {
        self.repo.list_customers().await
    }

    pub async fn stats(&self) -> StoreStats {
        self.repo.stats().await
    }

    // ========================
    // Money movement
    // ========================

    /// Append a credit to the customer's statement, unless the resulting
    /// balance would leave the representable range.
    pub async fn deposit(
        &self,
        tax_id: &str,
        description: Option<String>,
        amount: Amount,
    ) -> Result<Operation, AppError> {
        self.check_amount(amount)?;

        let mut operation = Operation::deposit(amount);
        if let Some(desc) = description {
            operation = operation.with_description(desc);
        }

        let outcome = self
            .repo
            .update_customer(tax_id, |customer| -> Result<Operation, AppError> {
                let balance = compute_balance(&customer.statement)?;
                apply_operation(balance, &operation)?;
                customer.record(operation.clone());
                Ok(operation)
            })
            .await
            .ok_or_else(|| AppError::CustomerNotFound(tax_id.to_string()))?;

        match &outcome {
            Ok(_) => info!(tax_id, %amount, "deposit recorded"),
            Err(err) => warn!(tax_id, %amount, %err, "deposit rejected"),
        }
        outcome
    }

    /// Append a debit if the current balance covers it.
    /// The balance check and the append happen under the same write lock.
    pub async fn withdraw(&self, tax_id: &str, amount: Amount) -> Result<Operation, AppError> {
        self.check_amount(amount)?;

        let outcome = self
            .repo
            .update_customer(tax_id, |customer| {
                let balance = compute_balance(&customer.statement)?;
                if balance < amount {
                    return Err(AppError::InsufficientFunds {
                        balance,
                        required: amount,
                    });
                }

                let operation = Operation::withdrawal(amount);
                apply_operation(balance, &operation)?;
                customer.record(operation.clone());
                Ok(operation)
            })
            .await
            .ok_or_else(|| AppError::CustomerNotFound(tax_id.to_string()))?;

        match &outcome {
            Ok(_) => info!(tax_id, %amount, "withdrawal recorded"),
            Err(AppError::InsufficientFunds { balance, required }) => {
                warn!(tax_id, %balance, %required, "withdrawal rejected: insufficient funds")
            }
            Err(err) => warn!(tax_id, %amount, %err, "withdrawal rejected"),
        }
        outcome
    }

    // ========================
    // Queries
    // ========================

    /// Current balance of the customer's statement.
    pub async fn get_balance(&self, tax_id: &str) -> Result<Amount, AppError> {
        let customer = self.get_customer(tax_id).await?;
        Ok(compute_balance(&customer.statement)?)
    }

    /// Full statement in insertion order.
    pub async fn get_statement(&self, tax_id: &str) -> Result<Vec<Operation>, AppError> {
        Ok(self.get_customer(tax_id).await?.statement)
    }

    /// Operations created on `date` in the host's local time zone.
    pub async fn get_statement_on(
        &self,
        tax_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Operation>, AppError> {
        let customer = self.get_customer(tax_id).await?;
        Ok(statement_on(&customer.statement, date, &Local))
    }

    fn check_amount(&self, amount: Amount) -> Result<(), AppError> {
        if self.strict_amounts && amount < Amount::ZERO {
            return Err(AppError::InvalidAmount(amount));
        }
        Ok(())
    }
}
