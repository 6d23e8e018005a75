use axum::{
    Extension, Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::application::AppError;
use crate::domain::{Amount, Customer, Operation, parse_statement_date, serialize_amount};

use super::AppState;
use super::middleware::ResolvedCustomer;

#[derive(Debug, Deserialize)]
pub struct CreateAccountReq {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountReq {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositReq {
    pub description: Option<String>,
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawReq {
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

/// A bare JSON number, e.g. `70` or `12.5`.
#[derive(Debug, Serialize)]
pub struct BalanceResp(#[serde(serialize_with = "serialize_amount")] pub Amount);

pub async fn create_account(
    State(service): State<AppState>,
    payload: Result<Json<CreateAccountReq>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(req) = payload?;
    service.create_account(req.cpf, req.name).await?;
    Ok(StatusCode::CREATED)
}

pub async fn get_account(
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
) -> Json<Customer> {
    Json(customer)
}

pub async fn update_account(
    State(service): State<AppState>,
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
    payload: Result<Json<UpdateAccountReq>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(req) = payload?;
    service.update_name(&customer.tax_id, req.name).await?;
    Ok(StatusCode::CREATED)
}

/// Responds with the customers left in the store.
pub async fn delete_account(
    State(service): State<AppState>,
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let remaining = service.delete_account(&customer.tax_id).await?;
    Ok(Json(remaining))
}

pub async fn get_balance(
    State(service): State<AppState>,
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
) -> Result<Json<BalanceResp>, AppError> {
    let balance = service.get_balance(&customer.tax_id).await?;
    Ok(Json(BalanceResp(balance)))
}

pub async fn get_statement(
    State(service): State<AppState>,
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
) -> Result<Json<Vec<Operation>>, AppError> {
    let statement = service.get_statement(&customer.tax_id).await?;
    Ok(Json(statement))
}

pub async fn get_statement_by_date(
    State(service): State<AppState>,
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
    query: Result<Query<StatementDateQuery>, QueryRejection>,
) -> Result<Json<Vec<Operation>>, AppError> {
    let Query(query) = query?;
    let raw = query
        .date
        .ok_or_else(|| AppError::InvalidDate("missing 'date' query parameter".into()))?;
    let date = parse_statement_date(&raw)?;

    let statement = service.get_statement_on(&customer.tax_id, date).await?;
    Ok(Json(statement))
}

pub async fn deposit(
    State(service): State<AppState>,
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
    payload: Result<Json<DepositReq>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(req) = payload?;
    service
        .deposit(&customer.tax_id, req.description, req.amount)
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn withdraw(
    State(service): State<AppState>,
    Extension(ResolvedCustomer(customer)): Extension<ResolvedCustomer>,
    payload: Result<Json<WithdrawReq>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(req) = payload?;
    service.withdraw(&customer.tax_id, req.amount).await?;
    Ok(StatusCode::CREATED)
}
