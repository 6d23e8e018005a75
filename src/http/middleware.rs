use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::application::AppError;
use crate::domain::Customer;

use super::AppState;

/// Request header carrying the customer's tax ID.
pub const TAX_ID_HEADER: &str = "cpf";

/// The customer a request was resolved to, attached as a request extension.
#[derive(Clone, Debug)]
pub struct ResolvedCustomer(pub Customer);

/// Resolve the `cpf` header to a registered customer, or stop the request
/// with `Customer not found!`. A missing or non-UTF-8 header counts as unknown.
pub async fn resolve_customer(
    State(service): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let tax_id = req
        .headers()
        .get(TAX_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .ok_or_else(|| AppError::CustomerNotFound(String::new()))?;

    let customer = service.get_customer(&tax_id).await?;
    req.extensions_mut().insert(ResolvedCustomer(customer));

    Ok(next.run(req).await)
}
