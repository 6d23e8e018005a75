//! HTTP surface of the ledger.
//!
//! Every route except account creation sits behind [`middleware::resolve_customer`],
//! which turns the `cpf` header into a [`middleware::ResolvedCustomer`].

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::LedgerService;

pub type AppState = Arc<LedgerService>;

/// Build the application router over a shared service.
pub fn app(service: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/account",
            get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .route("/balance", get(handlers::get_balance))
        .route("/statement", get(handlers::get_statement))
        .route("/statement/date", get(handlers::get_statement_by_date))
        .route("/deposit", post(handlers::deposit))
        .route("/withdraw", post(handlers::withdraw))
        .route_layer(from_fn_with_state(
            service.clone(),
            middleware::resolve_customer,
        ));

    Router::new()
        .route("/account", post(handlers::create_account))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
