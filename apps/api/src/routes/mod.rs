pub mod health;

use axum::{routing::get, Router};

use crate::career::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    let career = Router::new()
        .route("/all", get(handlers::handle_all))
        .route("/stage1", get(handlers::handle_stage1))
        .route("/stage2", get(handlers::handle_stage2))
        .route("/timeseries", get(handlers::handle_timeseries))
        // Combined stage store: no backing storage exists yet
        .route("/stages", get(not_implemented).post(not_implemented))
        .route("/stages/query", get(not_implemented));

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/career", career)
        .with_state(state)
}
