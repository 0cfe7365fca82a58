use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod credit_limits;
mod emotions;
mod error;
mod system;
mod types;
mod users;
mod validation;

pub use error::ApiError;
pub use types::*;

use crate::config::Config;
use crate::db::Store;
use crate::limits::LimitCalculator;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,

    pub limits: Arc<LimitCalculator>,
}

pub async fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(Arc::new(AppState {
        store,
        limits: Arc::new(LimitCalculator::new()),
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users", get(users::list_users))
        .route("/emotions", post(emotions::create_emotion))
        .route("/emotions", get(emotions::list_emotions))
        .route("/credit-limits", get(credit_limits::list_credit_limits))
        .route(
            "/credit-limit/{user_id}",
            get(credit_limits::get_credit_limit),
        )
        .route("/health", get(system::health))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
