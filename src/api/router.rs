use axum::{
    Router,
    routing::{any, get},
};

use crate::{
    AppState,
    api::methods::{health::health, profile::get_user_name},
    infrastructure::store::ProfileStore,
};

pub fn router<S: ProfileStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/", any(get_user_name::<S>))
        .route("/get-user-name", any(get_user_name::<S>))
        .route("/health", get(health))
}
