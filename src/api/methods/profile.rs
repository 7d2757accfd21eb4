use axum::{
    Json,
    body::Body,
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    api::types::{GetUserNameRequest, GetUserNameResponse},
    error::{AppError, Result},
    infrastructure::store::ProfileStore,
    middleware::cors::preflight_response,
    services::profile::lookup_user_name,
};

pub async fn get_user_name<S: ProfileStore>(
    State(state): State<AppState<S>>,
    request: Request<Body>,
) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight_response();
    }

    match resolve_user_name(&state, request).await {
        Ok(name) => Json(GetUserNameResponse { name }).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn resolve_user_name<S: ProfileStore>(
    state: &AppState<S>,
    request: Request<Body>,
) -> Result<Option<String>> {
    let body = axum::body::to_bytes(request.into_body(), state.config.server.max_body_bytes)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let payload: GetUserNameRequest = serde_json::from_slice(&body)?;

    let user_id = payload
        .user_id()
        .ok_or_else(|| AppError::Validation("user_id is required".into()))?;

    lookup_user_name(state.store.as_ref(), &user_id).await
}
