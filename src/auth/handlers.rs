use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterRequest, TokenResponse},
        jwt::{AuthUser, JwtKeys},
        services,
    },
    error::{AppError, AppResult},
    state::AppState,
};

pub fn users_routes() -> Router<AppState> {
    Router::new().route("/api/users", post(register))
}

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/api/auth", post(login).get(get_me))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload.map(|Json(p)| p).map_err(|e| {
        warn!(error = %e, "rejected request body");
        AppError::MalformedBody(e.body_text())
    })
}

/// POST /api/users
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let payload = body(payload)?;
    let keys = JwtKeys::from_ref(&state);
    let token = services::register(state.users.as_ref(), &keys, payload).await?;
    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let payload = body(payload)?;
    let keys = JwtKeys::from_ref(&state);
    let token = services::login(state.users.as_ref(), &keys, payload).await?;
    Ok(Json(TokenResponse { token }))
}

/// GET /api/auth
#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<PublicUser>> {
    let user = services::current_user(state.users.as_ref(), user_id).await?;
    Ok(Json(user))
}
