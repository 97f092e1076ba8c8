use crate::state::AppState;
use axum::Router;

pub mod avatar;
mod claims;
pub mod dto;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod validation;

pub use claims::{Claims, ClaimsUser};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::users_routes())
        .merge(handlers::auth_routes())
}
