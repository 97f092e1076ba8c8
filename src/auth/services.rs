//! Registration and login flows, independent of the HTTP layer.

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::{
        avatar::gravatar_url,
        dto::{LoginRequest, PublicUser, RegisterRequest},
        jwt::JwtKeys,
        password::{hash_password_async, verify_password_async},
        repo::{CreateUserError, UserRepository},
        repo_types::NewUser,
        validation::{validate, LOGIN_RULES, REGISTER_RULES},
    },
    error::{AppError, AppResult},
};

/// Validates the request, creates the user and returns a signed token.
///
/// The insert is awaited before the token is signed, so a token is only
/// handed out for a stored user.
pub async fn register(
    users: &dyn UserRepository,
    keys: &JwtKeys,
    payload: RegisterRequest,
) -> AppResult<String> {
    let payload = payload.normalized();
    validate(&payload, REGISTER_RULES).map_err(AppError::Validation)?;

    let (Some(name), Some(email), Some(password)) = (payload.name, payload.email, payload.password)
    else {
        return Err(AppError::Internal(anyhow::anyhow!(
            "validated registration is missing a field"
        )));
    };

    // Fast path; the unique constraint below is what actually decides.
    if users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::UserExists);
    }

    let avatar = gravatar_url(&email);
    let password_hash = hash_password_async(password).await?;

    let user = users
        .create(NewUser {
            name,
            email,
            avatar,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            CreateUserError::EmailTaken => {
                warn!("email taken by a concurrent registration");
                AppError::UserExists
            }
            CreateUserError::Other(e) => AppError::Internal(e.context("create user")),
        })?;

    let token = keys.sign(user.id)?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(token)
}

/// Checks credentials and returns a signed token.
pub async fn login(
    users: &dyn UserRepository,
    keys: &JwtKeys,
    payload: LoginRequest,
) -> AppResult<String> {
    let payload = payload.normalized();
    validate(&payload, LOGIN_RULES).map_err(AppError::Validation)?;

    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(AppError::Internal(anyhow::anyhow!(
            "validated login is missing a field"
        )));
    };

    let Some(user) = users.find_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password_async(password, user.password_hash.clone()).await? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = keys.sign(user.id)?;
    info!(user_id = %user.id, "user logged in");
    Ok(token)
}

pub async fn current_user(users: &dyn UserRepository, user_id: Uuid) -> AppResult<PublicUser> {
    users
        .find_by_id(user_id)
        .await?
        .map(PublicUser::from)
        .ok_or(AppError::UserNotFound)
}
