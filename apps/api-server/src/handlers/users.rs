//! User record handlers.
//!
//! Every body leaving this module goes through a `roster_shared::dto`
//! view, so the password is never serialized.

use actix_web::{HttpResponse, web};

use roster_core::domain::{AuthenticationResult, UserId};
use roster_shared::dto::{
    AuthenticateRequest, AuthenticationResponse, CountResponse, CreateUserRequest,
    PatchUserRequest, UserResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;

    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /users/{id}
///
/// An unknown id answers `200` with a `null` body.
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<UserId>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user.map(UserResponse::from)))
}

/// POST /users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = state.users.create(body.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// PATCH /users/{id}
///
/// Same `null` answer as `get_user` when the id is unknown.
pub async fn patch_user(
    state: web::Data<AppState>,
    path: web::Path<UserId>,
    body: web::Json<PatchUserRequest>,
) -> AppResult<HttpResponse> {
    let user = state
        .users
        .patch(path.into_inner(), body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(user.map(UserResponse::from)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<UserId>,
) -> AppResult<HttpResponse> {
    let count = state.users.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CountResponse { count }))
}

/// POST /users/authenticate
///
/// A body missing either member is denied without a lookup.
pub async fn authenticate(
    state: web::Data<AppState>,
    body: web::Json<AuthenticateRequest>,
) -> AppResult<HttpResponse> {
    let result = match body.into_inner().into_credentials() {
        Some(credentials) => state.users.authenticate(&credentials).await?,
        None => AuthenticationResult::denied(),
    };

    Ok(HttpResponse::Ok().json(AuthenticationResponse::from(result)))
}
