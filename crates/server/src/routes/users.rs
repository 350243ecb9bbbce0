use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use models::{User, UserInput};
use service::errors::ServiceError;
use tracing::info;

use crate::errors::JsonApiError;
use crate::negotiate::{Accept, Entity, Negotiated};
use crate::routes::AppState;

/// get all users
#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "OK", body = [User]),
        (status = 406, description = "Not Acceptable")
    )
)]
pub async fn list(State(state): State<AppState>, Accept(format): Accept) -> Negotiated<Vec<User>> {
    let users = state.users.list().await;
    info!(count = users.len(), "list users");
    Negotiated::ok(format, users)
}

/// get a user
#[utoipa::path(
    get, path = "/users/{user-id}", tag = "users",
    params(("user-id" = String, Path, description = "identifier of the user", example = "1")),
    responses(
        (status = 200, description = "OK", body = User),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Accept(format): Accept,
) -> Result<Negotiated<User>, JsonApiError> {
    match state.users.get(&id).await {
        Ok(user) => Ok(Negotiated::ok(format, user)),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::not_found("User could not be found.")),
        Err(e) => Err(e.into()),
    }
}

/// update a user
#[utoipa::path(
    put, path = "/users/{user-id}", tag = "users",
    params(("user-id" = String, Path, description = "identifier of the user")),
    request_body = User,
    responses(
        (status = 200, description = "Updated", body = User),
        (status = 400, description = "Bad Request"),
        (status = 415, description = "Unsupported Media Type")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Accept(format): Accept,
    Entity(user): Entity<User>,
) -> Result<Negotiated<User>, JsonApiError> {
    let stored = state.users.update(&id, user).await?;
    info!(id = %stored.id, "updated user");
    Ok(Negotiated::ok(format, stored))
}

/// create a user
///
/// The identifier is taken from the body.
#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = UserInput,
    responses(
        (status = 201, description = "Created", body = User),
        (status = 400, description = "Bad Request"),
        (status = 415, description = "Unsupported Media Type")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Accept(format): Accept,
    Entity(input): Entity<UserInput>,
) -> Result<Negotiated<User>, JsonApiError> {
    let created = state.users.create(None, input).await?;
    info!(id = %created.id, "created user");
    Ok(Negotiated::created(format, created))
}

/// create a user
///
/// The record is seeded with the path identifier; body fields are merged on top.
#[utoipa::path(
    post, path = "/users/{user-id}", tag = "users",
    params(("user-id" = String, Path, description = "identifier of the user")),
    request_body = UserInput,
    responses(
        (status = 201, description = "Created", body = User),
        (status = 400, description = "Bad Request"),
        (status = 415, description = "Unsupported Media Type")
    )
)]
pub async fn create_with_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Accept(format): Accept,
    Entity(input): Entity<UserInput>,
) -> Result<Negotiated<User>, JsonApiError> {
    let created = state.users.create(Some(&id), input).await?;
    info!(id = %created.id, "created user");
    Ok(Negotiated::created(format, created))
}

/// delete a user
#[utoipa::path(
    delete, path = "/users/{user-id}", tag = "users",
    params(("user-id" = String, Path, description = "identifier of the user")),
    responses((status = 200, description = "Deleted or absent"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let existed = state.users.delete(&id).await;
    info!(id = %id, existed, "delete user");
    StatusCode::OK
}
