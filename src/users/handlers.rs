use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::AppError,
    state::AppState,
    users::{
        dto::{CreateUserRequest, Pagination, UserResponse, MAX_PAGE_SIZE},
        password::hash_password,
        repo::User,
        services::validate_create,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:id", get(get_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if let Err(e) = validate_create(&payload) {
        warn!(email = %payload.email, error = %e, "invalid create request");
        return Err(e);
    }

    let hashed = hash_password(&payload.password)?;

    // Scoped transaction: commit on success, rollback on drop for every
    // error path, so a failed create leaves no partial record.
    let mut tx = state.db.begin().await?;
    let user = match User::insert(&mut *tx, &payload.email, &payload.full_name, &hashed).await {
        Ok(u) => u,
        Err(AppError::DuplicateEmail) => {
            warn!(email = %payload.email, "email already registered");
            return Err(AppError::DuplicateEmail);
        }
        Err(e) => return Err(e),
    };
    tx.commit().await?;

    info!(user_id = user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    match User::fetch_by_id(&state.db, id).await? {
        Some(user) => Ok(Json(UserResponse::from(user))),
        None => {
            warn!(user_id = id, "user not found");
            Err(AppError::UserNotFound(id))
        }
    }
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    if p.skip < 0 {
        return Err(AppError::InvalidInput { field: "skip" });
    }
    if p.limit < 0 {
        return Err(AppError::InvalidInput { field: "limit" });
    }

    let limit = p.limit.min(MAX_PAGE_SIZE);
    let users = User::list(&state.db, p.skip, limit).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
