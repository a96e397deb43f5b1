use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{Athlete, UpdateAthlete, UpdateUser, User, UserWithRoles};
use crate::services::UserService;

pub fn users_routes(db: PgPool) -> Router {
    Router::new()
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
        .with_state(db)
}

pub fn athletes_routes(db: PgPool) -> Router {
    Router::new()
        .route("/:id", get(get_athlete).patch(update_athlete))
        .with_state(db)
}

#[tracing::instrument(skip(db))]
async fn get_user(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<UserWithRoles>, ApiError> {
    UserService::new(db)
        .get_user_with_roles(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

#[tracing::instrument(skip(db, update))]
async fn update_user(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateUser>,
) -> Result<Json<User>, ApiError> {
    UserService::new(db)
        .update_user(id, update)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

#[tracing::instrument(skip(db))]
async fn delete_user(State(db): State<PgPool>, Path(id): Path<i64>) -> Result<Json<Value>, ApiError> {
    let deleted = UserService::new(db).delete_user(id).await?;

    if !deleted {
        return Err(ApiError::NotFound("User"));
    }

    Ok(Json(json!({ "success": true })))
}

#[tracing::instrument(skip(db))]
async fn get_athlete(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Athlete>, ApiError> {
    UserService::new(db)
        .get_athlete(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Athlete"))
}

#[tracing::instrument(skip(db, update))]
async fn update_athlete(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateAthlete>,
) -> Result<Json<Athlete>, ApiError> {
    UserService::new(db)
        .update_athlete(id, update)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Athlete"))
}
