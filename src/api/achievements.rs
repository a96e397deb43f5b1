use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{Achievement, CreateUserAchievement, UserAchievement};
use crate::services::AchievementService;

pub fn achievements_routes(db: PgPool) -> Router {
    Router::new()
        .route("/", get(list_achievements))
        .with_state(db)
}

pub fn user_achievements_routes(db: PgPool) -> Router {
    Router::new()
        .route("/", get(list_user_achievements).post(award_achievement))
        .with_state(db)
}

#[tracing::instrument(skip(db))]
async fn list_achievements(State(db): State<PgPool>) -> Result<Json<Vec<Achievement>>, ApiError> {
    let achievements = AchievementService::new(db).list_achievements().await?;
    Ok(Json(achievements))
}

#[derive(Debug, Deserialize)]
struct UserAchievementFilter {
    user_id: Option<i64>,
}

#[tracing::instrument(skip(db))]
async fn list_user_achievements(
    State(db): State<PgPool>,
    Query(filter): Query<UserAchievementFilter>,
) -> Result<Json<Vec<UserAchievement>>, ApiError> {
    let earned = AchievementService::new(db)
        .list_user_achievements(filter.user_id)
        .await?;

    Ok(Json(earned))
}

#[tracing::instrument(skip(db, request))]
async fn award_achievement(
    State(db): State<PgPool>,
    Json(request): Json<CreateUserAchievement>,
) -> Result<Json<Value>, ApiError> {
    let user_id = request.user_id;
    let achievement_id = request.achievement_id;

    AchievementService::new(db).award(request).await?;

    Ok(Json(json!({
        "success": true,
        "user_id": user_id,
        "achievement_id": achievement_id,
    })))
}
