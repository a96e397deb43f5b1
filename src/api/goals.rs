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
use crate::models::{CreateUserGoal, Goal, UpdateUserGoal, UserGoal};
use crate::services::GoalService;

pub fn goals_routes(db: PgPool) -> Router {
    Router::new().route("/", get(list_goals)).with_state(db)
}

pub fn user_goals_routes(db: PgPool) -> Router {
    Router::new()
        .route(
            "/",
            get(list_user_goals)
                .post(create_user_goal)
                .patch(update_user_goal)
                .delete(delete_user_goal),
        )
        .with_state(db)
}

#[tracing::instrument(skip(db))]
async fn list_goals(State(db): State<PgPool>) -> Result<Json<Vec<Goal>>, ApiError> {
    let goals = GoalService::new(db).list_goals().await?;
    Ok(Json(goals))
}

#[derive(Debug, Deserialize)]
struct UserGoalFilter {
    user_id: Option<i64>,
    goal_id: Option<i64>,
}

#[tracing::instrument(skip(db))]
async fn list_user_goals(
    State(db): State<PgPool>,
    Query(filter): Query<UserGoalFilter>,
) -> Result<Json<Vec<UserGoal>>, ApiError> {
    let user_goals = GoalService::new(db).list_user_goals(filter.user_id).await?;
    Ok(Json(user_goals))
}

#[tracing::instrument(skip(db, request))]
async fn create_user_goal(
    State(db): State<PgPool>,
    Json(request): Json<CreateUserGoal>,
) -> Result<Json<Value>, ApiError> {
    let user_id = request.user_id;
    let goal_id = request.goal_id;

    GoalService::new(db).create_user_goal(request).await?;

    Ok(Json(json!({
        "success": true,
        "user_id": user_id,
        "goal_id": goal_id,
    })))
}

#[tracing::instrument(skip(db, request))]
async fn update_user_goal(
    State(db): State<PgPool>,
    Json(request): Json<UpdateUserGoal>,
) -> Result<Json<UserGoal>, ApiError> {
    GoalService::new(db)
        .update_user_goal(request)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User goal"))
}

#[tracing::instrument(skip(db))]
async fn delete_user_goal(
    State(db): State<PgPool>,
    Query(filter): Query<UserGoalFilter>,
) -> Result<Json<Value>, ApiError> {
    let (Some(user_id), Some(goal_id)) = (filter.user_id, filter.goal_id) else {
        return Err(ApiError::bad_request("user_id and goal_id required"));
    };

    GoalService::new(db).delete_user_goal(user_id, goal_id).await?;

    Ok(Json(json!({ "success": true })))
}
