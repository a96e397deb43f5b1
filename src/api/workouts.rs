use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{
    CreateSessionExercise, CreateWorkoutSession, ExerciseType, SessionExercise,
    UpdateWorkoutSession, WorkoutSession, WorkoutWithExercises,
};
use crate::services::WorkoutService;

pub fn workouts_routes(db: PgPool) -> Router {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route(
            "/:id",
            get(get_workout).patch(update_workout).delete(delete_workout),
        )
        .route("/:id/exercises", get(list_exercises).post(add_exercise))
        .with_state(db)
}

pub fn exercise_types_routes(db: PgPool) -> Router {
    Router::new()
        .route("/", get(list_exercise_types))
        .with_state(db)
}

#[derive(Debug, Deserialize)]
struct WorkoutFilter {
    user_id: Option<i64>,
}

#[tracing::instrument(skip(db))]
async fn list_workouts(
    State(db): State<PgPool>,
    Query(filter): Query<WorkoutFilter>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let sessions = WorkoutService::new(db).list_sessions(filter.user_id).await?;
    Ok(Json(sessions))
}

#[tracing::instrument(skip(db, request))]
async fn create_workout(
    State(db): State<PgPool>,
    Json(request): Json<CreateWorkoutSession>,
) -> Result<Json<Value>, ApiError> {
    let session_id = WorkoutService::new(db).create_session(request).await?;

    Ok(Json(json!({ "success": true, "id": session_id })))
}

#[tracing::instrument(skip(db))]
async fn get_workout(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutWithExercises>, ApiError> {
    WorkoutService::new(db)
        .get_session_with_exercises(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Workout"))
}

#[tracing::instrument(skip(db, update))]
async fn update_workout(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateWorkoutSession>,
) -> Result<Json<WorkoutSession>, ApiError> {
    WorkoutService::new(db)
        .update_session(id, update)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Workout"))
}

#[tracing::instrument(skip(db))]
async fn delete_workout(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = WorkoutService::new(db).delete_session(id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Workout"));
    }

    Ok(Json(json!({ "success": true })))
}

#[tracing::instrument(skip(db))]
async fn list_exercises(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SessionExercise>>, ApiError> {
    let exercises = WorkoutService::new(db).list_exercises(id).await?;
    Ok(Json(exercises))
}

#[tracing::instrument(skip(db, request))]
async fn add_exercise(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
    Json(request): Json<CreateSessionExercise>,
) -> Result<Json<Value>, ApiError> {
    let exercise_type_id = request.exercise_type_id;

    WorkoutService::new(db).add_exercise(id, request).await?;

    Ok(Json(json!({
        "success": true,
        "session_id": id,
        "exercise_type_id": exercise_type_id,
    })))
}

#[tracing::instrument(skip(db))]
async fn list_exercise_types(
    State(db): State<PgPool>,
) -> Result<Json<Vec<ExerciseType>>, ApiError> {
    let types = WorkoutService::new(db).list_exercise_types().await?;
    Ok(Json(types))
}
