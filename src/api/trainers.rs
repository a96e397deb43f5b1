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
use crate::models::{CreateTrainerConnection, TrainerConnectionDetail, TrainerWithUser};
use crate::services::TrainerService;

pub fn trainers_routes(db: PgPool) -> Router {
    Router::new()
        .route("/", get(list_trainers))
        .route("/:id", get(get_trainer))
        .with_state(db)
}

pub fn connections_routes(db: PgPool) -> Router {
    Router::new()
        .route(
            "/",
            get(list_connections)
                .post(create_connection)
                .delete(delete_connection),
        )
        .with_state(db)
}

#[tracing::instrument(skip(db))]
async fn list_trainers(State(db): State<PgPool>) -> Result<Json<Vec<TrainerWithUser>>, ApiError> {
    let trainers = TrainerService::new(db).list_trainers().await?;
    Ok(Json(trainers))
}

#[tracing::instrument(skip(db))]
async fn get_trainer(
    State(db): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<TrainerWithUser>, ApiError> {
    TrainerService::new(db)
        .get_trainer(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Trainer"))
}

#[derive(Debug, Deserialize)]
struct ConnectionFilter {
    athlete_id: Option<i64>,
    trainer_id: Option<i64>,
}

#[tracing::instrument(skip(db))]
async fn list_connections(
    State(db): State<PgPool>,
    Query(filter): Query<ConnectionFilter>,
) -> Result<Json<Vec<TrainerConnectionDetail>>, ApiError> {
    let connections = TrainerService::new(db)
        .list_connections(filter.athlete_id, filter.trainer_id)
        .await?;

    Ok(Json(connections))
}

#[tracing::instrument(skip(db, request))]
async fn create_connection(
    State(db): State<PgPool>,
    Json(request): Json<CreateTrainerConnection>,
) -> Result<Json<Value>, ApiError> {
    let athlete_id = request.athlete_id;
    let trainer_id = request.trainer_id;

    TrainerService::new(db).create_connection(request).await?;

    Ok(Json(json!({
        "success": true,
        "athlete_id": athlete_id,
        "trainer_id": trainer_id,
    })))
}

#[tracing::instrument(skip(db))]
async fn delete_connection(
    State(db): State<PgPool>,
    Query(filter): Query<ConnectionFilter>,
) -> Result<Json<Value>, ApiError> {
    let (Some(athlete_id), Some(trainer_id)) = (filter.athlete_id, filter.trainer_id) else {
        return Err(ApiError::bad_request("athlete_id and trainer_id required"));
    };

    TrainerService::new(db)
        .delete_connection(athlete_id, trainer_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}
