use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{CreateTrainerConnection, TrainerConnectionDetail, TrainerWithUser};

const TRAINER_JOIN: &str = "SELECT t.id, t.specialty, t.location, t.bio, \
     u.first_name, u.last_name, u.email \
     FROM trainers t \
     JOIN users u ON t.id = u.id";

const CONNECTION_JOIN: &str = "SELECT tc.athlete_id, tc.trainer_id, tc.notes, tc.created_at, \
     TRIM(CONCAT(ua.first_name, ' ', ua.last_name)) AS athlete_name, \
     TRIM(CONCAT(ut.first_name, ' ', ut.last_name)) AS trainer_name, \
     t.specialty AS trainer_specialty \
     FROM trainer_connections tc \
     JOIN users ua ON tc.athlete_id = ua.id \
     JOIN users ut ON tc.trainer_id = ut.id \
     JOIN trainers t ON tc.trainer_id = t.id";

pub struct TrainerService {
    db: PgPool,
}

impl TrainerService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_trainers(&self) -> Result<Vec<TrainerWithUser>, ApiError> {
        let trainers = sqlx::query_as::<_, TrainerWithUser>(TRAINER_JOIN)
            .fetch_all(&self.db)
            .await?;

        Ok(trainers)
    }

    pub async fn get_trainer(&self, trainer_id: i64) -> Result<Option<TrainerWithUser>, ApiError> {
        let trainer =
            sqlx::query_as::<_, TrainerWithUser>(&format!("{TRAINER_JOIN} WHERE t.id = $1"))
                .bind(trainer_id)
                .fetch_optional(&self.db)
                .await?;

        Ok(trainer)
    }

    /// List connections, optionally filtered by athlete or trainer side.
    /// The athlete filter wins when both are supplied.
    pub async fn list_connections(
        &self,
        athlete_id: Option<i64>,
        trainer_id: Option<i64>,
    ) -> Result<Vec<TrainerConnectionDetail>, ApiError> {
        let connections = match (athlete_id, trainer_id) {
            (Some(athlete_id), _) => {
                sqlx::query_as::<_, TrainerConnectionDetail>(&format!(
                    "{CONNECTION_JOIN} WHERE tc.athlete_id = $1"
                ))
                .bind(athlete_id)
                .fetch_all(&self.db)
                .await?
            }
            (None, Some(trainer_id)) => {
                sqlx::query_as::<_, TrainerConnectionDetail>(&format!(
                    "{CONNECTION_JOIN} WHERE tc.trainer_id = $1"
                ))
                .bind(trainer_id)
                .fetch_all(&self.db)
                .await?
            }
            (None, None) => {
                sqlx::query_as::<_, TrainerConnectionDetail>(CONNECTION_JOIN)
                    .fetch_all(&self.db)
                    .await?
            }
        };

        Ok(connections)
    }

    /// Connect an athlete to a trainer. The pair is unique; a repeat request
    /// is a conflict.
    pub async fn create_connection(
        &self,
        request: CreateTrainerConnection,
    ) -> Result<(), ApiError> {
        let existing = sqlx::query(
            "SELECT 1 FROM trainer_connections WHERE athlete_id = $1 AND trainer_id = $2",
        )
        .bind(request.athlete_id)
        .bind(request.trainer_id)
        .fetch_optional(&self.db)
        .await?;

        if existing.is_some() {
            return Err(ApiError::bad_request("Connection already exists"));
        }

        sqlx::query(
            "INSERT INTO trainer_connections (athlete_id, trainer_id, notes) VALUES ($1, $2, $3)",
        )
        .bind(request.athlete_id)
        .bind(request.trainer_id)
        .bind(request.notes)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn delete_connection(&self, athlete_id: i64, trainer_id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM trainer_connections WHERE athlete_id = $1 AND trainer_id = $2")
            .bind(athlete_id)
            .bind(trainer_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
