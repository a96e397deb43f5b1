use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{
    CreateSessionExercise, CreateWorkoutSession, ExerciseType, SessionExercise,
    UpdateWorkoutSession, WorkoutSession, WorkoutWithExercises,
};

const SESSION_COLUMNS: &str = "id, user_id, session_date, notes, created_at";

const EXERCISE_JOIN: &str = "SELECT wse.session_id, wse.exercise_type_id, wse.exercise_order, \
     wse.sets, wse.reps, wse.duration_min, wse.weight, wse.calories_burned, \
     wse.created_at, wse.completed_at, et.name, et.target_muscle_group \
     FROM workout_session_exercises wse \
     JOIN exercise_types et ON wse.exercise_type_id = et.id \
     WHERE wse.session_id = $1 \
     ORDER BY wse.exercise_order";

pub struct WorkoutService {
    db: PgPool,
}

impl WorkoutService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_sessions(&self, user_id: Option<i64>) -> Result<Vec<WorkoutSession>, ApiError> {
        let sessions = match user_id {
            Some(user_id) => {
                sqlx::query_as::<_, WorkoutSession>(&format!(
                    "SELECT {SESSION_COLUMNS} FROM workout_sessions
                     WHERE user_id = $1 ORDER BY session_date DESC"
                ))
                .bind(user_id)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, WorkoutSession>(&format!(
                    "SELECT {SESSION_COLUMNS} FROM workout_sessions ORDER BY session_date DESC"
                ))
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(sessions)
    }

    pub async fn create_session(&self, request: CreateWorkoutSession) -> Result<i64, ApiError> {
        let session_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO workout_sessions (user_id, session_date, notes)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(request.user_id)
        .bind(request.session_date)
        .bind(request.notes)
        .fetch_one(&self.db)
        .await?;

        Ok(session_id)
    }

    pub async fn get_session_with_exercises(
        &self,
        session_id: i64,
    ) -> Result<Option<WorkoutWithExercises>, ApiError> {
        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM workout_sessions WHERE id = $1"
        ))
        .bind(session_id)
        .fetch_optional(&self.db)
        .await?;

        let Some(session) = session else {
            return Ok(None);
        };

        let exercises = self.list_exercises(session_id).await?;

        Ok(Some(WorkoutWithExercises { session, exercises }))
    }

    pub async fn update_session(
        &self,
        session_id: i64,
        update: UpdateWorkoutSession,
    ) -> Result<Option<WorkoutSession>, ApiError> {
        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            "UPDATE workout_sessions SET
                session_date = COALESCE($2, session_date),
                notes = COALESCE($3, notes)
             WHERE id = $1
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(session_id)
        .bind(update.session_date)
        .bind(update.notes)
        .fetch_optional(&self.db)
        .await?;

        Ok(session)
    }

    /// Delete a session; its exercise rows go with it (cascade).
    pub async fn delete_session(&self, session_id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE id = $1")
            .bind(session_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_exercises(&self, session_id: i64) -> Result<Vec<SessionExercise>, ApiError> {
        let exercises = sqlx::query_as::<_, SessionExercise>(EXERCISE_JOIN)
            .bind(session_id)
            .fetch_all(&self.db)
            .await?;

        Ok(exercises)
    }

    pub async fn add_exercise(
        &self,
        session_id: i64,
        request: CreateSessionExercise,
    ) -> Result<(), ApiError> {
        sqlx::query(
            "INSERT INTO workout_session_exercises
                (session_id, exercise_type_id, exercise_order, sets, reps,
                 duration_min, weight, calories_burned)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(session_id)
        .bind(request.exercise_type_id)
        .bind(request.exercise_order)
        .bind(request.sets)
        .bind(request.reps)
        .bind(request.duration_min)
        .bind(request.weight)
        .bind(request.calories_burned)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn list_exercise_types(&self) -> Result<Vec<ExerciseType>, ApiError> {
        let types = sqlx::query_as::<_, ExerciseType>(
            "SELECT id, name, target_muscle_group FROM exercise_types ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(types)
    }
}
