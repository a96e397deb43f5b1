use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: i64,
    pub user_id: i64,
    pub session_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutSession {
    pub user_id: i64,
    pub session_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutSession {
    pub session_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseType {
    pub id: i64,
    pub name: String,
    pub target_muscle_group: Option<String>,
}

/// One exercise performed inside a session, joined with its catalog entry.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SessionExercise {
    pub session_id: i64,
    pub exercise_type_id: i64,
    pub exercise_order: Option<i32>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub duration_min: Option<i32>,
    pub weight: Option<f64>,
    pub calories_burned: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub name: String,
    pub target_muscle_group: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionExercise {
    pub exercise_type_id: i64,
    pub exercise_order: Option<i32>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub duration_min: Option<i32>,
    pub weight: Option<f64>,
    pub calories_burned: Option<i32>,
}

/// A session with its full exercise detail, as returned by GET /workouts/:id.
#[derive(Debug, Serialize)]
pub struct WorkoutWithExercises {
    #[serde(flatten)]
    pub session: WorkoutSession,
    pub exercises: Vec<SessionExercise>,
}
