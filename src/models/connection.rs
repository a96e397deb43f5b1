use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Connection joined with display names for both sides and the trainer's
/// specialty, as returned by GET /trainer-connections.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainerConnectionDetail {
    pub athlete_id: i64,
    pub trainer_id: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub athlete_name: Option<String>,
    pub trainer_name: Option<String>,
    pub trainer_specialty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTrainerConnection {
    pub athlete_id: i64,
    pub trainer_id: i64,
    pub notes: Option<String>,
}
