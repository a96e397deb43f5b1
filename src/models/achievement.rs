use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Achievement {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
}

/// An earned badge joined with its catalog definition.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserAchievement {
    pub user_id: i64,
    pub achievement_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserAchievement {
    pub user_id: i64,
    pub achievement_id: i64,
}
