use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{Achievement, CreateUserAchievement, UserAchievement};

const USER_ACHIEVEMENT_JOIN: &str = "SELECT ua.user_id, ua.achievement_id, ua.created_at, ua.updated_at, \
     a.code, a.title, a.description \
     FROM user_achievements ua \
     JOIN achievements a ON ua.achievement_id = a.id";

pub struct AchievementService {
    db: PgPool,
}

impl AchievementService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        let achievements = sqlx::query_as::<_, Achievement>(
            "SELECT id, code, title, description FROM achievements ORDER BY title",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(achievements)
    }

    pub async fn list_user_achievements(
        &self,
        user_id: Option<i64>,
    ) -> Result<Vec<UserAchievement>, ApiError> {
        let earned = match user_id {
            Some(user_id) => {
                sqlx::query_as::<_, UserAchievement>(&format!(
                    "{USER_ACHIEVEMENT_JOIN} WHERE ua.user_id = $1 ORDER BY ua.created_at DESC"
                ))
                .bind(user_id)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, UserAchievement>(&format!(
                    "{USER_ACHIEVEMENT_JOIN} ORDER BY ua.created_at DESC"
                ))
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(earned)
    }

    /// Record an earned badge. Each (user, achievement) pair is unique.
    pub async fn award(&self, request: CreateUserAchievement) -> Result<(), ApiError> {
        let existing =
            sqlx::query("SELECT 1 FROM user_achievements WHERE user_id = $1 AND achievement_id = $2")
                .bind(request.user_id)
                .bind(request.achievement_id)
                .fetch_optional(&self.db)
                .await?;

        if existing.is_some() {
            return Err(ApiError::bad_request("Achievement already earned"));
        }

        sqlx::query("INSERT INTO user_achievements (user_id, achievement_id) VALUES ($1, $2)")
            .bind(request.user_id)
            .bind(request.achievement_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
