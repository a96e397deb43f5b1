use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{
    resolve_status, CreateUserGoal, Goal, GoalStatus, UpdateUserGoal, UserGoal,
};

const USER_GOAL_JOIN: &str = "SELECT ug.user_id, ug.goal_id, ug.target_value, ug.current_value, \
     ug.status, ug.created_at, ug.updated_at, g.title, g.description \
     FROM user_goals ug \
     JOIN goals g ON ug.goal_id = g.id";

pub struct GoalService {
    db: PgPool,
}

impl GoalService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let goals =
            sqlx::query_as::<_, Goal>("SELECT id, title, description FROM goals ORDER BY title")
                .fetch_all(&self.db)
                .await?;

        Ok(goals)
    }

    pub async fn list_user_goals(&self, user_id: Option<i64>) -> Result<Vec<UserGoal>, ApiError> {
        let user_goals = match user_id {
            Some(user_id) => {
                sqlx::query_as::<_, UserGoal>(&format!(
                    "{USER_GOAL_JOIN} WHERE ug.user_id = $1 ORDER BY ug.created_at DESC"
                ))
                .bind(user_id)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, UserGoal>(&format!(
                    "{USER_GOAL_JOIN} ORDER BY ug.created_at DESC"
                ))
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(user_goals)
    }

    /// Track a catalog goal for a user. Each (user, goal) pair is unique.
    pub async fn create_user_goal(&self, request: CreateUserGoal) -> Result<(), ApiError> {
        let existing =
            sqlx::query("SELECT 1 FROM user_goals WHERE user_id = $1 AND goal_id = $2")
                .bind(request.user_id)
                .bind(request.goal_id)
                .fetch_optional(&self.db)
                .await?;

        if existing.is_some() {
            return Err(ApiError::bad_request("User already has this goal"));
        }

        sqlx::query(
            "INSERT INTO user_goals (user_id, goal_id, target_value, current_value, status)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(request.user_id)
        .bind(request.goal_id)
        .bind(request.target_value)
        .bind(request.current_value.unwrap_or(0.0))
        .bind(request.status.unwrap_or(GoalStatus::Active).as_str())
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Coalesce-update a goal instance. Once the effective current value
    /// reaches the effective target, the status flips to completed.
    pub async fn update_user_goal(
        &self,
        request: UpdateUserGoal,
    ) -> Result<Option<UserGoal>, ApiError> {
        let existing = sqlx::query_as::<_, (Option<f64>, Option<f64>, String)>(
            "SELECT target_value, current_value, status
             FROM user_goals WHERE user_id = $1 AND goal_id = $2",
        )
        .bind(request.user_id)
        .bind(request.goal_id)
        .fetch_optional(&self.db)
        .await?;

        let Some((stored_target, stored_current, stored_status)) = existing else {
            return Ok(None);
        };

        let target_value = request.target_value.or(stored_target);
        let current_value = request.current_value.or(stored_current);
        let requested = request
            .status
            .or_else(|| GoalStatus::from_str(&stored_status))
            .unwrap_or(GoalStatus::Active);
        let status = resolve_status(current_value, target_value, requested);

        sqlx::query(
            "UPDATE user_goals SET
                target_value = $3,
                current_value = $4,
                status = $5,
                updated_at = NOW()
             WHERE user_id = $1 AND goal_id = $2",
        )
        .bind(request.user_id)
        .bind(request.goal_id)
        .bind(target_value)
        .bind(current_value)
        .bind(status.as_str())
        .execute(&self.db)
        .await?;

        let updated = sqlx::query_as::<_, UserGoal>(&format!(
            "{USER_GOAL_JOIN} WHERE ug.user_id = $1 AND ug.goal_id = $2"
        ))
        .bind(request.user_id)
        .bind(request.goal_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(updated)
    }

    pub async fn delete_user_goal(&self, user_id: i64, goal_id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM user_goals WHERE user_id = $1 AND goal_id = $2")
            .bind(user_id)
            .bind(goal_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
