use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Progress status of a user's goal instance. Stored as TEXT.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(GoalStatus::Active),
            "completed" => Some(GoalStatus::Completed),
            _ => None,
        }
    }
}

/// A user's goal instance joined with the catalog title and description.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserGoal {
    pub user_id: i64,
    pub goal_id: i64,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserGoal {
    pub user_id: i64,
    pub goal_id: i64,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub status: Option<GoalStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserGoal {
    pub user_id: i64,
    pub goal_id: i64,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub status: Option<GoalStatus>,
}

/// A goal completes once its current value reaches the target. Updates carry
/// only the fields being changed, so the decision is made on the effective
/// values after coalescing against the stored row.
pub fn resolve_status(
    current_value: Option<f64>,
    target_value: Option<f64>,
    requested: GoalStatus,
) -> GoalStatus {
    match (current_value, target_value) {
        (Some(current), Some(target)) if current >= target => GoalStatus::Completed,
        _ => requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_completes_when_current_reaches_target() {
        assert_eq!(
            resolve_status(Some(10.0), Some(10.0), GoalStatus::Active),
            GoalStatus::Completed
        );
        assert_eq!(
            resolve_status(Some(12.5), Some(10.0), GoalStatus::Active),
            GoalStatus::Completed
        );
    }

    #[test]
    fn status_stays_active_below_target() {
        assert_eq!(
            resolve_status(Some(9.9), Some(10.0), GoalStatus::Active),
            GoalStatus::Active
        );
    }

    #[test]
    fn status_unchanged_without_target() {
        assert_eq!(
            resolve_status(Some(50.0), None, GoalStatus::Active),
            GoalStatus::Active
        );
        assert_eq!(
            resolve_status(None, Some(10.0), GoalStatus::Active),
            GoalStatus::Active
        );
    }

    #[test]
    fn explicit_completed_request_is_kept() {
        assert_eq!(
            resolve_status(Some(1.0), Some(10.0), GoalStatus::Completed),
            GoalStatus::Completed
        );
    }

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!(GoalStatus::from_str("active"), Some(GoalStatus::Active));
        assert_eq!(GoalStatus::from_str("completed"), Some(GoalStatus::Completed));
        assert_eq!(GoalStatus::from_str("paused"), None);
        assert_eq!(GoalStatus::Completed.as_str(), "completed");
    }
}
