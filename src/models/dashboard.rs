use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::{UserAchievement, UserGoal};

/// Headline counters shown at the top of the dashboard.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub workout_count: i64,
    pub goal_count: i64,
    pub achievement_count: i64,
    pub total_calories: i64,
    pub week_workouts: i64,
}

/// A recent session with its exercise count and calorie sum rolled up.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecentWorkout {
    pub id: i64,
    pub session_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub exercise_count: i64,
    pub total_calories: i64,
}

/// Name and fitness level of the requesting user.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub fitness_level: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_workouts: Vec<RecentWorkout>,
    pub active_goals: Vec<UserGoal>,
    pub recent_achievements: Vec<UserAchievement>,
    pub user_name: String,
    pub user_full_name: String,
    pub fitness_level: String,
}

impl DashboardSummary {
    /// Zeroed payload served when any aggregation query fails. The client
    /// renders an empty dashboard instead of an error page.
    pub fn fallback() -> Self {
        Self {
            stats: DashboardStats::default(),
            recent_workouts: Vec::new(),
            active_goals: Vec::new(),
            recent_achievements: Vec::new(),
            user_name: "User".to_string(),
            user_full_name: "User".to_string(),
            fitness_level: "Beginner".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_payload_is_zeroed_and_empty() {
        let summary = DashboardSummary::fallback();
        assert_eq!(summary.stats.workout_count, 0);
        assert_eq!(summary.stats.total_calories, 0);
        assert!(summary.recent_workouts.is_empty());
        assert!(summary.active_goals.is_empty());
        assert!(summary.recent_achievements.is_empty());
        assert_eq!(summary.user_name, "User");
        assert_eq!(summary.fitness_level, "Beginner");
    }

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(DashboardSummary::fallback()).unwrap();
        assert!(json["stats"]["workoutCount"].is_i64());
        assert!(json["stats"]["totalCalories"].is_i64());
        assert!(json["stats"]["weekWorkouts"].is_i64());
        assert!(json["recentWorkouts"].is_array());
        assert!(json["activeGoals"].is_array());
        assert!(json["recentAchievements"].is_array());
        assert_eq!(json["userName"], "User");
        assert_eq!(json["fitnessLevel"], "Beginner");
    }
}
