use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{
    display_name, DashboardProfile, DashboardStats, DashboardSummary, RecentWorkout,
    UserAchievement, UserGoal,
};

/// Composes the per-user summary payload out of separate aggregation
/// queries: headline counters, the three most recent sessions with rolled-up
/// exercise stats, the three active goals closest to completion, and the
/// three most recently earned badges.
pub struct DashboardService {
    db: PgPool,
}

impl DashboardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn summary(&self, user_id: i64) -> Result<DashboardSummary, ApiError> {
        let workout_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM workout_sessions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        let goal_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM user_goals WHERE user_id = $1 AND status = 'active'",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        let achievement_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM user_achievements WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        let total_calories = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(wse.calories_burned), 0)
             FROM workout_session_exercises wse
             JOIN workout_sessions ws ON wse.session_id = ws.id
             WHERE ws.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        let week_workouts = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM workout_sessions
             WHERE user_id = $1 AND session_date >= CURRENT_DATE - 7",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        let recent_workouts = sqlx::query_as::<_, RecentWorkout>(
            "SELECT ws.id, ws.session_date, ws.notes, ws.created_at,
                COUNT(wse.exercise_type_id) AS exercise_count,
                COALESCE(SUM(wse.calories_burned), 0) AS total_calories
             FROM workout_sessions ws
             LEFT JOIN workout_session_exercises wse ON ws.id = wse.session_id
             WHERE ws.user_id = $1
             GROUP BY ws.id
             ORDER BY ws.session_date DESC
             LIMIT 3",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let active_goals = sqlx::query_as::<_, UserGoal>(
            "SELECT ug.user_id, ug.goal_id, ug.target_value, ug.current_value,
                ug.status, ug.created_at, ug.updated_at, g.title, g.description
             FROM user_goals ug
             JOIN goals g ON ug.goal_id = g.id
             WHERE ug.user_id = $1 AND ug.status = 'active'
             ORDER BY (ug.current_value / NULLIF(ug.target_value, 0)) DESC NULLS LAST
             LIMIT 3",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let recent_achievements = sqlx::query_as::<_, UserAchievement>(
            "SELECT ua.user_id, ua.achievement_id, ua.created_at, ua.updated_at,
                a.code, a.title, a.description
             FROM user_achievements ua
             JOIN achievements a ON ua.achievement_id = a.id
             WHERE ua.user_id = $1
             ORDER BY ua.created_at DESC
             LIMIT 3",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let profile = sqlx::query_as::<_, DashboardProfile>(
            "SELECT u.first_name, u.last_name, a.fitness_level
             FROM users u
             LEFT JOIN athletes a ON u.id = a.id
             WHERE u.id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        let stats = DashboardStats {
            workout_count,
            goal_count,
            achievement_count,
            total_calories,
            week_workouts,
        };

        Ok(assemble(
            stats,
            recent_workouts,
            active_goals,
            recent_achievements,
            profile,
        ))
    }
}

/// Shape the query results into the response payload, filling in the
/// defaults for a user without a profile row.
fn assemble(
    stats: DashboardStats,
    recent_workouts: Vec<RecentWorkout>,
    active_goals: Vec<UserGoal>,
    recent_achievements: Vec<UserAchievement>,
    profile: Option<DashboardProfile>,
) -> DashboardSummary {
    let (user_name, user_full_name, fitness_level) = match profile {
        Some(profile) => {
            let full = display_name(profile.first_name.as_deref(), profile.last_name.as_deref());
            let first = profile.first_name.unwrap_or_else(|| "User".to_string());
            let level = profile.fitness_level.unwrap_or_else(|| "Beginner".to_string());
            (first, full, level)
        }
        None => (
            "User".to_string(),
            "User".to_string(),
            "Beginner".to_string(),
        ),
    };

    DashboardSummary {
        stats,
        recent_workouts,
        active_goals,
        recent_achievements,
        user_name,
        user_full_name,
        fitness_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    fn recent(id: i64, date: NaiveDate, exercise_count: i64, total_calories: i64) -> RecentWorkout {
        RecentWorkout {
            id,
            session_date: date,
            notes: None,
            created_at: Utc::now(),
            exercise_count,
            total_calories,
        }
    }

    // Fixture from the summary contract: two sessions of 3 and 2 exercises
    // burning 100+80+50 and 150+80 calories.
    #[test]
    fn summary_reports_fixture_counts_and_calories() {
        let sessions = vec![
            recent(2, NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(), 2, 150 + 80),
            recent(1, NaiveDate::from_ymd_opt(2026, 8, 18).unwrap(), 3, 100 + 80 + 50),
        ];
        let per_session_total: i64 = sessions.iter().map(|s| s.total_calories).sum();
        let stats = DashboardStats {
            workout_count: sessions.len() as i64,
            goal_count: 0,
            achievement_count: 0,
            total_calories: per_session_total,
            week_workouts: 0,
        };

        let summary = assemble(stats, sessions, vec![], vec![], None);

        assert_eq!(summary.stats.workout_count, 2);
        assert_eq!(summary.stats.total_calories, 460);
        assert_eq!(summary.recent_workouts[0].exercise_count, 2);
        assert_eq!(summary.recent_workouts[1].exercise_count, 3);
    }

    #[test]
    fn profile_names_fill_the_payload() {
        let profile = DashboardProfile {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            fitness_level: Some("Advanced".to_string()),
        };

        let summary = assemble(DashboardStats::default(), vec![], vec![], vec![], Some(profile));

        assert_eq!(summary.user_name, "Ada");
        assert_eq!(summary.user_full_name, "Ada Lovelace");
        assert_eq!(summary.fitness_level, "Advanced");
    }

    #[test]
    fn last_name_alone_still_yields_a_full_name() {
        let profile = DashboardProfile {
            first_name: None,
            last_name: Some("Lovelace".to_string()),
            fitness_level: None,
        };

        let summary = assemble(DashboardStats::default(), vec![], vec![], vec![], Some(profile));

        assert_eq!(summary.user_name, "User");
        assert_eq!(summary.user_full_name, "Lovelace");
        assert_eq!(summary.fitness_level, "Beginner");
    }

    #[test]
    fn missing_profile_defaults_match_the_fallback() {
        let summary = assemble(DashboardStats::default(), vec![], vec![], vec![], None);

        assert_eq!(summary.user_name, "User");
        assert_eq!(summary.user_full_name, "User");
        assert_eq!(summary.fitness_level, "Beginner");
    }
}
