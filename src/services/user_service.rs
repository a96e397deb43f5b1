use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::models::{Athlete, Trainer, UpdateAthlete, UpdateUser, User, UserWithRoles};

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, phone, \
     date_of_birth, gender, created_at, updated_at";

pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch a user together with their optional athlete/trainer extensions.
    pub async fn get_user_with_roles(&self, user_id: i64) -> Result<Option<UserWithRoles>, ApiError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let athlete = sqlx::query_as::<_, Athlete>(
            "SELECT id, fitness_level FROM athletes WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        let trainer = sqlx::query_as::<_, Trainer>(
            "SELECT id, specialty, location, bio FROM trainers WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(Some(UserWithRoles {
            user,
            athlete,
            trainer,
        }))
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update: UpdateUser,
    ) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                phone = COALESCE($4, phone),
                date_of_birth = COALESCE($5, date_of_birth),
                gender = COALESCE($6, gender),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.phone)
        .bind(update.date_of_birth)
        .bind(update.gender)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    /// Delete a user. The schema cascades to athlete/trainer rows, workout
    /// sessions and their exercises, goals, achievements and connections.
    pub async fn delete_user(&self, user_id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn get_athlete(&self, athlete_id: i64) -> Result<Option<Athlete>, ApiError> {
        let athlete = sqlx::query_as::<_, Athlete>(
            "SELECT id, fitness_level FROM athletes WHERE id = $1",
        )
        .bind(athlete_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(athlete)
    }

    pub async fn update_athlete(
        &self,
        athlete_id: i64,
        update: UpdateAthlete,
    ) -> Result<Option<Athlete>, ApiError> {
        let athlete = sqlx::query_as::<_, Athlete>(
            "UPDATE athletes SET fitness_level = COALESCE($2, fitness_level)
             WHERE id = $1
             RETURNING id, fitness_level",
        )
        .bind(athlete_id)
        .bind(update.fitness_level)
        .fetch_optional(&self.db)
        .await?;

        Ok(athlete)
    }
}
