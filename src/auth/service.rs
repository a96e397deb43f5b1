use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::api::error::ApiError;
use crate::auth::models::{LoginRequest, MeUser, SessionUser, SignupRequest};

const DEFAULT_FITNESS_LEVEL: &str = "Beginner";

#[derive(Debug, Clone)]
pub struct AuthService {
    db: PgPool,
}

impl AuthService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a new user account plus its companion athlete row.
    ///
    /// Both inserts run in one transaction so a failure cannot leave an
    /// orphan user without an athlete record.
    pub async fn signup(&self, request: SignupRequest) -> Result<SessionUser, ApiError> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(ApiError::bad_request("email and password are required"));
        }

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = $1")
            .bind(&request.email)
            .fetch_optional(&self.db)
            .await?;

        if existing.is_some() {
            return Err(ApiError::bad_request("Email already registered"));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)?;

        let mut tx = self.db.begin().await?;

        let user_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (email, password_hash, first_name, last_name)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&request.email)
        .bind(&password_hash)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO athletes (id, fitness_level) VALUES ($1, $2)")
            .bind(user_id)
            .bind(DEFAULT_FITNESS_LEVEL)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(user_id, "new account created");

        Ok(SessionUser {
            id: user_id,
            first_name: request.first_name,
        })
    }

    /// Verify credentials against the stored bcrypt hash.
    pub async fn login(&self, request: LoginRequest) -> Result<SessionUser, ApiError> {
        let row = sqlx::query_as::<_, (i64, String, Option<String>)>(
            "SELECT id, password_hash, first_name FROM users WHERE email = $1",
        )
        .bind(&request.email)
        .fetch_optional(&self.db)
        .await?;

        // Unknown email and wrong password are indistinguishable to the client.
        let (id, password_hash, first_name) = row.ok_or(ApiError::InvalidCredentials)?;

        if !verify(&request.password, &password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }

        Ok(SessionUser { id, first_name })
    }

    /// Resolve the session cookie's user id. Absent rows map to None rather
    /// than an error; /me reports a null user for stale sessions.
    pub async fn current_user(&self, user_id: i64) -> Result<Option<MeUser>, ApiError> {
        let user = sqlx::query_as::<_, MeUser>(
            "SELECT id, email, first_name, last_name FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }
}
