use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Minimal identity returned on login/signup.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: i64,
    pub first_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: SessionUser,
}

/// Identity shape returned by GET /api/auth/me.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MeUser {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// /me never errors: `user` is null when no valid session exists.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Option<MeUser>,
}
