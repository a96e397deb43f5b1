use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display name built from optional name parts; falls back to "User" when
/// both are absent. Shared by the dashboard and anywhere a user is shown.
pub fn display_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    match (first_name, last_name) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (Some(first), None) => first.to_string(),
        (None, Some(last)) => last.to_string(),
        (None, None) => "User".to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Athlete {
    pub id: i64,
    pub fitness_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAthlete {
    pub fitness_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trainer {
    pub id: i64,
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
}

/// Trainer row joined with the owning user's identity fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainerWithUser {
    pub id: i64,
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
}

/// A user with their optional role extensions, as returned by GET /users/:id.
#[derive(Debug, Serialize)]
pub struct UserWithRoles {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<Athlete>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<Trainer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_covers_every_name_combination() {
        assert_eq!(display_name(Some("Ada"), Some("Lovelace")), "Ada Lovelace");
        assert_eq!(display_name(Some("Ada"), None), "Ada");
        assert_eq!(display_name(None, Some("Lovelace")), "Lovelace");
        assert_eq!(display_name(None, None), "User");
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 7,
            email: "a@example.com".to_string(),
            password_hash: "secret".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            phone: None,
            date_of_birth: None,
            gender: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@example.com");
    }
}
