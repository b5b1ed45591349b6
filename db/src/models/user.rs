use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A platform account. The credential hash is kept out of this struct so it
/// can never leak through a serialized response; queries that need it return
/// [`UserWithCredentials`].
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: String,
    pub subjects: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub bio: Option<String>,
    pub verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserWithCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}
