use common::domain::Role;
use db::models::user::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin user provisioning (tutor onboarding).
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub bio: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub subjects: Option<Vec<String>>,
    pub hourly_rate: Option<f64>,
    pub bio: Option<String>,
    pub verified: Option<bool>,
}

/// What the public tutor catalog exposes about a tutor.
#[derive(Debug, Serialize)]
pub struct TutorSummary {
    pub id: Uuid,
    pub name: String,
    pub subjects: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub bio: Option<String>,
    pub verified: bool,
}

impl From<User> for TutorSummary {
    fn from(user: User) -> Self {
        TutorSummary {
            id: user.id,
            name: user.name,
            subjects: user.subjects,
            hourly_rate: user.hourly_rate,
            bio: user.bio,
            verified: user.verified,
        }
    }
}
