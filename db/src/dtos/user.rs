use common::domain::Role;

pub struct UserCreate {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub subjects: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub bio: Option<String>,
    pub verified: bool,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub subjects: Option<Vec<String>>,
    pub hourly_rate: Option<f64>,
    pub bio: Option<String>,
    pub verified: Option<bool>,
}
