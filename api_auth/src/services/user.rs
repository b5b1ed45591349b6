use common::{
    domain::Role,
    error::{AppError, Res},
    password,
};
use db::{
    dtos::user::{UserCreate, UserUpdate},
    models::user::User,
};
use sqlx::PgPool;

use crate::dtos::auth::RegisterRequest;
use crate::dtos::user::{CreateUserRequest, UpdateUserRequest};

/// Self-service registration; always creates a student account.
pub async fn register_student(pool: &PgPool, req: &RegisterRequest) -> Res<User> {
    validate_credentials(&req.email, &req.password)?;
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Please provide a name".to_string()));
    }

    let email = req.email.to_lowercase();
    if db::user::exists_user_by_email(pool, &email).await? {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;
    db::user::insert_user(
        pool,
        UserCreate {
            email,
            password_hash,
            name: req.name.clone(),
            phone: req.phone.clone(),
            role: Role::Student,
            subjects: Vec::new(),
            hourly_rate: None,
            bio: None,
            verified: false,
        },
    )
    .await
}

/// Admin provisioning with an explicit role (tutor onboarding).
pub async fn create_user(pool: &PgPool, req: &CreateUserRequest) -> Res<User> {
    validate_credentials(&req.email, &req.password)?;

    let email = req.email.to_lowercase();
    if db::user::exists_user_by_email(pool, &email).await? {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;
    db::user::insert_user(
        pool,
        UserCreate {
            email,
            password_hash,
            name: req.name.clone(),
            phone: req.phone.clone(),
            role: req.role,
            subjects: req.subjects.clone(),
            hourly_rate: req.hourly_rate,
            bio: req.bio.clone(),
            verified: req.verified,
        },
    )
    .await
}

pub async fn update_user(
    pool: &PgPool,
    user_id: uuid::Uuid,
    req: &UpdateUserRequest,
) -> Res<Option<User>> {
    db::user::update_user(
        pool,
        user_id,
        UserUpdate {
            name: req.name.clone(),
            phone: req.phone.clone(),
            role: req.role,
            subjects: req.subjects.clone(),
            hourly_rate: req.hourly_rate,
            bio: req.bio.clone(),
            verified: req.verified,
        },
    )
    .await
}

fn validate_credentials(email: &str, password: &str) -> Res<()> {
    if !email.contains('@') {
        return Err(AppError::BadRequest(
            "Please provide a valid email".to_string(),
        ));
    }
    if password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_email_shape_and_password_length() {
        assert!(validate_credentials("student@example.com", "longenough").is_ok());
        assert!(validate_credentials("not-an-email", "longenough").is_err());
        assert!(validate_credentials("student@example.com", "short").is_err());
    }
}
