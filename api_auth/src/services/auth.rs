use common::{
    error::{AppError, Res},
    password,
};
use db::models::user::User;
use sqlx::PgPool;

use crate::dtos::auth::LoginRequest;

/// Authenticates an existing user.
/// Unknown email returns 400, a wrong password returns 401.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let record = db::user::get_user_with_password_hash(pool, &login_data.email.to_lowercase())
        .await?
        .ok_or_else(|| AppError::BadRequest("User with this email does not exist".to_string()))?;

    if password::verify_password(&login_data.password, &record.password_hash) {
        Ok(record.user)
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}
