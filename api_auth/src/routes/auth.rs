use actix_web::{Responder, get, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::middleware::auth::AuthedUser;
use crate::services;

/// Registers a new student account with email and password.
///
/// # Input
/// - `req`: JSON payload containing registration information (email, password, name, optional phone)
/// - `pool`: Database connection pool
/// - `config`: Application configuration for JWT generation
///
/// # Output
/// - Success: Returns 201 Created with `{ token, user }`
/// - Error: Returns 400 Bad Request if the email already exists or the fields are invalid
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/register', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({
///     email: 'student@example.com',
///     password: 'securepassword',
///     name: 'Jamie Smith'
///   })
/// });
///
/// if (response.ok) {
///   const { data } = await response.json();
///   localStorage.setItem('authToken', data.token);
/// }
/// ```
#[post("/register")]
async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::user::register_student(pg_pool, &req.into_inner()).await?;
    let role = common::domain::Role::parse(&user.role)
        .ok_or_else(|| AppError::Internal(format!("Unknown role on record: {}", user.role)))?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role,
        },
        &config.jwt_config,
    )?;
    Success::created(AuthResponse { token, user })
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns `{ token, user }` inside the response envelope
/// - Error: Returns 400 for an unknown email, 401 for a wrong password
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data.into_inner()).await?;
    let role = common::domain::Role::parse(&user.role)
        .ok_or_else(|| AppError::Internal(format!("Unknown role on record: {}", user.role)))?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            role,
        },
        &config.jwt_config,
    )?;
    Success::ok(AuthResponse { token, user })
}

/// Returns the authenticated caller's own account record.
#[get("/me")]
async fn get_me(auth: AuthedUser, pool: web::Data<Arc<sqlx::PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = db::user::get_user_by_id(pg_pool, auth.0.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Success::ok(user)
}
