use actix_web::{Responder, delete, get, post, put, web};
use common::error::{AppError, Res};
use common::http::Success;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::dtos::user::{CreateUserRequest, TutorSummary, UpdateUserRequest};
use crate::middleware::auth::RequireAdmin;
use crate::services;

/// Public tutor catalog for the booking form.
///
/// # Output
/// - Success: `{ success, count, data: [{ id, name, subjects, hourly_rate, bio, verified }] }`
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/users/tutors');
/// const { data } = await response.json();
/// data.forEach(tutor => addTutorOption(tutor.id, tutor.name));
/// ```
#[get("/tutors")]
async fn get_tutors(pool: web::Data<Arc<sqlx::PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let tutors: Vec<TutorSummary> = db::user::list_tutors(pg_pool)
        .await?
        .into_iter()
        .map(TutorSummary::from)
        .collect();
    let count = tutors.len();
    Success::ok_with_count(tutors, count)
}

/// Lists every account. Admin only.
#[get("")]
async fn get_users(_admin: RequireAdmin, pool: web::Data<Arc<sqlx::PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let users = db::user::list_users(pg_pool).await?;
    let count = users.len();
    Success::ok_with_count(users, count)
}

/// Provisions an account with an explicit role (tutor onboarding). Admin only.
#[post("")]
async fn post_user(
    _admin: RequireAdmin,
    req: web::Json<CreateUserRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::user::create_user(pg_pool, &req.into_inner()).await?;
    Success::created(user)
}

/// Updates profile and tutor attributes, including the verification flag.
/// Admin only.
#[put("/{id}")]
async fn put_user(
    _admin: RequireAdmin,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::user::update_user(pg_pool, path.into_inner(), &req.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Success::ok(user)
}

/// Hard-deletes an account. Admin only; the only deletion path for users.
#[delete("/{id}")]
async fn delete_user(
    _admin: RequireAdmin,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let deleted = db::user::delete_user(pg_pool, path.into_inner()).await?;
    if !deleted {
        return Err(AppError::NotFound("User not found".to_string()));
    }
    Success::ok(serde_json::json!({}))
}
