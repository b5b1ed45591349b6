use actix_web::{Responder, delete, get, post, put, web};
use api_auth::RequireAdmin;
use common::error::{AppError, Res};
use common::http::Success;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::dtos::resource::{CreateResourceRequest, ResourceListQuery, UpdateResourceRequest};
use crate::services;

/// Public learning-resource catalog.
///
/// Premium resources are excluded here unconditionally, whatever filters the
/// caller passes; they are only reachable through authenticated surfaces.
///
/// # Input
/// - `level`: optional exact level filter (KS3, GCSE, A-Level, All)
/// - `subject`: optional case-insensitive subject substring
///
/// # Output
/// - Success: `{ success, count, data: [resource, ...] }`, newest first
#[get("")]
async fn get_resources(
    query: web::Query<ResourceListQuery>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let resources = services::resource::list_public(pg_pool, &query.into_inner()).await?;
    let count = resources.len();
    Success::ok_with_count(resources, count)
}

/// Adds a resource to the catalog. Admin only.
#[post("")]
async fn post_resource(
    admin: RequireAdmin,
    req: web::Json<CreateResourceRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let resource =
        services::resource::create_resource(pg_pool, admin.0.user_id, &req.into_inner()).await?;
    Success::created(resource)
}

/// Partial update of a resource. Admin only.
#[put("/{id}")]
async fn put_resource(
    _admin: RequireAdmin,
    path: web::Path<Uuid>,
    req: web::Json<UpdateResourceRequest>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let resource =
        services::resource::update_resource(pg_pool, path.into_inner(), &req.into_inner())
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;
    Success::ok(resource)
}

/// Removes a resource. Admin only.
#[delete("/{id}")]
async fn delete_resource(
    _admin: RequireAdmin,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let deleted = db::resource::delete_resource(pg_pool, path.into_inner()).await?;
    if !deleted {
        return Err(AppError::NotFound("Resource not found".to_string()));
    }
    Success::ok(serde_json::json!({}))
}

/// Download tracking: bumps the counter by one and returns the updated row.
/// Public, like the downloads themselves.
#[post("/{id}/download")]
async fn post_download(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<sqlx::PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let resource = db::resource::increment_download(pg_pool, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;
    Success::ok(resource)
}
