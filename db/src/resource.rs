use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    dtos::resource::{ResourceCreate, ResourceFilter, ResourceUpdate},
    models::resource::Resource,
};

/// Free-resource catalog. Premium rows are excluded here unconditionally;
/// the public list endpoint must never expose them.
pub async fn list_public<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    filter: &ResourceFilter,
) -> Res<Vec<Resource>> {
    sqlx::query_as::<_, Resource>(
        r#"
        SELECT * FROM resources
        WHERE is_premium = FALSE
          AND ($1::text IS NULL OR level = $1)
          AND ($2::text IS NULL OR subject ILIKE '%' || $2 || '%')
        ORDER BY created_at DESC
        "#,
    )
    .bind(&filter.level)
    .bind(&filter.subject)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_resource<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ResourceCreate,
) -> Res<Resource> {
    sqlx::query_as::<_, Resource>(
        r#"
        INSERT INTO resources (title, description, level, subject, file_url, file_type, is_premium, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(data.title)
    .bind(data.description)
    .bind(data.level)
    .bind(data.subject)
    .bind(data.file_url)
    .bind(data.file_type)
    .bind(data.is_premium)
    .bind(data.created_by)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_resource<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    resource_id: Uuid,
    data: ResourceUpdate,
) -> Res<Option<Resource>> {
    sqlx::query_as::<_, Resource>(
        r#"
        UPDATE resources
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            level = COALESCE($4, level),
            subject = COALESCE($5, subject),
            file_url = COALESCE($6, file_url),
            file_type = COALESCE($7, file_type),
            is_premium = COALESCE($8, is_premium),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(resource_id)
    .bind(data.title)
    .bind(data.description)
    .bind(data.level)
    .bind(data.subject)
    .bind(data.file_url)
    .bind(data.file_type)
    .bind(data.is_premium)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}

pub async fn delete_resource<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    resource_id: Uuid,
) -> Res<bool> {
    sqlx::query("DELETE FROM resources WHERE id = $1")
        .bind(resource_id)
        .execute(executor)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(AppError::from)
}

/// Bumps the download counter by exactly one and returns the updated row.
pub async fn increment_download<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    resource_id: Uuid,
) -> Res<Option<Resource>> {
    sqlx::query_as::<_, Resource>(
        "UPDATE resources SET download_count = download_count + 1, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(resource_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
