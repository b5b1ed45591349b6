use common::error::Res;
use db::{
    dtos::resource::{ResourceCreate, ResourceFilter, ResourceUpdate},
    models::resource::Resource,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::resource::{CreateResourceRequest, ResourceListQuery, UpdateResourceRequest};

/// Public catalog: free resources only, optionally narrowed by level and a
/// case-insensitive subject fragment.
pub async fn list_public(pool: &PgPool, query: &ResourceListQuery) -> Res<Vec<Resource>> {
    db::resource::list_public(
        pool,
        &ResourceFilter {
            level: query.level.clone().filter(|level| !level.is_empty()),
            subject: query.subject.clone().filter(|subject| !subject.is_empty()),
        },
    )
    .await
}

pub async fn create_resource(
    pool: &PgPool,
    created_by: Uuid,
    req: &CreateResourceRequest,
) -> Res<Resource> {
    db::resource::insert_resource(
        pool,
        ResourceCreate {
            title: req.title.clone(),
            description: req.description.clone(),
            level: req.level.as_str().to_string(),
            subject: req.subject.clone(),
            file_url: req.file_url.clone(),
            file_type: req.file_type.as_str().to_string(),
            is_premium: req.is_premium,
            created_by: Some(created_by),
        },
    )
    .await
}

pub async fn update_resource(
    pool: &PgPool,
    resource_id: Uuid,
    req: &UpdateResourceRequest,
) -> Res<Option<Resource>> {
    db::resource::update_resource(
        pool,
        resource_id,
        ResourceUpdate {
            title: req.title.clone(),
            description: req.description.clone(),
            level: req.level.map(|level| level.as_str().to_string()),
            subject: req.subject.clone(),
            file_url: req.file_url.clone(),
            file_type: req.file_type.map(|file_type| file_type.as_str().to_string()),
            is_premium: req.is_premium,
        },
    )
    .await
}
