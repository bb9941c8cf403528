//! Per-collection CRUD behind one trait so the HTTP layer can stay generic.

use async_trait::async_trait;
use common::Collection;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{blog_post, experience, offering, project, skill, testimonial};

use crate::errors::ServiceError;

/// Read options for `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScope {
    /// Blog only: include unpublished posts.
    pub include_drafts: bool,
}

#[async_trait]
pub trait ContentResource: Send + Sync + 'static {
    const COLLECTION: Collection;

    type Record: Serialize + Send + Sync + 'static;
    type Input: DeserializeOwned + Send + 'static;
    type Patch: DeserializeOwned + Send + 'static;

    fn record_id(record: &Self::Record) -> Uuid;

    async fn list(db: &DatabaseConnection, scope: ListScope) -> Result<Vec<Self::Record>, ServiceError>;
    async fn create(db: &DatabaseConnection, input: Self::Input) -> Result<Self::Record, ServiceError>;
    async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        patch: Self::Patch,
        expected_version: Option<i32>,
    ) -> Result<Self::Record, ServiceError>;
    /// `false` when no row had that id.
    async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError>;
}

pub struct Projects;
pub struct Skills;
pub struct Experiences;
pub struct Services;
pub struct Testimonials;
pub struct Blog;

/// Each collection forwards to its model module; only the `list` call differs.
macro_rules! content_resource {
    ($resource:ident => $module:ident::{$input:ident, $patch:ident}, list($db:ident, $scope:pat) => $list:expr) => {
        #[async_trait]
        impl ContentResource for $resource {
            const COLLECTION: Collection = Collection::$resource;
            type Record = $module::Model;
            type Input = $module::$input;
            type Patch = $module::$patch;

            fn record_id(record: &Self::Record) -> Uuid {
                record.id
            }

            async fn list($db: &DatabaseConnection, $scope: ListScope) -> Result<Vec<Self::Record>, ServiceError> {
                Ok($list.await?)
            }

            async fn create(db: &DatabaseConnection, input: Self::Input) -> Result<Self::Record, ServiceError> {
                Ok($module::create(db, input).await?)
            }

            async fn update(
                db: &DatabaseConnection,
                id: Uuid,
                patch: Self::Patch,
                expected_version: Option<i32>,
            ) -> Result<Self::Record, ServiceError> {
                Ok($module::update(db, id, patch, expected_version).await?)
            }

            async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
                Ok($module::delete(db, id).await?)
            }
        }
    };
}

content_resource!(Projects => project::{NewProject, ProjectPatch}, list(db, _) => project::list(db));
content_resource!(Skills => skill::{NewSkill, SkillPatch}, list(db, _) => skill::list(db));
content_resource!(Experiences => experience::{NewExperience, ExperiencePatch}, list(db, _) => experience::list(db));
content_resource!(Services => offering::{NewService, ServicePatch}, list(db, _) => offering::list(db));
content_resource!(Testimonials => testimonial::{NewTestimonial, TestimonialPatch}, list(db, _) => testimonial::list(db));
content_resource!(Blog => blog_post::{NewBlogPost, BlogPostPatch}, list(db, scope) => blog_post::list(db, scope.include_drafts));

/// List a collection.
pub async fn list<R: ContentResource>(db: &DatabaseConnection, scope: ListScope) -> Result<Vec<R::Record>, ServiceError> {
    R::list(db, scope).await
}

/// Create a record and log its id.
#[instrument(skip(db, input), fields(collection = %R::COLLECTION))]
pub async fn create<R: ContentResource>(db: &DatabaseConnection, input: R::Input) -> Result<R::Record, ServiceError> {
    let record = R::create(db, input).await?;
    info!(id = %R::record_id(&record), "content_created");
    Ok(record)
}

/// Merge `patch` into record `id`; with `expected_version` the write is conditional.
#[instrument(skip(db, patch), fields(collection = %R::COLLECTION))]
pub async fn update<R: ContentResource>(
    db: &DatabaseConnection,
    id: Uuid,
    patch: R::Patch,
    expected_version: Option<i32>,
) -> Result<R::Record, ServiceError> {
    let record = R::update(db, id, patch, expected_version).await?;
    info!("content_updated");
    Ok(record)
}

/// Delete record `id`; a missing row is `NotFound`.
#[instrument(skip(db), fields(collection = %R::COLLECTION))]
pub async fn delete<R: ContentResource>(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    if !R::delete(db, id).await? {
        return Err(ServiceError::not_found(R::COLLECTION.singular()));
    }
    info!("content_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::icons::SkillIcon;

    #[tokio::test]
    async fn generic_crud_through_the_trait() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input: skill::NewSkill =
            serde_json::from_value(serde_json::json!({"name": "Go", "icon": "SiGo", "category": "Language", "level": 70}))?;
        let created = create::<Skills>(&db, input).await?;
        assert_eq!(created.icon, SkillIcon::Go);

        let patch: skill::SkillPatch = serde_json::from_value(serde_json::json!({"order": 4}))?;
        let updated = update::<Skills>(&db, created.id, patch, Some(created.version)).await?;
        assert_eq!(updated.sort_order, 4);

        delete::<Skills>(&db, created.id).await?;
        let again = delete::<Skills>(&db, created.id).await.unwrap_err();
        assert_eq!(again.to_string(), "skill not found");
        assert!(list::<Skills>(&db, ListScope::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn every_collection_lists_from_its_own_table() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input: testimonial::NewTestimonial =
            serde_json::from_value(serde_json::json!({"name": "Ada", "content": "Shipped on time."}))?;
        let created = create::<Testimonials>(&db, input).await?;
        assert_eq!(Testimonials::record_id(&created), created.id);

        let scope = ListScope::default();
        assert_eq!(list::<Testimonials>(&db, scope).await?.len(), 1);
        assert!(list::<Projects>(&db, scope).await?.is_empty());
        assert!(list::<Skills>(&db, scope).await?.is_empty());
        assert!(list::<Experiences>(&db, scope).await?.is_empty());
        assert!(list::<Services>(&db, scope).await?.is_empty());
        assert!(list::<Blog>(&db, scope).await?.is_empty());
        assert_eq!(Services::COLLECTION, Collection::Services);
        Ok(())
    }

    #[tokio::test]
    async fn blog_scope_controls_drafts() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let draft: blog_post::NewBlogPost =
            serde_json::from_value(serde_json::json!({"title": "Draft", "excerpt": "soon"}))?;
        create::<Blog>(&db, draft).await?;
        assert!(list::<Blog>(&db, ListScope::default()).await?.is_empty());
        assert_eq!(list::<Blog>(&db, ListScope { include_drafts: true }).await?.len(), 1);
        Ok(())
    }
}
