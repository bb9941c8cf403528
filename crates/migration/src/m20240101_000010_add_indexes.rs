//! Listing indexes: sort order for ordered collections, creation time for blog.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_project::Project;
use crate::m20240101_000002_create_skill::Skill;
use crate::m20240101_000003_create_experience::Experience;
use crate::m20240101_000004_create_service::Service;
use crate::m20240101_000005_create_testimonial::Testimonial;
use crate::m20240101_000006_create_blog_post::BlogPost;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(Index::create().if_not_exists().name("idx_project_sort").table(Project::Table).col(Project::SortOrder).to_owned())
            .await?;
        manager
            .create_index(Index::create().if_not_exists().name("idx_skill_sort").table(Skill::Table).col(Skill::SortOrder).to_owned())
            .await?;
        manager
            .create_index(Index::create().if_not_exists().name("idx_experience_sort").table(Experience::Table).col(Experience::SortOrder).to_owned())
            .await?;
        manager
            .create_index(Index::create().if_not_exists().name("idx_service_sort").table(Service::Table).col(Service::SortOrder).to_owned())
            .await?;
        manager
            .create_index(Index::create().if_not_exists().name("idx_testimonial_sort").table(Testimonial::Table).col(Testimonial::SortOrder).to_owned())
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_blog_post_published_created")
                    .table(BlogPost::Table)
                    .col(BlogPost::Published)
                    .col(BlogPost::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_project_sort").table(Project::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_skill_sort").table(Skill::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_experience_sort").table(Experience::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_service_sort").table(Service::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_testimonial_sort").table(Testimonial::Table).to_owned()).await?;
        manager
            .drop_index(Index::drop().name("idx_blog_post_published_created").table(BlogPost::Table).to_owned())
            .await
    }
}
