//! Create `blog_post` table with a unique slug.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(uuid(BlogPost::Id).primary_key())
                    .col(string_len(BlogPost::Title, 200).not_null())
                    .col(string_len(BlogPost::Slug, 200).unique_key().not_null())
                    .col(text(BlogPost::Excerpt).not_null())
                    .col(string_len_null(BlogPost::CoverImage, 512))
                    .col(boolean(BlogPost::Published).not_null())
                    .col(json(BlogPost::Tags).not_null())
                    .col(integer(BlogPost::Version).not_null())
                    .col(timestamp_with_time_zone(BlogPost::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BlogPost::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BlogPost::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum BlogPost {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    CoverImage,
    Published,
    Tags,
    Version,
    CreatedAt,
    UpdatedAt,
}
