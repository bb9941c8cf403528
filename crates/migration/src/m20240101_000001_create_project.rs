//! Create `project` table.
//! Technologies are stored as a JSON array column.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(uuid(Project::Id).primary_key())
                    .col(string_len(Project::Title, 200).not_null())
                    .col(text(Project::Description).not_null())
                    .col(json(Project::Technologies).not_null())
                    .col(string_len_null(Project::LiveUrl, 512))
                    .col(string_len_null(Project::GithubUrl, 512))
                    .col(string_len_null(Project::ImageUrl, 512))
                    .col(boolean(Project::Featured).not_null())
                    .col(integer(Project::SortOrder).not_null())
                    .col(integer(Project::Version).not_null())
                    .col(timestamp_with_time_zone(Project::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Project::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Project::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Project {
    Table,
    Id,
    Title,
    Description,
    Technologies,
    LiveUrl,
    GithubUrl,
    ImageUrl,
    Featured,
    SortOrder,
    Version,
    CreatedAt,
    UpdatedAt,
}
