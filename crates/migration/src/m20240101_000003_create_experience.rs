//! Create `experience` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(uuid(Experience::Id).primary_key())
                    .col(string_len(Experience::Title, 200).not_null())
                    .col(string_len(Experience::Company, 200).not_null())
                    .col(string_len(Experience::Location, 200).not_null())
                    .col(date(Experience::StartDate).not_null())
                    .col(date_null(Experience::EndDate))
                    .col(boolean(Experience::Current).not_null())
                    .col(text(Experience::Description).not_null())
                    .col(integer(Experience::SortOrder).not_null())
                    .col(integer(Experience::Version).not_null())
                    .col(timestamp_with_time_zone(Experience::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Experience::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Experience::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Experience {
    Table,
    Id,
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
    Current,
    Description,
    SortOrder,
    Version,
    CreatedAt,
    UpdatedAt,
}
