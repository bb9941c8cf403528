//! Create `skill` table. `icon` holds a `SkillIcon` string value.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .if_not_exists()
                    .col(uuid(Skill::Id).primary_key())
                    .col(string_len(Skill::Name, 100).not_null())
                    .col(string_len(Skill::Icon, 32).not_null())
                    .col(string_len(Skill::Category, 64).not_null())
                    .col(integer(Skill::Level).not_null())
                    .col(integer(Skill::SortOrder).not_null())
                    .col(integer(Skill::Version).not_null())
                    .col(timestamp_with_time_zone(Skill::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Skill::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Skill::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Skill {
    Table,
    Id,
    Name,
    Icon,
    Category,
    Level,
    SortOrder,
    Version,
    CreatedAt,
    UpdatedAt,
}
