//! Create `testimonial` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(uuid(Testimonial::Id).primary_key())
                    .col(string_len(Testimonial::Name, 200).not_null())
                    .col(string_len(Testimonial::Role, 200).not_null())
                    .col(string_len(Testimonial::Company, 200).not_null())
                    .col(text(Testimonial::Content).not_null())
                    .col(integer(Testimonial::Rating).not_null())
                    .col(string_len_null(Testimonial::ImageUrl, 512))
                    .col(integer(Testimonial::SortOrder).not_null())
                    .col(integer(Testimonial::Version).not_null())
                    .col(timestamp_with_time_zone(Testimonial::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Testimonial::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Testimonial::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Testimonial {
    Table,
    Id,
    Name,
    Role,
    Company,
    Content,
    Rating,
    ImageUrl,
    SortOrder,
    Version,
    CreatedAt,
    UpdatedAt,
}
