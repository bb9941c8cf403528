//! Migrator registering one table per content collection plus the admin
//! credential table. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_project;
mod m20240101_000002_create_skill;
mod m20240101_000003_create_experience;
mod m20240101_000004_create_service;
mod m20240101_000005_create_testimonial;
mod m20240101_000006_create_blog_post;
mod m20240101_000007_create_admin;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_project::Migration),
            Box::new(m20240101_000002_create_skill::Migration),
            Box::new(m20240101_000003_create_experience::Migration),
            Box::new(m20240101_000004_create_service::Migration),
            Box::new(m20240101_000005_create_testimonial::Migration),
            Box::new(m20240101_000006_create_blog_post::Migration),
            Box::new(m20240101_000007_create_admin::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
