//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_stylists;
mod m20240601_000003_create_services;
mod m20240601_000004_create_images;
mod m20240601_000005_create_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_stylists::Migration),
            Box::new(m20240601_000003_create_services::Migration),
            Box::new(m20240601_000004_create_images::Migration),
            Box::new(m20240601_000005_create_reviews::Migration),
        ]
    }
}
