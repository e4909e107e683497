use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20250301_000001_create_users;
mod m20250301_000002_create_addresses;
mod m20250301_000003_create_telephones;
mod m20250301_000004_create_routes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_addresses::Migration),
            Box::new(m20250301_000003_create_telephones::Migration),
            Box::new(m20250301_000004_create_routes::Migration),
        ]
    }
}
