pub use sea_orm_migration::prelude::*;

mod m20250610_090000_create_users_table;
mod m20250610_090100_create_match_requests_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_090000_create_users_table::Migration),
            Box::new(m20250610_090100_create_match_requests_table::Migration),
        ]
    }
}
