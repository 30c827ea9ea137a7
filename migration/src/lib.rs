pub use sea_orm_migration::prelude::*;

mod m20260612_000001_create_users_table;
mod m20260612_000002_create_gigs_table;
mod m20260612_000003_create_applications_table;
mod m20260620_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260612_000001_create_users_table::Migration),
            Box::new(m20260612_000002_create_gigs_table::Migration),
            Box::new(m20260612_000003_create_applications_table::Migration),
            Box::new(m20260620_000001_add_indexes::Migration),
        ]
    }
}
