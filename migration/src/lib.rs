pub use sea_orm_migration::prelude::*;

mod m20250416_000001_character;
mod m20250416_000002_character_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250416_000001_character::Migration),
            Box::new(m20250416_000002_character_indexes::Migration),
        ]
    }
}
