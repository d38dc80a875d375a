use sea_orm_migration::prelude::*;

use crate::m20250416_000001_character::Character;

static IDX_CHARACTER_NAME: &str = "idx-character-name";
static IDX_CHARACTER_STATUS: &str = "idx-character-status";
static IDX_CHARACTER_SPECIES: &str = "idx-character-species";
static IDX_CHARACTER_GENDER: &str = "idx-character-gender";
static IDX_CHARACTER_ORIGIN: &str = "idx-character-origin";

/// Columns the query surface filters on
const INDEXES: [(&str, Character); 5] = [
    (IDX_CHARACTER_NAME, Character::Name),
    (IDX_CHARACTER_STATUS, Character::Status),
    (IDX_CHARACTER_SPECIES, Character::Species),
    (IDX_CHARACTER_GENDER, Character::Gender),
    (IDX_CHARACTER_ORIGIN, Character::Origin),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Character::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, _) in INDEXES.into_iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Character::Table)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
