use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    // IDs are assigned by the upstream API, not generated locally
                    .col(integer(Character::Id).primary_key())
                    .col(string(Character::Name))
                    .col(string_null(Character::Status))
                    .col(string_null(Character::Species))
                    .col(string_null(Character::Subtype))
                    .col(string_null(Character::Gender))
                    .col(string_null(Character::Origin))
                    .col(string_null(Character::Location))
                    .col(string_null(Character::Image))
                    .col(json(Character::Episode))
                    .col(string_null(Character::Url))
                    .col(timestamp_null(Character::Created))
                    .col(timestamp(Character::CreatedAt))
                    .col(timestamp(Character::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Status,
    Species,
    Subtype,
    Gender,
    Origin,
    Location,
    Image,
    Episode,
    Url,
    Created,
    CreatedAt,
    UpdatedAt,
}
