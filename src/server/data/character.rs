use chrono::Utc;
use migration::{Expr, ExprTrait, Func, OnConflict};
use rickmorty::model::character::Character;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::character::CharacterFilter,
    server::model::db::{CharacterActiveModel, CharacterModel},
};

use entity::character::Column;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds characters matching every present filter field, ordered by ID
    ///
    /// `name` and `origin` match case-insensitive substrings; `status`, `species` and
    /// `gender` match the whole value case-insensitively.
    pub async fn find(&self, filter: &CharacterFilter) -> Result<Vec<CharacterModel>, DbErr> {
        let mut query = entity::prelude::Character::find();

        if let Some(name) = &filter.name {
            query = query.filter(contains_ignore_case(Column::Name, name));
        }
        if let Some(status) = &filter.status {
            query = query.filter(equals_ignore_case(Column::Status, status));
        }
        if let Some(species) = &filter.species {
            query = query.filter(equals_ignore_case(Column::Species, species));
        }
        if let Some(gender) = &filter.gender {
            query = query.filter(equals_ignore_case(Column::Gender, gender));
        }
        if let Some(origin) = &filter.origin {
            query = query.filter(contains_ignore_case(Column::Origin, origin));
        }

        query.order_by_asc(Column::Id).all(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(id).one(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Character::find().count(self.db).await
    }

    /// Inserts upstream characters, overwriting rows that already exist by ID
    pub async fn upsert_many(
        &self,
        characters: Vec<Character>,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        if characters.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let characters = characters
            .into_iter()
            .map(|character| CharacterActiveModel {
                id: ActiveValue::Set(character.id),
                name: ActiveValue::Set(character.name),
                status: ActiveValue::Set(Some(character.status)),
                species: ActiveValue::Set(Some(character.species)),
                subtype: ActiveValue::Set(Some(character.subtype)),
                gender: ActiveValue::Set(Some(character.gender)),
                origin: ActiveValue::Set(Some(character.origin.name)),
                location: ActiveValue::Set(Some(character.location.name)),
                image: ActiveValue::Set(Some(character.image)),
                episode: ActiveValue::Set(entity::character::Episodes(character.episode)),
                url: ActiveValue::Set(Some(character.url)),
                created: ActiveValue::Set(Some(character.created.naive_utc())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            });

        entity::prelude::Character::insert_many(characters)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::Status,
                        Column::Species,
                        Column::Subtype,
                        Column::Gender,
                        Column::Origin,
                        Column::Location,
                        Column::Image,
                        Column::Episode,
                        Column::Url,
                        Column::Created,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Overwrites every mutable field of a stored character with the upstream's values
    ///
    /// `created_at` is preserved and `updated_at` is bumped.
    pub async fn update_from_remote(
        &self,
        character: CharacterModel,
        remote: &Character,
    ) -> Result<CharacterModel, DbErr> {
        let mut character: CharacterActiveModel = character.into();

        character.name = ActiveValue::Set(remote.name.clone());
        character.status = ActiveValue::Set(Some(remote.status.clone()));
        character.species = ActiveValue::Set(Some(remote.species.clone()));
        character.subtype = ActiveValue::Set(Some(remote.subtype.clone()));
        character.gender = ActiveValue::Set(Some(remote.gender.clone()));
        character.origin = ActiveValue::Set(Some(remote.origin.name.clone()));
        character.location = ActiveValue::Set(Some(remote.location.name.clone()));
        character.image = ActiveValue::Set(Some(remote.image.clone()));
        character.episode = ActiveValue::Set(entity::character::Episodes(remote.episode.clone()));
        character.url = ActiveValue::Set(Some(remote.url.clone()));
        character.created = ActiveValue::Set(Some(remote.created.naive_utc()));
        character.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        character.update(self.db).await
    }
}

fn contains_ignore_case(column: Column, value: &str) -> Expr {
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", value.to_lowercase()))
}

fn equals_ignore_case(column: Column, value: &str) -> Expr {
    Expr::expr(Func::lower(Expr::col(column))).eq(value.to_lowercase())
}
