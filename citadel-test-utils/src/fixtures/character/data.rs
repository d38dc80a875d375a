//! Character database insertion utilities.
//!
//! Rows are inserted with audit timestamps one day in the past so tests can observe
//! `updated_at` moving forward after a write.

use chrono::{Duration, Utc};
use rickmorty::model::character::Character;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::character::{factory, CharacterFixtures},
};

impl<'a> CharacterFixtures<'a> {
    /// Insert an upstream character into the database.
    ///
    /// If a row with the same ID already exists it is returned unchanged.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or existing character row
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_character(
        &self,
        character: &Character,
    ) -> Result<entity::character::Model, TestError> {
        if let Some(existing) = entity::prelude::Character::find_by_id(character.id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let stored_at = (Utc::now() - Duration::days(1)).naive_utc();

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                id: ActiveValue::Set(character.id),
                name: ActiveValue::Set(character.name.clone()),
                status: ActiveValue::Set(Some(character.status.clone())),
                species: ActiveValue::Set(Some(character.species.clone())),
                subtype: ActiveValue::Set(Some(character.subtype.clone())),
                gender: ActiveValue::Set(Some(character.gender.clone())),
                origin: ActiveValue::Set(Some(character.origin.name.clone())),
                location: ActiveValue::Set(Some(character.location.name.clone())),
                image: ActiveValue::Set(Some(character.image.clone())),
                episode: ActiveValue::Set(entity::character::Episodes(character.episode.clone())),
                url: ActiveValue::Set(Some(character.url.clone())),
                created: ActiveValue::Set(Some(character.created.naive_utc())),
                created_at: ActiveValue::Set(stored_at),
                updated_at: ActiveValue::Set(stored_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a character built by [`factory::mock_character`].
    pub async fn insert_mock_character(
        &self,
        id: i32,
    ) -> Result<entity::character::Model, TestError> {
        self.insert_character(&factory::mock_character(id)).await
    }

    /// Fetch a character row by ID, used to inspect state after a write.
    pub async fn get(&self, id: i32) -> Result<Option<entity::character::Model>, TestError> {
        Ok(entity::prelude::Character::find_by_id(id)
            .one(&self.setup.db)
            .await?)
    }

    /// Number of stored character rows.
    pub async fn count(&self) -> Result<usize, TestError> {
        Ok(entity::prelude::Character::find()
            .all(&self.setup.db)
            .await?
            .len())
    }
}
