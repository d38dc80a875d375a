use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CharacterFilter, PaginatedCharacters},
    server::{data::character::CharacterRepository, error::Error},
};

/// Answers queries from the local store only, results are never cached
pub struct LocalOnlyStrategy<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocalOnlyStrategy<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(
        &self,
        filter: &CharacterFilter,
    ) -> Result<PaginatedCharacters, Error> {
        let characters = CharacterRepository::new(self.db).find(filter).await?;

        Ok(PaginatedCharacters::from_local(
            characters.into_iter().map(CharacterDto::from).collect(),
        ))
    }
}
