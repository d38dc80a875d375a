use rickmorty::model::character::{Character, CharacterQuery};

use crate::{
    model::character::{CharacterDto, CharacterFilter, PaginatedCharacters},
    server::error::Error,
};

/// Remote source adapter over the Rick and Morty API client
///
/// Turns upstream responses into the canonical paginated shape. Any upstream failure
/// surfaces as [`Error::RemoteUnavailable`].
pub struct RemoteSource<'a> {
    client: &'a rickmorty::Client,
}

impl<'a> RemoteSource<'a> {
    pub fn new(client: &'a rickmorty::Client) -> Self {
        Self { client }
    }

    /// Searches upstream characters
    ///
    /// The upstream filters on name, status, species and gender itself; origin is applied
    /// here to the fetched page. `count`, `next` and `prev` are copied from the upstream
    /// envelope, so `count` is the upstream total rather than the filtered page length.
    pub async fn search(&self, filter: &CharacterFilter) -> Result<PaginatedCharacters, Error> {
        let query = CharacterQuery {
            page: None,
            name: filter.name.clone(),
            status: filter.status.clone(),
            species: filter.species.clone(),
            gender: filter.gender.clone(),
        };

        let page = self.client.character().get_characters(&query).await?;

        let results = page
            .results
            .into_iter()
            .filter(|character| filter.matches_origin(&character.origin.name))
            .map(CharacterDto::from)
            .collect();

        Ok(PaginatedCharacters {
            results,
            count: page.info.count,
            next: page.info.next,
            prev: page.info.prev,
        })
    }

    /// Fetches one unfiltered listing page
    pub async fn get_page(&self, page: u32) -> Result<Vec<Character>, Error> {
        Ok(self.client.character().get_page(page).await?.results)
    }

    /// Fetches characters by ID in a single request, no request is made for an empty list
    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<Character>, Error> {
        Ok(self
            .client
            .character()
            .get_multiple_characters(ids)
            .await?)
    }
}
