use crate::{
    client::Client,
    error::Error,
    model::{
        character::{Character, CharacterQuery, OneOrMany},
        page::Page,
    },
};

/// Character endpoints, obtained through [`Client::character`]
pub struct CharacterApi<'a> {
    client: &'a Client,
}

impl<'a> CharacterApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `GET /character` with the provided filters
    pub async fn get_characters(&self, query: &CharacterQuery) -> Result<Page<Character>, Error> {
        self.client.get("/character", query).await
    }

    /// `GET /character?page={page}` without filters
    pub async fn get_page(&self, page: u32) -> Result<Page<Character>, Error> {
        let query = CharacterQuery {
            page: Some(page),
            ..Default::default()
        };

        self.get_characters(&query).await
    }

    /// `GET /character/{id}`
    pub async fn get_character(&self, character_id: i32) -> Result<Character, Error> {
        let no_query: &[(&str, &str)] = &[];

        self.client
            .get(&format!("/character/{}", character_id), no_query)
            .await
    }

    /// `GET /character/{id1,id2,...}`
    ///
    /// Always returns a list regardless of how many IDs were requested. IDs unknown to the
    /// upstream are silently absent from the result. No request is made for an empty slice.
    pub async fn get_multiple_characters(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<Character>, Error> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = character_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<String>>()
            .join(",");
        let no_query: &[(&str, &str)] = &[];

        let characters: OneOrMany = self
            .client
            .get(&format!("/character/{}", ids), no_query)
            .await?;

        Ok(characters.into())
    }
}
