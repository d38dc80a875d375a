//! Mock Rick and Morty API endpoints.
//!
//! Each endpoint verifies it was called exactly `expected_requests` times when
//! `TestContext::assert_mocks` runs.

use mockito::{Matcher, Mock};
use rickmorty::model::{character::Character, page::Page};

use crate::fixtures::character::CharacterFixtures;

impl<'a> CharacterFixtures<'a> {
    /// Create a mock endpoint for the filtered character listing.
    ///
    /// Answers `GET /character` with any query string, which covers both filtered searches
    /// and page fetches.
    pub fn create_character_page_endpoint(
        &mut self,
        page: Page<Character>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/character")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&page).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for fetching characters by ID.
    ///
    /// Mirrors the upstream's response shape: a bare object when exactly one character is
    /// requested, an array otherwise.
    pub fn create_characters_endpoint(
        &mut self,
        characters: Vec<Character>,
        expected_requests: usize,
    ) -> Mock {
        let ids = characters
            .iter()
            .map(|c| c.id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let body = match characters.as_slice() {
            [character] => serde_json::to_string(character).unwrap(),
            _ => serde_json::to_string(&characters).unwrap(),
        };

        self.setup
            .server
            .mock("GET", format!("/character/{}", ids).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock that fails every character request with 503.
    pub fn create_unavailable_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", Matcher::Regex(r"^/character".to_string()))
            .with_status(503)
            .with_body("upstream unavailable")
            .expect(expected_requests)
            .create()
    }
}
