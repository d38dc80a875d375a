use chrono::{DateTime, Utc};
use rickmorty::model::{
    character::{Character, Location},
    page::{Info, Page},
};

/// Create an upstream character with default test values.
///
/// Every mock character is an alive human male from "Earth (C-137)" last seen at the
/// "Citadel of Ricks"; override fields on the returned value for anything else.
///
/// # Arguments
/// - `id` - Upstream character ID, also used in the image and resource URLs
pub fn mock_character(id: i32) -> Character {
    Character {
        id,
        name: "Rick Sanchez".to_string(),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        subtype: "".to_string(),
        gender: "Male".to_string(),
        origin: Location {
            name: "Earth (C-137)".to_string(),
            url: "https://rickandmortyapi.com/api/location/1".to_string(),
        },
        location: Location {
            name: "Citadel of Ricks".to_string(),
            url: "https://rickandmortyapi.com/api/location/3".to_string(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        episode: vec![
            "https://rickandmortyapi.com/api/episode/1".to_string(),
            "https://rickandmortyapi.com/api/episode/2".to_string(),
        ],
        url: format!("https://rickandmortyapi.com/api/character/{}", id),
        created: DateTime::parse_from_rfc3339("2017-11-04T18:48:46.250Z")
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// Create mock characters for each ID in `ids`
pub fn mock_characters(ids: impl IntoIterator<Item = i32>) -> Vec<Character> {
    ids.into_iter().map(mock_character).collect()
}

/// Wrap characters in a single-page listing envelope
///
/// `count` is the upstream total, which may exceed `results.len()` for multi-page
/// listings.
pub fn mock_page(results: Vec<Character>, count: u64, next: Option<&str>) -> Page<Character> {
    Page {
        info: Info {
            count,
            pages: if next.is_some() { 2 } else { 1 },
            next: next.map(str::to_string),
            prev: None,
        },
        results,
    }
}
