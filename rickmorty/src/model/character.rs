use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A character as returned by `/character` endpoints
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: i32,
    pub name: String,
    /// `Alive`, `Dead` or `unknown`
    pub status: String,
    pub species: String,
    /// Upstream field `type`, the character's subspecies or variant
    #[serde(rename = "type")]
    pub subtype: String,
    /// `Female`, `Male`, `Genderless` or `unknown`
    pub gender: String,
    pub origin: Location,
    /// Last known location
    pub location: Location,
    pub image: String,
    /// Episode URLs in airing order
    pub episode: Vec<String>,
    pub url: String,
    pub created: DateTime<Utc>,
}

/// Reference to a location resource, `url` is empty when the location is unknown
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub url: String,
}

/// Query parameters accepted by `GET /character`
///
/// Upstream matches `name` partially and the remaining fields exactly, all ignoring case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CharacterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// `/character/{ids}` answers with a bare object for one ID and an array for several
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    Many(Vec<Character>),
    One(Box<Character>),
}

impl From<OneOrMany> for Vec<Character> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(characters) => characters,
            OneOrMany::One(character) => vec![*character],
        }
    }
}
