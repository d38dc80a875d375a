use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A character in its canonical, flattened shape
///
/// Both the local store and the remote source are mapped into this shape so callers never
/// see which one served a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub status: Option<String>,
    pub species: Option<String>,
    #[serde(rename = "type")]
    pub subtype: Option<String>,
    pub gender: Option<String>,
    /// Name of the character's origin location
    pub origin: Option<String>,
    /// Name of the character's last known location
    pub location: Option<String>,
    pub image: Option<String>,
    /// Episode URLs the character appears in
    pub episode: Vec<String>,
    pub url: Option<String>,
    /// When the character was created upstream
    pub created: Option<DateTime<Utc>>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(model: entity::character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            status: model.status,
            species: model.species,
            subtype: model.subtype,
            gender: model.gender,
            origin: model.origin,
            location: model.location,
            image: model.image,
            episode: model.episode.0,
            url: model.url,
            created: model.created.map(|created| created.and_utc()),
        }
    }
}

impl From<rickmorty::model::character::Character> for CharacterDto {
    fn from(character: rickmorty::model::character::Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            status: Some(character.status),
            species: Some(character.species),
            subtype: Some(character.subtype),
            gender: Some(character.gender),
            origin: Some(character.origin.name),
            location: Some(character.location.name),
            image: Some(character.image),
            episode: character.episode,
            url: Some(character.url),
            created: Some(character.created),
        }
    }
}

/// Optional filter criteria, absent fields impose no constraint
///
/// `name` and `origin` match case-insensitive substrings, `status`, `species` and `gender`
/// match case-insensitively on the whole value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CharacterFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl CharacterFilter {
    /// True when no field constrains the result, equivalent to having no filter at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.status.is_none()
            && self.species.is_none()
            && self.gender.is_none()
            && self.origin.is_none()
    }

    /// Drops blank criteria, so `?status=` constrains nothing
    pub fn normalized(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|value| !value.trim().is_empty())
        }

        Self {
            name: present(self.name),
            status: present(self.status),
            species: present(self.species),
            gender: present(self.gender),
            origin: present(self.origin),
        }
    }

    /// Whether a flattened origin name satisfies the origin criterion
    pub fn matches_origin(&self, origin: &str) -> bool {
        match &self.origin {
            Some(wanted) => origin.to_lowercase().contains(&wanted.to_lowercase()),
            None => true,
        }
    }
}

/// Query parameters for the search endpoint
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub status: Option<String>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub origin: Option<String>,
    /// Prefer the cache and remote source over the local store, defaults to true
    pub prefer_remote: Option<bool>,
}

impl SearchQuery {
    pub fn into_parts(self) -> (CharacterFilter, bool) {
        let filter = CharacterFilter {
            name: self.name,
            status: self.status,
            species: self.species,
            gender: self.gender,
            origin: self.origin,
        }
        .normalized();

        (filter, self.prefer_remote.unwrap_or(true))
    }
}

/// One page of characters
///
/// `next` and `prev` are the upstream's page URLs when the page came from the remote source
/// and always null when it came from the local store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCharacters {
    pub results: Vec<CharacterDto>,
    pub count: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PaginatedCharacters {
    /// The result returned when every retrieval path failed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps local store results, which are never paginated
    pub fn from_local(results: Vec<CharacterDto>) -> Self {
        Self {
            count: results.len() as u64,
            results,
            next: None,
            prev: None,
        }
    }
}
