use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use citadel::model::{
    api::ErrorDto,
    character::{CharacterDto, CharacterFilter, PaginatedCharacters, SearchQuery},
};

use super::*;

mod list_local_characters;
