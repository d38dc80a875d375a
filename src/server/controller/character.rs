use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CharacterFilter, PaginatedCharacters, SearchQuery},
    },
    server::{
        error::Error, model::app::AppState, service::character::CharacterService, util::timing,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// Get a stored character by ID
#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Upstream character ID")),
    responses(
        (status = 200, description = "Success when retrieving a character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db, &state.client, &state.cache);

    let character = timing::measure("get character", character_service.find_by_id(id)).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// List stored characters matching a filter, without consulting the remote source
#[utoipa::path(
    get,
    path = "/api/characters/local",
    tag = CHARACTER_TAG,
    params(CharacterFilter),
    responses(
        (status = 200, description = "Success when listing stored characters",
            body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_local_characters(
    State(state): State<AppState>,
    Query(filter): Query<CharacterFilter>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db, &state.client, &state.cache);

    let characters =
        timing::measure("list local characters", character_service.find_all(&filter)).await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Search characters, preferring the cache and remote source unless `prefer_remote=false`
///
/// Falls back to the local store when the remote source fails and to an empty page when
/// that fails too, so this endpoint always answers 200.
#[utoipa::path(
    get,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Success when searching characters",
            body = PaginatedCharacters)
    ),
)]
pub async fn search_characters(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let character_service = CharacterService::new(&state.db, &state.client, &state.cache);
    let (filter, prefer_remote) = query.into_parts();

    let result = timing::measure_value(
        "search characters",
        character_service.search_characters(&filter, prefer_remote),
    )
    .await;

    (StatusCode::OK, Json(result))
}
