use mockito::Matcher;

use crate::{model::character::CharacterDto, server::cache::characters_key};

use super::*;

/// Query string made of exactly `n` parameters
fn param_count(n: usize) -> Matcher {
    Matcher::Regex(format!("^([^&]+&){{{}}}[^&]+$", n - 1))
}

fn earth_and_mars() -> Vec<rickmorty::model::character::Character> {
    let earth = factory::mock_character(1);

    let mut mars = factory::mock_character(2);
    mars.name = "Mars Rick".to_string();
    mars.origin.name = "Mars".to_string();

    vec![earth, mars]
}

/// Expect a cache hit to return the cached page without contacting the remote
#[tokio::test]
async fn cache_hit_skips_remote() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_character_page_endpoint(factory::mock_page(earth_and_mars(), 2, None), 0)
        .build()
        .await?;
    let cache = MemoryCache::new();
    let filter = CharacterFilter {
        name: Some("rick".to_string()),
        ..Default::default()
    };

    let cached = PaginatedCharacters {
        results: vec![CharacterDto::from(factory::mock_character(99))],
        count: 120,
        next: Some("https://rickandmortyapi.com/api/character?page=2".to_string()),
        prev: None,
    };
    cache
        .set(
            &characters_key(&filter).unwrap(),
            &serde_json::to_string(&cached).unwrap(),
            60,
        )
        .await
        .unwrap();

    let service = CharacterService::new(&test.db, &test.client, &cache);
    let result = service.search_characters(&filter, true).await;

    assert_eq!(result, cached);
    test.assert_mocks();

    Ok(())
}

/// Expect a miss to fetch from the remote once and serve the repeat from cache
#[tokio::test]
async fn cache_miss_fetches_remote_and_populates_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_character_page_endpoint(
            factory::mock_page(
                earth_and_mars(),
                826,
                Some("https://rickandmortyapi.com/api/character?page=2"),
            ),
            1,
        )
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let first = service
        .search_characters(&CharacterFilter::default(), true)
        .await;
    let second = service
        .search_characters(&CharacterFilter::default(), true)
        .await;

    assert_eq!(first.results.len(), 2);
    assert_eq!(first.count, 826);
    assert_eq!(
        first.next.as_deref(),
        Some("https://rickandmortyapi.com/api/character?page=2")
    );
    assert_eq!(first, second);
    assert!(cache.get("characters:all").await.unwrap().is_some());
    test.assert_mocks();

    Ok(())
}

/// Expect origin to be filtered after fetch, ignoring case, with the upstream count kept
#[tokio::test]
async fn remote_filters_origin_ignoring_case() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_character_page_endpoint(factory::mock_page(earth_and_mars(), 2, None), 1)
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);
    let filter = CharacterFilter {
        origin: Some("earth".to_string()),
        ..Default::default()
    };

    let result = service.search_characters(&filter, true).await;

    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].origin.as_deref(), Some("Earth (C-137)"));
    assert_eq!(result.count, 2);
    test.assert_mocks();

    Ok(())
}

/// Expect the local-only origin filter to select the same characters as the remote one
#[tokio::test]
async fn local_filters_origin_like_remote() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_character_table();
    for character in earth_and_mars() {
        builder = builder.with_character(character);
    }
    let test = builder.build().await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);
    let filter = CharacterFilter {
        origin: Some("earth".to_string()),
        ..Default::default()
    };

    let result = service.search_characters(&filter, false).await;

    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].id, 1);
    assert_eq!(result.count, 1);

    Ok(())
}

/// Expect the local-only result when the remote source fails
#[tokio::test]
async fn falls_back_to_local_when_remote_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .with_mock_character(2)
        .with_unavailable_endpoint(1)
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service
        .search_characters(&CharacterFilter::default(), true)
        .await;
    let local_only = service
        .search_characters(&CharacterFilter::default(), false)
        .await;

    assert_eq!(result, local_only);
    assert_eq!(result.count, 2);
    assert!(result.next.is_none() && result.prev.is_none());
    assert!(cache.get("characters:all").await.unwrap().is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect the empty result when both the remote source and the local store fail
#[tokio::test]
async fn empty_when_remote_and_local_fail() -> Result<(), TestError> {
    let test = TestBuilder::new().with_unavailable_endpoint(1).build().await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service
        .search_characters(&CharacterFilter::default(), true)
        .await;

    assert_eq!(result, PaginatedCharacters::empty());
    test.assert_mocks();

    Ok(())
}

/// Expect the empty result without a remote attempt when a local-only search fails
#[tokio::test]
async fn local_only_failure_does_not_try_remote() -> Result<(), TestError> {
    let test = TestBuilder::new().with_unavailable_endpoint(0).build().await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service
        .search_characters(&CharacterFilter::default(), false)
        .await;

    assert_eq!(result, PaginatedCharacters::empty());
    test.assert_mocks();

    Ok(())
}

/// Expect a failing cache to never prevent a remote read
#[tokio::test]
async fn cache_failure_does_not_block_remote_read() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_character_page_endpoint(factory::mock_page(earth_and_mars(), 2, None), 1)
        .build()
        .await?;
    let cache = FailingCache;
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service
        .search_characters(&CharacterFilter::default(), true)
        .await;

    assert_eq!(result.results.len(), 2);
    assert_eq!(result.count, 2);
    test.assert_mocks();

    Ok(())
}

/// Expect an unreadable cached payload to be treated as a miss
#[tokio::test]
async fn corrupt_cache_entry_is_a_miss() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_character_page_endpoint(factory::mock_page(earth_and_mars(), 2, None), 1)
        .build()
        .await?;
    let cache = MemoryCache::new();
    cache.set("characters:all", "{not json", 60).await.unwrap();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service
        .search_characters(&CharacterFilter::default(), true)
        .await;

    assert_eq!(result.results.len(), 2);
    test.assert_mocks();

    Ok(())
}

/// Expect name, status, species and gender forwarded upstream and origin kept local
#[tokio::test]
async fn forwards_upstream_criteria_only() -> Result<(), TestError> {
    let body = serde_json::to_string(&factory::mock_page(earth_and_mars(), 2, None)).unwrap();
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/character")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("name".into(), "rick".into()),
                    Matcher::UrlEncoded("status".into(), "alive".into()),
                    Matcher::UrlEncoded("species".into(), "human".into()),
                    Matcher::UrlEncoded("gender".into(), "male".into()),
                    param_count(4),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);
    let filter = CharacterFilter {
        name: Some("rick".to_string()),
        status: Some("alive".to_string()),
        species: Some("human".to_string()),
        gender: Some("male".to_string()),
        origin: Some("earth".to_string()),
    };

    let result = service.search_characters(&filter, true).await;

    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].id, 1);
    test.assert_mocks();

    Ok(())
}

/// Expect blank criteria to be left out of the upstream query and the cache key
#[tokio::test]
async fn remote_ignores_blank_criteria() -> Result<(), TestError> {
    let body = serde_json::to_string(&factory::mock_page(earth_and_mars(), 2, None)).unwrap();
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/character")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("name".into(), "rick".into()),
                    param_count(1),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);
    let filter = CharacterFilter {
        name: Some("rick".to_string()),
        status: Some(String::new()),
        origin: Some(" ".to_string()),
        ..Default::default()
    };

    let result = service.search_characters(&filter, true).await;

    assert_eq!(result.results.len(), 2);
    let key = characters_key(&CharacterFilter {
        name: Some("rick".to_string()),
        ..Default::default()
    })
    .unwrap();
    assert!(cache.get(&key).await.unwrap().is_some());
    test.assert_mocks();

    Ok(())
}

/// Expect a blank status to impose no constraint on a local-only search
#[tokio::test]
async fn local_ignores_blank_criteria() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .with_mock_character(2)
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);
    let filter = CharacterFilter {
        status: Some(String::new()),
        ..Default::default()
    };

    let result = service.search_characters(&filter, false).await;

    assert_eq!(result.results.len(), 2);
    assert_eq!(result.count, 2);

    Ok(())
}
