use super::*;

/// Expect local rows only, without contacting the remote source
#[tokio::test]
async fn reads_local_store_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .with_mock_character(2)
        .with_unavailable_endpoint(0)
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.find_all(&CharacterFilter::default()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().len(), 2);
    test.assert_mocks();

    Ok(())
}

/// Expect Err when the local store fails, there is no fallback
#[tokio::test]
async fn propagates_persistence_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.find_all(&CharacterFilter::default()).await;

    assert!(matches!(result, Err(Error::PersistenceError(_))));

    Ok(())
}

/// Expect blank criteria to be ignored rather than match nothing
#[tokio::test]
async fn ignores_blank_criteria() -> Result<(), TestError> {
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
        gender: Some("  ".to_string()),
        ..Default::default()
    };

    let result = service.find_all(&filter).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().len(), 2);

    Ok(())
}
