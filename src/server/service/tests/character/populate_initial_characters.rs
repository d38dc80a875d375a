use super::*;

/// Expect the first 15 characters of page one persisted into an empty store
#[tokio::test]
async fn seeds_empty_store_with_first_batch() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_character_table()
        .with_character_page_endpoint(
            factory::mock_page(
                factory::mock_characters(1..=20),
                826,
                Some("https://rickandmortyapi.com/api/character?page=2"),
            ),
            1,
        )
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.populate_initial_characters().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), SEED_BATCH_SIZE);
    assert_eq!(test.character().count().await?, 15);

    let first = test.character().get(1).await?.unwrap();
    assert_eq!(first.origin.as_deref(), Some("Earth (C-137)"));
    assert_eq!(first.location.as_deref(), Some("Citadel of Ricks"));
    assert!(test.character().get(16).await?.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect every character persisted when page one holds fewer than the batch size
#[tokio::test]
async fn seeds_short_page_entirely() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_character_table()
        .with_character_page_endpoint(
            factory::mock_page(factory::mock_characters(1..=4), 4, None),
            1,
        )
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.populate_initial_characters().await;

    assert!(matches!(result, Ok(4)));
    assert_eq!(test.character().count().await?, 4);

    Ok(())
}

/// Expect no remote call and no write when the store already holds characters
#[tokio::test]
async fn skips_non_empty_store() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .with_character_page_endpoint(
            factory::mock_page(factory::mock_characters(1..=20), 826, None),
            0,
        )
        .build()
        .await?;
    let before = test.character().get(1).await?.unwrap();
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.populate_initial_characters().await;

    assert!(matches!(result, Ok(0)));
    assert_eq!(test.character().count().await?, 1);
    assert_eq!(test.character().get(1).await?.unwrap(), before);
    test.assert_mocks();

    Ok(())
}

/// Expect RemoteUnavailable and an untouched store when page one cannot be fetched
#[tokio::test]
async fn fails_when_remote_unavailable() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_character_table()
        .with_unavailable_endpoint(1)
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.populate_initial_characters().await;

    assert!(matches!(result, Err(Error::RemoteUnavailable(_))));
    assert_eq!(test.character().count().await?, 0);
    test.assert_mocks();

    Ok(())
}
