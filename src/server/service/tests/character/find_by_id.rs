use super::*;

/// Expect Ok with the stored character
#[tokio::test]
async fn finds_stored_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .build()
        .await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.find_by_id(1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let character = result.unwrap();
    assert_eq!(character.id, 1);
    assert_eq!(character.origin.as_deref(), Some("Earth (C-137)"));

    Ok(())
}

/// Expect CharacterNotFound for an unknown ID
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_character_table().build().await?;
    let cache = MemoryCache::new();
    let service = CharacterService::new(&test.db, &test.client, &cache);

    let result = service.find_by_id(7).await;

    assert!(matches!(result, Err(Error::CharacterNotFound(7))));

    Ok(())
}
