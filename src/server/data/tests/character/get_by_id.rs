use super::*;

/// Expect Some when the character is stored
#[tokio::test]
async fn finds_stored_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .build()
        .await?;
    let repo = CharacterRepository::new(&test.db);

    let result = repo.get_by_id(1).await?;

    assert!(result.is_some());
    let character = result.unwrap();
    assert_eq!(character.origin.as_deref(), Some("Earth (C-137)"));
    assert_eq!(character.location.as_deref(), Some("Citadel of Ricks"));

    Ok(())
}

/// Expect None for an unknown ID
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_character_table().build().await?;
    let repo = CharacterRepository::new(&test.db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
