use super::*;

/// Expect the number of stored rows
#[tokio::test]
async fn counts_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .with_mock_character(2)
        .build()
        .await?;
    let repo = CharacterRepository::new(&test.db);

    assert_eq!(repo.count().await?, 2);

    Ok(())
}

/// Expect zero for an empty table
#[tokio::test]
async fn counts_empty_table() -> Result<(), TestError> {
    let test = TestBuilder::new().with_character_table().build().await?;
    let repo = CharacterRepository::new(&test.db);

    assert_eq!(repo.count().await?, 0);

    Ok(())
}
