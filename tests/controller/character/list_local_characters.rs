use citadel::server::controller::character::list_local_characters;

use super::*;

/// Expect 200 with stored characters matching the filter, without remote calls
#[tokio::test]
async fn lists_matching_stored_characters() -> Result<(), TestError> {
    let mut morty = factory::mock_character(2);
    morty.name = "Morty Smith".to_string();

    let test = TestBuilder::new()
        .with_character_table()
        .with_mock_character(1)
        .with_character(morty)
        .with_unavailable_endpoint(0)
        .build()
        .await?;
    let filter = CharacterFilter {
        name: Some("morty".to_string()),
        ..Default::default()
    };

    let result = list_local_characters(State(test.to_app_state()), Query(filter)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let characters: Vec<CharacterDto> = json_body(resp).await;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, 2);
    test.assert_mocks();

    Ok(())
}

/// Expect 200 with an empty list for an empty store
#[tokio::test]
async fn empty_list_for_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().with_character_table().build().await?;

    let result = list_local_characters(
        State(test.to_app_state()),
        Query(CharacterFilter::default()),
    )
    .await;

    assert!(result.is_ok());
    let characters: Vec<CharacterDto> = json_body(result.unwrap().into_response()).await;
    assert!(characters.is_empty());

    Ok(())
}
