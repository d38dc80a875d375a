//! Builder for declaring test environments.
//!
//! Tests declare the tables, rows and mock endpoints they need up front; `build` then
//! creates them in order: tables, database fixtures, mock endpoints.

use mockito::Mock;
use rickmorty::model::{character::Character, page::Page};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, fixtures::character::factory, TestContext};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for [`TestContext`]
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_character_table()
///     .with_mock_character(1)
///     .with_characters_endpoint(vec![factory::mock_character(1)], 1)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    include_character_table: bool,
    tables: Vec<TableCreateStatement>,
    characters: Vec<Character>,
    page_endpoints: Vec<(Page<Character>, usize)>,
    characters_endpoints: Vec<(Vec<Character>, usize)>,
    unavailable_endpoints: Vec<usize>,
    mock_builders: Vec<MockBuilder>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_character_table: false,
            tables: Vec::new(),
            characters: Vec::new(),
            page_endpoints: Vec::new(),
            characters_endpoints: Vec::new(),
            unavailable_endpoints: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Create the `character` table
    pub fn with_character_table(mut self) -> Self {
        self.include_character_table = true;
        self
    }

    /// Create a table for any entity
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a character row built by [`factory::mock_character`]
    pub fn with_mock_character(self, id: i32) -> Self {
        self.with_character(factory::mock_character(id))
    }

    /// Insert a character row
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Serve `page` from `GET /character`
    pub fn with_character_page_endpoint(
        mut self,
        page: Page<Character>,
        expected_requests: usize,
    ) -> Self {
        self.page_endpoints.push((page, expected_requests));
        self
    }

    /// Serve `characters` from `GET /character/{ids}`
    pub fn with_characters_endpoint(
        mut self,
        characters: Vec<Character>,
        expected_requests: usize,
    ) -> Self {
        self.characters_endpoints
            .push((characters, expected_requests));
        self
    }

    /// Fail every character request with 503
    pub fn with_unavailable_endpoint(mut self, expected_requests: usize) -> Self {
        self.unavailable_endpoints.push(expected_requests);
        self
    }

    /// Add a custom mock endpoint with full control over the mock server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::RemoteError)` - API client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_character_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::Character));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for character in &self.characters {
            setup.character().insert_character(character).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints first so tests can stack mocks on the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (page, expected) in self.page_endpoints {
            mocks.push(
                setup
                    .character()
                    .create_character_page_endpoint(page, expected),
            );
        }

        for (characters, expected) in self.characters_endpoints {
            mocks.push(
                setup
                    .character()
                    .create_characters_endpoint(characters, expected),
            );
        }

        for expected in self.unavailable_endpoints {
            mocks.push(setup.character().create_unavailable_endpoint(expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
