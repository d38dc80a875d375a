//! Test context returned by `TestBuilder`.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build)
///
/// ```ignore
/// let mut test = TestBuilder::new().with_character_table().build().await?;
///
/// test.character().insert_mock_character(1).await?;
/// let service = CharacterService::new(&test.db, &test.client, &cache);
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// API client pointed at the mock server
    pub client: rickmorty::Client,

    /// Mock HTTP server standing in for the Rick and Morty API
    pub(crate) server: ServerGuard,
    /// Mock endpoints checked by `assert_mocks`
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Base URL of the mock server
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let client = rickmorty::Client::builder()
            .base_url(&server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            client,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called the expected number of times
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
