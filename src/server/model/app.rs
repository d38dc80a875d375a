use sea_orm::DatabaseConnection;

use crate::server::cache::Cache;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub client: rickmorty::Client,
    pub cache: Cache,
}
