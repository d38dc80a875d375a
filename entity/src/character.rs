use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "character")]
pub struct Model {
    /// Upstream character ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub status: Option<String>,
    pub species: Option<String>,
    pub subtype: Option<String>,
    pub gender: Option<String>,
    pub origin: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub episode: Episodes,
    pub url: Option<String>,
    pub created: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Ordered list of episode URLs, stored as a JSON array
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Episodes(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
