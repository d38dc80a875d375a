//! Database model type aliases.

/// Stored character row, see `entity::character::Model`
pub type CharacterModel = entity::character::Model;

pub type CharacterActiveModel = entity::character::ActiveModel;
