use citadel_test_utils::prelude::*;

use crate::{model::character::CharacterFilter, server::data::character::CharacterRepository};

mod count;
mod get_by_id;
