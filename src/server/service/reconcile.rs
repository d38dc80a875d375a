use std::collections::HashMap;

use rickmorty::model::character::Character;
use sea_orm::DatabaseConnection;

use crate::{
    model::character::CharacterFilter,
    server::{
        data::character::CharacterRepository, error::Error, model::db::CharacterModel,
        service::remote::RemoteSource,
    },
};

/// Keeps stored characters aligned with the remote source
///
/// Each run re-fetches every stored character in one batch request and rewrites the ones
/// whose tracked fields differ. Characters the upstream no longer returns are left alone,
/// and nothing is ever deleted. The cache is not touched.
pub struct CharacterReconciler<'a> {
    db: &'a DatabaseConnection,
    client: &'a rickmorty::Client,
}

impl<'a> CharacterReconciler<'a> {
    pub fn new(db: &'a DatabaseConnection, client: &'a rickmorty::Client) -> Self {
        Self { db, client }
    }

    /// Runs one reconciliation pass
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of characters rewritten
    /// - `Err(Error::RemoteUnavailable)` - Batch fetch failed, nothing was written
    /// - `Err(Error::PersistenceError)` - Loading or writing a character failed
    pub async fn run(&self) -> Result<usize, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let stored = character_repo.find(&CharacterFilter::default()).await?;
        if stored.is_empty() {
            tracing::info!("No stored characters to reconcile");
            return Ok(0);
        }

        let ids: Vec<i32> = stored.iter().map(|character| character.id).collect();
        let remote = RemoteSource::new(self.client).get_many(&ids).await?;

        let mut stored: HashMap<i32, CharacterModel> = stored
            .into_iter()
            .map(|character| (character.id, character))
            .collect();

        let mut updated = 0;
        for remote_character in &remote {
            let Some(local) = stored.remove(&remote_character.id) else {
                tracing::debug!(
                    "Upstream returned unrequested character {}, skipping",
                    remote_character.id
                );
                continue;
            };

            if !has_changed(&local, remote_character) {
                continue;
            }

            character_repo
                .update_from_remote(local, remote_character)
                .await?;
            tracing::debug!("Updated character {} from remote", remote_character.id);

            updated += 1;
        }

        tracing::info!(
            "Reconciled {} stored characters against {} remote, {} updated",
            ids.len(),
            remote.len(),
            updated
        );

        Ok(updated)
    }
}

/// Whether any tracked field of the stored character differs from the upstream's
///
/// Tracked fields are name, status, species, type, gender, origin name, location name and
/// image. Episodes, url and the creation timestamp are rewritten on update but do not
/// trigger one.
pub fn has_changed(local: &CharacterModel, remote: &Character) -> bool {
    fn differs(local: &Option<String>, remote: &str) -> bool {
        local.as_deref() != Some(remote)
    }

    local.name != remote.name
        || differs(&local.status, &remote.status)
        || differs(&local.species, &remote.species)
        || differs(&local.subtype, &remote.subtype)
        || differs(&local.gender, &remote.gender)
        || differs(&local.origin, &remote.origin.name)
        || differs(&local.location, &remote.location.name)
        || differs(&local.image, &remote.image)
}
