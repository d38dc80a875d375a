use sea_orm::DatabaseConnection;

use crate::server::{error::Error, service::reconcile::CharacterReconciler, util::timing};

/// Reconciles every stored character against the remote source
pub async fn reconcile_characters(
    db: DatabaseConnection,
    client: rickmorty::Client,
) -> Result<usize, Error> {
    let reconciler = CharacterReconciler::new(&db, &client);

    timing::measure("character reconciliation", reconciler.run()).await
}
