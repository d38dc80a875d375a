//! Scheduler for periodic background jobs.
//!
//! Jobs run on cron expressions through `tokio-cron-scheduler`. A job whose previous run is
//! still in progress when its next tick fires skips that tick instead of overlapping.

use std::{future::Future, sync::Arc};

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod character;
pub mod config;

use self::{character::reconcile_characters, config::character as character_config};

/// Job scheduler for background synchronization tasks
pub struct Scheduler {
    db: DatabaseConnection,
    client: rickmorty::Client,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection, client: rickmorty::Client) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, client, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Character reconciliation, every 12 hours
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            character_config::CRON_EXPRESSION,
            "character reconciliation",
            reconcile_characters,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives clones of the database connection and API client. Each run
    /// logs the number of records it updated, or its error; a failed run never stops the
    /// schedule. Runs of the same job never overlap.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds, e.g. "0 0 */12 * * *"
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async job body returning the number of records it updated
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, rickmorty::Client) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let client = self.client.clone();
        let name = name.to_string();
        let function = Arc::new(function);
        let running = Arc::new(Mutex::new(()));

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let client = client.clone();
                let name = name.clone();
                let function = Arc::clone(&function);
                let running = Arc::clone(&running);

                Box::pin(async move {
                    match run_exclusive(&running, &name, function(db, client)).await {
                        Some(Ok(count)) => {
                            tracing::info!("Completed {}, {} update(s)", name, count)
                        }
                        Some(Err(e)) => tracing::error!("Error running {}: {:?}", name, e),
                        None => (),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

/// Runs `future` while holding `lock`, or skips it if another run already holds it
///
/// Returns `None` when skipped. The future is not polled in that case.
pub async fn run_exclusive<T>(
    lock: &Mutex<()>,
    name: &str,
    future: impl Future<Output = T>,
) -> Option<T> {
    let Ok(_guard) = lock.try_lock() else {
        tracing::warn!("Previous {} run is still in progress, skipping", name);
        return None;
    };

    Some(future.await)
}
