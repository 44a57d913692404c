//! Ingestion coordinator.
//!
//! One run fetches every catalog feed concurrently (bounded by a
//! semaphore), parses the bodies, merges the accepted records by address,
//! and swaps the merged set into the registry store as a single atomic
//! bulk-replace. Per-feed failures are tallied and never abort the run.

use crate::catalog::Catalog;
use crate::fetch::Fetcher;
use crate::parse::{self, AddressRecord};
use crate::store::{RegistryStore, StoreError};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// One feed's failure, as recorded in the run report.
#[derive(Debug, Clone, Serialize)]
pub struct FeedFailure {
    pub feed: String,
    pub cause: String,
}

/// Accounting for one ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionReport {
    /// Feeds the catalog named for this run.
    pub feeds_attempted: usize,

    /// Feeds whose body was fetched and parsed.
    pub feeds_succeeded: usize,

    /// Feeds that failed, with the reason each one did.
    pub feeds_failed: Vec<FeedFailure>,

    /// Lines accepted by the parser across all feeds, before
    /// deduplication by address.
    pub records_accepted: usize,

    /// Lines dropped by the parser across all feeds.
    pub records_rejected: usize,

    /// Whether a new generation was swapped into the store. False means a
    /// degraded run: nothing was accepted and the prior contents were
    /// left untouched.
    pub committed: bool,

    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

/// What one dispatched feed task settled to.
enum FeedOutcome {
    Fetched {
        feed: String,
        accepted: Vec<AddressRecord>,
        rejected: usize,
    },
    Failed {
        feed: String,
        cause: String,
    },
}

/// Orchestrates fetch+parse across the whole catalog and owns the
/// accumulate-then-bulk-replace step against the store.
pub struct Ingestor {
    catalog: Catalog,
    fetcher: Arc<Fetcher>,
    store: Arc<dyn RegistryStore>,
    concurrency: usize,
}

impl Ingestor {
    pub fn new(
        catalog: Catalog,
        fetcher: Fetcher,
        store: Arc<dyn RegistryStore>,
        concurrency: usize,
    ) -> Self {
        Self {
            catalog,
            fetcher: Arc::new(fetcher),
            store,
            concurrency: concurrency.max(1),
        }
    }

    /// Run one end-to-end ingestion.
    ///
    /// Always drives every dispatched feed to completion. Returns an error
    /// only if the final bulk-replace fails, in which case the store keeps
    /// its prior generation.
    pub async fn run(&self) -> Result<IngestionReport, StoreError> {
        let started = Instant::now();
        info!(feeds = self.catalog.len(), "Starting ingestion run");

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for feed in self.catalog.feeds().iter().cloned() {
            let fetcher = self.fetcher.clone();
            let semaphore = semaphore.clone();

            tasks.spawn(async move {
                // Permit held for the whole fetch: at most `concurrency`
                // requests in flight at once.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("feed semaphore closed");

                let body = match fetcher.fetch(&feed).await {
                    Ok(body) => body,
                    Err(err) => {
                        return FeedOutcome::Failed {
                            feed: feed.name,
                            cause: err.cause.to_string(),
                        }
                    }
                };

                let mut accepted = Vec::new();
                let mut rejected = 0usize;
                for line in body.lines() {
                    match parse::parse_line(line, &feed.name) {
                        Some(record) => accepted.push(record),
                        None => rejected += 1,
                    }
                }

                FeedOutcome::Fetched {
                    feed: feed.name,
                    accepted,
                    rejected,
                }
            });
        }

        let mut report = IngestionReport {
            feeds_attempted: self.catalog.len(),
            feeds_succeeded: 0,
            feeds_failed: Vec::new(),
            records_accepted: 0,
            records_rejected: 0,
            committed: false,
            duration_ms: 0,
        };

        // Merge as tasks settle. Each task owns its partition of records,
        // so the accumulation map is only ever touched here.
        let mut merged: HashMap<String, AddressRecord> = HashMap::new();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(FeedOutcome::Fetched {
                    feed,
                    accepted,
                    rejected,
                }) => {
                    report.feeds_succeeded += 1;
                    report.records_accepted += accepted.len();
                    report.records_rejected += rejected;
                    debug!(
                        feed = %feed,
                        accepted = accepted.len(),
                        rejected,
                        "Feed ingested"
                    );

                    for record in accepted {
                        // Last writer wins on address collisions.
                        merged.insert(record.address.clone(), record);
                    }
                }
                Ok(FeedOutcome::Failed { feed, cause }) => {
                    warn!(feed = %feed, error = %cause, "Feed fetch failed");
                    report.feeds_failed.push(FeedFailure { feed, cause });
                }
                Err(join_err) => {
                    warn!(error = %join_err, "Feed task aborted");
                    report.feeds_failed.push(FeedFailure {
                        feed: "<unknown>".to_string(),
                        cause: format!("task aborted: {join_err}"),
                    });
                }
            }
        }

        if merged.is_empty() {
            warn!(
                failed = report.feeds_failed.len(),
                "No records accepted; keeping previous registry contents"
            );
        } else {
            let unique = merged.len();
            self.store
                .bulk_replace(merged.into_values().collect())
                .await?;
            report.committed = true;
            debug!(unique, "New generation committed");
        }

        report.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            attempted = report.feeds_attempted,
            succeeded = report.feeds_succeeded,
            failed = report.feeds_failed.len(),
            accepted = report.records_accepted,
            rejected = report.records_rejected,
            committed = report.committed,
            duration_ms = report.duration_ms,
            "Ingestion run finished"
        );

        Ok(report)
    }
}
