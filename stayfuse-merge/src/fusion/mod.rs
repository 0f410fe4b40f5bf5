//! Merge pipeline: normalization → validation → scoring → selection
//!
//! `MergePipeline` runs the full sequence for a batch of raw supplier
//! records. Per-record failures (malformed input, missing mandatory fields)
//! are recovered locally and tallied; they never fail the batch. Only an
//! unexpected batch-level failure surfaces as an error, which the API layer
//! logs and degrades to a failed status.

pub mod aliases;
pub mod sanitize;
pub mod scorer;
pub mod transformer;
pub mod validator;

pub use scorer::RelevanceScorer;
pub use transformer::SchemaTransformer;
pub use validator::{validate, ValidationOutcome};

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use stayfuse_common::Result;

use crate::store::{HotelStore, SelectOutcome};

/// Per-batch outcome tallies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Raw records received in the batch
    pub received: usize,
    /// Records that were not structured key/value mappings
    pub malformed: usize,
    /// Candidates dropped for missing mandatory fields
    pub rejected: usize,
    /// Candidates that passed validation and reached selection
    pub merged: usize,
    /// Candidates that became (or replaced) the authoritative record
    pub stored: usize,
}

/// Merge Pipeline
///
/// Owns the transform → validate → score → select sequence. A batch-level
/// lock serializes the read-merge-select window so concurrent merges cannot
/// lose updates and violate the monotonic-union invariant.
#[derive(Clone)]
pub struct MergePipeline {
    transformer: Arc<SchemaTransformer>,
    scorer: RelevanceScorer,
    store: HotelStore,
    batch_lock: Arc<Mutex<()>>,
}

impl MergePipeline {
    pub fn new(store: HotelStore) -> Self {
        Self {
            transformer: Arc::new(SchemaTransformer::new(store.clone())),
            scorer: RelevanceScorer::new(),
            store,
            batch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run the full pipeline for one batch of raw supplier records.
    ///
    /// Effects already applied to the store stand even if a caller abandons
    /// the batch; there is no partial rollback.
    pub async fn merge_batch(&self, batch: &[Value]) -> Result<MergeReport> {
        let _guard = self.batch_lock.lock().await;

        let mut report = MergeReport {
            received: batch.len(),
            ..Default::default()
        };

        let output = self.transformer.transform(batch);
        report.malformed = output.malformed;

        for candidate in output.candidates {
            let outcome = validate(&candidate);
            if !outcome.is_accepted() {
                report.rejected += 1;
                continue;
            }

            let score = self.scorer.score(&candidate);
            report.merged += 1;

            let id = candidate.id.clone();
            match self.store.select(candidate, score) {
                SelectOutcome::Inserted | SelectOutcome::Replaced => report.stored += 1,
                SelectOutcome::Discarded => {
                    debug!(id = %id, score, "Challenger discarded; incumbent retained");
                }
            }
        }

        info!(
            received = report.received,
            malformed = report.malformed,
            rejected = report.rejected,
            merged = report.merged,
            stored = report.stored,
            "Batch merge complete"
        );

        Ok(report)
    }
}
