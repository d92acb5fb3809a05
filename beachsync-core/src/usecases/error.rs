use crate::gateways::{feed, store};
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpsertError {
    #[error("failed to merge entity {id}: {source}")]
    Merge { id: String, source: store::Error },
    #[error("failed to create entity {id}: {source}")]
    Create { id: String, source: store::Error },
    #[error("entity {id} has an invalid position")]
    InvalidPosition { id: String },
}

impl UpsertError {
    pub fn entity_id(&self) -> &str {
        match self {
            Self::Merge { id, .. } | Self::Create { id, .. } | Self::InvalidPosition { id } => id,
        }
    }
}

/// Counts of successfully synchronized beaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub merged: usize,
    pub created: usize,
}

impl SyncReport {
    pub fn total(&self) -> usize {
        self.merged + self.created
    }
}

/// All failures of a single run.
#[derive(Debug)]
pub struct BatchError {
    pub failures: Vec<UpsertError>,
    pub report: SyncReport,
}

impl BatchError {
    pub fn failed_ids(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(UpsertError::entity_id)
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} of {} beaches could not be synchronized: {}",
            self.failures.len(),
            self.failures.len() + self.report.total(),
            self.failures.iter().join("; ")
        )
    }
}

impl std::error::Error for BatchError {}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to fetch bathing sites: {0}")]
    Feed(#[from] feed::Error),
    #[error(transparent)]
    Batch(#[from] BatchError),
}
