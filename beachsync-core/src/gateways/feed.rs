use crate::entities::SiteRecord;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected status code 200, but got {0}")]
    Status(u16),
    #[error("Invalid feed content: {0}")]
    Content(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A source of service guide records.
pub trait FeedSource {
    /// All records, including deleted ones and non-bathing sites.
    fn fetch_records(&self) -> Result<Vec<SiteRecord>>;

    fn fetch_relevant_records(&self) -> Result<Vec<SiteRecord>> {
        let records = self.fetch_records()?;
        let total = records.len();
        let sites: Vec<_> = records
            .into_iter()
            .filter(SiteRecord::is_bathing_site)
            .collect();
        log::debug!("Found {} bathing sites in {total} records", sites.len());
        Ok(sites)
    }
}

impl<T> FeedSource for Box<T>
where
    T: FeedSource + ?Sized,
{
    fn fetch_records(&self) -> Result<Vec<SiteRecord>> {
        (**self).fetch_records()
    }
}
