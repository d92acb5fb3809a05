use beachsync_core::{
    entities::SiteRecord,
    gateways::feed::{self, FeedSource},
};
use reqwest::{blocking::Client, header::ACCEPT, StatusCode};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub mod json;

/// Fetches the sites from the service guide API.
#[derive(Debug, Clone)]
pub struct ServiceGuideClient {
    url: String,
    client: Client,
}

impl ServiceGuideClient {
    pub fn new(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

impl FeedSource for ServiceGuideClient {
    fn fetch_records(&self) -> feed::Result<Vec<SiteRecord>> {
        log::debug!("Fetching contents from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(anyhow::Error::from)?;
        if response.status() != StatusCode::OK {
            return Err(feed::Error::Status(response.status().as_u16()));
        }
        let guide: json::ServiceGuide = response
            .json()
            .map_err(|err| feed::Error::Content(err.to_string()))?;
        log::debug!("Fetched {} records from the service guide", guide.content.len());
        Ok(guide.into())
    }
}

/// Reads the sites from a local copy of the service guide.
#[derive(Debug, Clone)]
pub struct ServiceGuideFile {
    path: PathBuf,
}

impl ServiceGuideFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl FeedSource for ServiceGuideFile {
    fn fetch_records(&self) -> feed::Result<Vec<SiteRecord>> {
        let bytes = fs::read(&self.path)?;
        let guide: json::ServiceGuide = serde_json::from_slice(&bytes)
            .map_err(|err| feed::Error::Content(format!("{}: {err}", self.path.display())))?;
        log::debug!(
            "Loaded {} records from {}",
            guide.content.len(),
            self.path.display()
        );
        Ok(guide.into())
    }
}

/// Prefers a local copy of the service guide over the API.
///
/// The API is only queried if the local copy is missing,
/// unreadable or empty.
#[derive(Debug, Clone)]
pub struct LocalCopyOrRemote {
    local: ServiceGuideFile,
    remote: ServiceGuideClient,
}

impl LocalCopyOrRemote {
    pub fn new(local: ServiceGuideFile, remote: ServiceGuideClient) -> Self {
        Self { local, remote }
    }
}

impl FeedSource for LocalCopyOrRemote {
    fn fetch_records(&self) -> feed::Result<Vec<SiteRecord>> {
        if !self.local.exists() {
            log::debug!("File {} not found", self.local.path().display());
            return self.remote.fetch_records();
        }
        match self.local.fetch_records() {
            Ok(records) if !records.is_empty() => Ok(records),
            Ok(_) => {
                log::debug!("No records in {}", self.local.path().display());
                self.remote.fetch_records()
            }
            Err(err) => {
                log::warn!(
                    "Could not load {}, fetching contents from the service guide: {err}",
                    self.local.path().display()
                );
                self.remote.fetch_records()
            }
        }
    }
}
