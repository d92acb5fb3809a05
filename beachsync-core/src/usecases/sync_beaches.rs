use super::{
    build_beach, merge_or_create, BatchError, BeachSettings, Outcome, SyncError, SyncReport,
    UpsertError,
};
use crate::{
    entities::SiteRecord,
    gateways::{
        feed::{self, FeedSource},
        store::EntityStore,
    },
    lookup::ReferenceTable,
};
use std::cell::OnceCell;

/// Synchronizes all bathing sites of a feed into an entity store.
///
/// The sites are fetched once and reused for the lifetime of this value.
pub struct BeachSync<'a, F: ?Sized, S: ?Sized> {
    feed: &'a F,
    references: &'a ReferenceTable,
    store: &'a S,
    settings: &'a BeachSettings,
    sites: OnceCell<Vec<SiteRecord>>,
}

impl<'a, F, S> BeachSync<'a, F, S>
where
    F: FeedSource + ?Sized,
    S: EntityStore + ?Sized,
{
    pub fn new(
        feed: &'a F,
        references: &'a ReferenceTable,
        store: &'a S,
        settings: &'a BeachSettings,
    ) -> Self {
        Self {
            feed,
            references,
            store,
            settings,
            sites: OnceCell::new(),
        }
    }

    pub fn bathing_sites(&self) -> feed::Result<&[SiteRecord]> {
        if let Some(sites) = self.sites.get() {
            log::debug!("Returning {} previously fetched bathing sites", sites.len());
            return Ok(sites.as_slice());
        }
        let sites = self.feed.fetch_relevant_records()?;
        Ok(self.sites.get_or_init(|| sites).as_slice())
    }

    /// A failing site never stops the run; all failures are
    /// collected and returned together at the end.
    pub fn run(&self) -> Result<SyncReport, SyncError> {
        let sites = self.bathing_sites()?;
        log::info!("Synchronizing {} bathing sites", sites.len());

        let mut report = SyncReport::default();
        let mut failures = vec![];

        for site in sites {
            match self.sync_site(site) {
                Ok(Outcome::Merged) => report.merged += 1,
                Ok(Outcome::Created) => report.created += 1,
                Err(err) => {
                    log::warn!("Failed to synchronize beach {}: {err}", err.entity_id());
                    failures.push(err);
                }
            }
        }

        log::info!(
            "Merged {} and created {} beaches, {} failed",
            report.merged,
            report.created,
            failures.len()
        );

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(BatchError { failures, report }.into())
        }
    }

    /// Sites without a valid position are never sent to the store.
    fn sync_site(&self, site: &SiteRecord) -> Result<Outcome, UpsertError> {
        let nuts_code = self.references.nuts_code(&site.id);
        let beach = build_beach(self.settings, site, nuts_code);
        if !site.pos.is_valid() {
            return Err(UpsertError::InvalidPosition { id: beach.id });
        }
        merge_or_create(self.store, beach)
    }
}

pub fn sync_beaches<F, S>(
    feed: &F,
    references: &ReferenceTable,
    store: &S,
    settings: &BeachSettings,
) -> Result<SyncReport, SyncError>
where
    F: FeedSource + ?Sized,
    S: EntityStore + ?Sized,
{
    BeachSync::new(feed, references, store, settings).run()
}
