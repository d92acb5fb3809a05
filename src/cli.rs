use crate::config::Config;
use anyhow::{Context, Result};
use beachsync_core::{
    gateways::store::EntityStore,
    usecases::{self, SyncReport},
};
use beachsync_gateways::{
    context_broker::ContextBrokerClient,
    entities_to_json_file::EntitiesToJsonFile,
    http, lookup_table,
    service_guide::{LocalCopyOrRemote, ServiceGuideClient, ServiceGuideFile},
};
use clap::Parser;
use std::path::PathBuf;

/// Synchronizes the bathing sites of the service guide into a context broker.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// A file with cross-references from the service guide to NUTS codes and devices
    #[arg(long, value_name = "FILE")]
    pub references: Option<PathBuf>,

    /// A file with the contents of the service guide
    #[arg(long = "sg", value_name = "FILE")]
    pub service_guide_file: Option<PathBuf>,

    /// Write the entities into this directory instead of the context broker
    #[arg(long, value_name = "DIR")]
    pub dry_run: Option<PathBuf>,
}

impl Args {
    fn apply_to(self, cfg: &mut Config) {
        let Self {
            references,
            service_guide_file,
            ..
        } = self;
        if let Some(file) = references {
            cfg.references.file = file;
        }
        if let Some(file) = service_guide_file {
            cfg.service_guide.local_copy = Some(file);
        }
    }
}

pub fn run() -> Result<SyncReport> {
    let args = Args::parse();
    log::debug!("args: {args:?}");

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let dry_run = args.dry_run.clone();
    args.apply_to(&mut cfg);
    log::debug!("config: {cfg:?}");

    let references = lookup_table::load_from_file(&cfg.references.file)
        .context("The cross reference table is required")?;

    let client = http::client(cfg.http.request_timeout)?;

    let remote = ServiceGuideClient::new(&cfg.service_guide.url, client.clone());
    let local = cfg
        .service_guide
        .local_copy
        .as_ref()
        .map(ServiceGuideFile::new);

    let store: Box<dyn EntityStore> = match dry_run {
        Some(dir) => {
            let store = EntitiesToJsonFile::try_new(dir)?;
            log::info!("Dry run: writing entities to {}", store.path().display());
            Box::new(store)
        }
        None => Box::new(ContextBrokerClient::for_broker(&cfg.context_broker.url, client)),
    };

    let report = match local {
        Some(local) => {
            let feed = LocalCopyOrRemote::new(local, remote);
            usecases::sync_beaches(&feed, &references, &*store, &cfg.beaches)?
        }
        None => usecases::sync_beaches(&remote, &references, &*store, &cfg.beaches)?,
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "beachsync",
            "--references",
            "lookup.csv",
            "--sg",
            "serviceguiden.json",
        ])
        .unwrap();
        assert_eq!(args.references, Some(PathBuf::from("lookup.csv")));
        assert_eq!(args.service_guide_file, Some(PathBuf::from("serviceguiden.json")));
        assert!(args.dry_run.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn cli_args_override_config() {
        let args = Args::try_parse_from(["beachsync", "--references", "refs.csv"]).unwrap();
        let mut cfg = Config::try_load_from_file_or_default(Some("does-not-exist.toml")).unwrap();
        let local_copy = cfg.service_guide.local_copy.clone();
        args.apply_to(&mut cfg);
        assert_eq!(cfg.references.file, PathBuf::from("refs.csv"));
        assert_eq!(cfg.service_guide.local_copy, local_copy);
    }
}
