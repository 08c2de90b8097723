use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use trunk_fit::catalog::Catalog;
use trunk_fit::io::ext_repr::ExtCatalog;
use trunk_fit::io::import::import_catalog;

use crate::EPOCH;
use crate::config::CliConfig;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse file: {}", path.display()))
}

/// Reads the catalog at `path`, or falls back to the builtin one.
pub fn read_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        None => {
            info!("[IO] no catalog file provided, using the builtin catalog");
            Ok(Catalog::builtin())
        }
        Some(path) => {
            let ext_catalog: ExtCatalog = read_json(path)?;
            import_catalog(&ext_catalog)
                .with_context(|| format!("incorrect catalog: {}", path.display()))
        }
    }
}

pub fn read_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        None => {
            warn!("[IO] no config file provided, use --config-file to provide a custom config");
            Ok(CliConfig::default())
        }
        Some(path) => read_json(path).context("incorrect config file format"),
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;
    info!(
        "[IO] report written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!("[{}] [{:0>2}:{:0>2}:{:0>2}]", record.level(), hours, min, sec);

            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
