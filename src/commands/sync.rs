use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::cli::SyncArgs;
use crate::common::{create_spinner, format_elapsed, setup_logging, Metrics, ScholarDoc};
use crate::loader::{create_client, fetch_document};

pub fn run_sync(args: SyncArgs) -> Result<()> {
    setup_logging(&args.log_level)?;
    let start = Instant::now();
    info!("Syncing scholar document from {}", args.url);

    let spinner = create_spinner("Fetching scholar document");
    let rt = tokio::runtime::Runtime::new()?;
    let doc = rt.block_on(async {
        let client = match create_client() {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to create HTTP client: {}", e);
                return None;
            }
        };
        fetch_document(&client, &args.url, Some(Duration::from_secs(args.timeout))).await
    });
    spinner.finish_and_clear();

    // A failed sync never fails the pipeline: keep what is on disk, or seed
    // an empty document so the site renders its placeholder state.
    match doc {
        Some(mut doc) => {
            normalize(&mut doc);
            write_document(&args.output, &doc)?;
            let count = doc.publications.as_ref().map(|p| p.len()).unwrap_or(0);
            info!(
                "Synced {} publications to {} in {}",
                count,
                args.output,
                format_elapsed(start.elapsed())
            );
        }
        None if Path::new(&args.output).exists() => {
            warn!("Upstream fetch failed; keeping existing {}", args.output);
        }
        None => {
            warn!("Upstream fetch failed; writing empty document to {}", args.output);
            write_document(&args.output, &ScholarDoc::empty())?;
        }
    }

    Ok(())
}

/// Stamp the sync date and put publications in the order the site expects
/// as its default: year descending, citations breaking ties.
fn normalize(doc: &mut ScholarDoc) {
    let metrics = doc.metrics.get_or_insert_with(Metrics::default);
    if let Ok(today) = OffsetDateTime::now_utc()
        .date()
        .format(format_description!("[year]-[month]-[day]"))
    {
        metrics.last_updated = Some(today);
    }

    let pubs = doc.publications.get_or_insert_with(Vec::new);
    pubs.sort_by(|a, b| {
        (b.year.unwrap_or(0), b.cited_by.unwrap_or(0))
            .cmp(&(a.year.unwrap_or(0), a.cited_by.unwrap_or(0)))
    });
}

fn write_document(path: &str, doc: &ScholarDoc) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    let body = serde_json::to_string_pretty(doc)?;
    fs::write(path, body).with_context(|| format!("Failed to write {}", path))?;
    Ok(())
}
