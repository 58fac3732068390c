use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::BuildArgs;
use crate::common::{format_elapsed, setup_logging, Publication, ScholarDoc};
use crate::engine::{apply, Query, SortKey};
use crate::loader::load_document;
use crate::page::counters::format_count;
use crate::page::{fill_element, footer_year, highlight_active, inject_partials, load_partial};
use crate::render::pubs::METRICS_PENDING;
use crate::render::{render_featured, render_list, PLACEHOLDER};

/// Assemble every top-level page: partials first, then nav highlighting
/// against the injected markup, then the footer year and data mounts.
pub fn run_build(args: BuildArgs) -> Result<()> {
    setup_logging(&args.log_level)?;
    let start = Instant::now();

    let header = load_partial(&args.partials, "header.html");
    let footer = load_partial(&args.partials, "footer.html");
    if header.is_none() {
        warn!("header partial missing; header mounts left unpopulated");
    }
    if footer.is_none() {
        warn!("footer partial missing; footer mounts left unpopulated");
    }

    let doc = load_document(&args.data);
    if doc.is_none() {
        warn!("No scholar data; pages get the placeholder state");
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory {}", args.output))?;

    let year = footer_year().to_string();
    let mut pages_written = 0;

    let entries = fs::read_dir(&args.site)
        .with_context(|| format!("Failed to read site directory {}", args.site))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        let html = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read page {}", path.display()))?;
        let html = inject_partials(&html, header.as_deref(), footer.as_deref());
        let html = highlight_active(&html, &name);
        let html = fill_element(&html, "year", &year);
        let html = apply_data_mounts(&html, doc.as_ref());

        let out_path = Path::new(&args.output).join(&name);
        fs::write(&out_path, html)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        info!("Assembled {}", name);
        pages_written += 1;
    }

    info!(
        "Built {} pages in {}",
        pages_written,
        format_elapsed(start.elapsed())
    );
    Ok(())
}

/// Fill the data-driven mounts a page may carry. Pages without a given
/// mount are left alone; a missing document degrades to the placeholder
/// list, an empty pub-updated label, the pending metrics label, and
/// untouched (empty) KPI counters.
fn apply_data_mounts(html: &str, doc: Option<&ScholarDoc>) -> String {
    let mut out = match doc.and_then(|d| d.publications.as_ref()) {
        Some(pubs) => {
            let list: Vec<&Publication> = apply(pubs, &Query::default(), SortKey::SourceOrder);
            let filled = fill_element(html, "pub-list", &render_list(&list));
            let filled = fill_element(&filled, "featured-pubs", &render_featured(pubs, 3));
            fill_element(&filled, "kpi-pubs", &format_count(pubs.len() as u64))
        }
        None => fill_element(html, "pub-list", PLACEHOLDER),
    };

    match doc.and_then(|d| d.metrics.as_ref()) {
        Some(m) => {
            let updated = format!("Updated: {}", m.last_updated.as_deref().unwrap_or(""));
            out = fill_element(&out, "pub-updated", &updated);
            out = fill_element(&out, "metrics-updated", &updated);
            out = fill_element(&out, "kpi-citations", &format_count(m.citations.unwrap_or(0)));
            out = fill_element(&out, "kpi-hindex", &format_count(m.hindex.unwrap_or(0)));
            out = fill_element(&out, "kpi-i10", &format_count(m.i10.unwrap_or(0)));
        }
        None => {
            out = fill_element(&out, "pub-updated", "");
            out = fill_element(&out, "metrics-updated", METRICS_PENDING);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Metrics;

    fn doc() -> ScholarDoc {
        ScholarDoc {
            metrics: Some(Metrics {
                citations: Some(1234),
                hindex: Some(12),
                i10: Some(15),
                last_updated: Some("2026-08-30".to_string()),
            }),
            publications: Some(vec![Publication {
                title: Some("A".to_string()),
                year: Some(2020),
                ..Default::default()
            }]),
        }
    }

    #[test]
    fn test_data_mounts_filled() {
        let html = concat!(
            r#"<div id="pub-list"></div>"#,
            r#"<span id="pub-updated"></span>"#,
            r#"<span id="kpi-citations"></span>"#,
            r#"<span id="kpi-pubs"></span>"#
        );
        let out = apply_data_mounts(html, Some(&doc()));
        assert!(out.contains("pub-title'>A<"));
        assert!(out.contains("Updated: 2026-08-30"));
        assert!(out.contains(r#"<span id="kpi-citations">1,234</span>"#));
        assert!(out.contains(r#"<span id="kpi-pubs">1</span>"#));
    }

    #[test]
    fn test_missing_doc_degrades_gracefully() {
        let html = concat!(
            r#"<div id="pub-list"></div>"#,
            r#"<span id="pub-updated">old</span>"#,
            r#"<span id="metrics-updated"></span>"#,
            r#"<span id="kpi-citations"></span>"#
        );
        let out = apply_data_mounts(html, None);
        assert!(out.contains("Publications will appear after the first Scholar sync."));
        assert!(out.contains(r#"<span id="pub-updated"></span>"#));
        assert!(out.contains(METRICS_PENDING));
        // KPI counters stay silently empty
        assert!(out.contains(r#"<span id="kpi-citations"></span>"#));
    }

    #[test]
    fn test_pages_without_mounts_untouched() {
        let html = "<main><p>About me</p></main>";
        assert_eq!(apply_data_mounts(html, Some(&doc())), html);
    }
}
