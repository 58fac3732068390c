use anyhow::Result;
use log::info;

use crate::cli::ListArgs;
use crate::common::setup_logging;
use crate::engine::{apply, distinct_years, Query, SortKey};
use crate::loader::load_document;

pub fn run_list(args: ListArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let pubs = match load_document(&args.data).and_then(|d| d.publications) {
        Some(p) => p,
        None => {
            println!("Publications will appear after the first Scholar sync.");
            return Ok(());
        }
    };

    if args.years {
        for year in distinct_years(&pubs) {
            println!("{}", year);
        }
        return Ok(());
    }

    let query = Query {
        text: args.query.clone(),
        year: args.year.clone(),
        category: args.category.clone(),
    };
    let list = apply(&pubs, &query, SortKey::parse(&args.sort));
    info!("{} of {} publications match", list.len(), pubs.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    for p in &list {
        let title = match p.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled",
        };
        let cited = p
            .cited_by
            .map(|n| format!("  [cited by {}]", n))
            .unwrap_or_default();
        println!(
            "{:>4}  {} — {} · {}{}",
            p.year_str(),
            title,
            p.authors.as_deref().unwrap_or(""),
            p.venue.as_deref().unwrap_or(""),
            cited
        );
    }

    Ok(())
}
