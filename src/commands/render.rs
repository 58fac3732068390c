use anyhow::{Context, Result};
use log::info;
use std::fs;

use crate::cli::RenderArgs;
use crate::common::setup_logging;
use crate::engine::{apply, Query, SortKey};
use crate::loader::load_document;
use crate::render::{render_featured, render_list, PLACEHOLDER};

pub fn run_render(args: RenderArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let fragment = match load_document(&args.data).and_then(|d| d.publications) {
        None => PLACEHOLDER.to_string(),
        Some(pubs) => match args.featured {
            Some(n) => render_featured(&pubs, n),
            None => {
                let query = Query {
                    text: args.query.clone(),
                    year: args.year.clone(),
                    category: args.category.clone(),
                };
                let list = apply(&pubs, &query, SortKey::parse(&args.sort));
                info!("Rendering {} of {} publications", list.len(), pubs.len());
                render_list(&list)
            }
        },
    };

    if args.output == "-" {
        println!("{}", fragment);
    } else {
        fs::write(&args.output, &fragment)
            .with_context(|| format!("Failed to write {}", args.output))?;
        info!("Wrote fragment to {}", args.output);
    }

    Ok(())
}
