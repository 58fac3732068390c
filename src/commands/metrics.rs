use anyhow::Result;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::cli::MetricsArgs;
use crate::common::setup_logging;
use crate::loader::load_document;
use crate::page::counters::{counter_value, format_count, COUNTER_DURATION};
use crate::render::pubs::METRICS_PENDING;

pub fn run_metrics(args: MetricsArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let metrics = match load_document(&args.data).and_then(|d| d.metrics) {
        Some(m) => m,
        None => {
            println!("{}", METRICS_PENDING);
            return Ok(());
        }
    };

    let kpis = [
        ("Citations", metrics.citations.unwrap_or(0)),
        ("h-index", metrics.hindex.unwrap_or(0)),
        ("i10-index", metrics.i10.unwrap_or(0)),
    ];

    if args.animate {
        animate(&kpis);
    } else {
        for (label, value) in &kpis {
            println!("{:<10} {}", label, format_count(*value));
        }
    }

    println!("Updated: {}", metrics.last_updated.as_deref().unwrap_or(""));
    Ok(())
}

/// Terminal replay of the KPI counter animation: 1200 ms, ease-out cubic,
/// roughly one frame per 16 ms.
fn animate(kpis: &[(&str, u64)]) {
    let start = Instant::now();
    loop {
        let elapsed = start.elapsed();
        let frame: Vec<String> = kpis
            .iter()
            .map(|(label, target)| format!("{}: {}", label, format_count(counter_value(*target, elapsed))))
            .collect();
        print!("\r{}", frame.join("   "));
        let _ = std::io::stdout().flush();

        if elapsed >= COUNTER_DURATION {
            break;
        }
        std::thread::sleep(Duration::from_millis(16));
    }
    println!();
}
