use std::time::Duration;

/// Format an elapsed duration for log lines ("4.2s", "1m 12s")
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor() as u64;
        let rem = secs - (mins as f64) * 60.0;
        format!("{}m {:.0}s", mins, rem)
    } else {
        format!("{:.1}s", secs)
    }
}
