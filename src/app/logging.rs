//! Crawl progress logging.

use log::info;
use std::time::Instant;

/// Logs a one-line progress update for the running crawl.
///
/// Called once per dequeued page, so a long crawl shows steady movement in
/// the log rather than a silent gap between seed and report.
pub fn log_progress(start_time: Instant, crawled: usize, budget: usize, frontier_len: usize) {
    let elapsed = start_time.elapsed().as_secs_f64();
    let rate = if elapsed > 0.0 {
        crawled as f64 / elapsed
    } else {
        0.0
    };
    info!(
        "Crawled {}/{} pages ({} queued) in {:.1}s ({:.2} pages/sec)",
        crawled, budget, frontier_len, elapsed, rate
    );
}
