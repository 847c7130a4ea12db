/// Progress reporting for a project scan
///
/// Emits throttled `tracing` events so stdout stays free; safe to share
/// across the rayon workers that parse units.
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::info;

const REPORT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parsing,
    PageObjects,
    TestCases,
}

impl Phase {
    fn label(&self) -> &'static str {
        match self {
            Phase::Parsing => "Parsing sources",
            Phase::PageObjects => "Building page objects",
            Phase::TestCases => "Extracting test cases",
        }
    }
}

pub struct ProgressReporter {
    start_time: Instant,
    total_files: usize,
    processed: AtomicUsize,
    last_report: Mutex<Instant>,
}

impl ProgressReporter {
    pub fn new(total_files: usize) -> Self {
        info!("🚀 Starting extraction: {} Java files", total_files);
        let now = Instant::now();
        Self {
            start_time: now,
            total_files,
            processed: AtomicUsize::new(0),
            last_report: Mutex::new(now),
        }
    }

    pub fn phase(&self, phase: Phase) {
        info!("📋 {}", phase.label());
    }

    /// Count one finished unit; reports at most every 100ms, and always at the end
    pub fn tick(&self) -> usize {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;

        let Ok(mut last) = self.last_report.lock() else {
            return processed;
        };
        let now = Instant::now();
        if now.duration_since(*last) < REPORT_INTERVAL && processed < self.total_files {
            return processed;
        }
        *last = now;

        let pct = if self.total_files > 0 {
            (processed as f64 / self.total_files as f64 * 100.0) as u32
        } else {
            0
        };
        info!("⚡ Progress: {}/{} ({}%)", processed, self.total_files, pct);
        processed
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    pub fn complete(&self, page_objects: usize, test_cases: usize) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        info!(
            "✅ Extraction complete: {} page objects, {} test cases from {} files in {:.2}s",
            page_objects, test_cases, self.total_files, elapsed
        );
    }
}
