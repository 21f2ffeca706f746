//! Conversion-run state accumulated from `convert_file` result frames.

#[cfg(test)]
#[path = "conversion_test.rs"]
mod conversion_test;

use crate::net::types::ConvertFileResult;

/// State of the current (or most recent) batch conversion run.
#[derive(Clone, Debug)]
pub struct ConversionState {
    /// Whether a run has been started and not yet finished.
    pub running: bool,
    /// Human-readable status line for the status bar.
    pub status_message: String,
    /// Files converted successfully since the run started.
    pub converted: usize,
    /// Files that failed since the run started.
    pub failed: usize,
    /// Output location of the most recently converted file.
    pub last_output_path: Option<String>,
}

impl Default for ConversionState {
    fn default() -> Self {
        Self {
            running: false,
            status_message: "Ready".to_owned(),
            converted: 0,
            failed: 0,
            last_output_path: None,
        }
    }
}

impl ConversionState {
    /// Reset the counters and mark a run as started.
    pub fn begin_run(&mut self) {
        self.running = true;
        self.converted = 0;
        self.failed = 0;
        self.last_output_path = None;
        self.status_message = "Converting...".to_owned();
    }

    /// Fold one per-file result into the run.
    pub fn record_result(&mut self, result: &ConvertFileResult) {
        if result.success {
            self.converted += 1;
            if let Some(path) = &result.output_path {
                self.last_output_path = Some(path.clone());
            }
        } else {
            self.failed += 1;
        }
        self.status_message = format!("Converted {} file(s), {} failed", self.converted, self.failed);
    }

    /// Mark the run as finished.
    pub fn finish_run(&mut self) {
        self.running = false;
        self.status_message = format!("Done: {} converted, {} failed", self.converted, self.failed);
    }
}
