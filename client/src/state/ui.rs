//! Transient UI chrome state: the auto-dismissing error banner.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`session`,
//! `conversion`) so banner timing can evolve independently of protocol
//! data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long the error banner stays visible, fade-out included.
pub const ERROR_BANNER_VISIBLE_MS: u64 = 3500;

/// UI state for transient chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Text of the currently visible error banner, if any.
    pub error_banner: Option<String>,
    /// Monotonic counter identifying the current banner, so a stale
    /// dismissal timer cannot hide a newer banner.
    pub error_banner_seq: u64,
}

impl UiState {
    /// Show the banner with `message`, superseding any current banner.
    /// Returns the sequence number the dismissal timer must present.
    pub fn show_error_banner(&mut self, message: String) -> u64 {
        self.error_banner_seq += 1;
        self.error_banner = Some(message);
        self.error_banner_seq
    }

    /// Hide the banner, but only if `seq` still identifies it.
    pub fn dismiss_error_banner(&mut self, seq: u64) {
        if self.error_banner_seq == seq {
            self.error_banner = None;
        }
    }
}
