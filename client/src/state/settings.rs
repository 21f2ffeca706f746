//! Conversion settings: voice, quality, and input folder.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

/// User-tunable conversion settings, pushed to the server via `set`.
#[derive(Clone, Debug)]
pub struct SettingsState {
    /// Currently selected target voice, e.g. `"fem 1"`.
    pub voice: String,
    /// Quality/latency trade-off for the conversion models.
    pub quality: Quality,
    /// Folder containing the audio files to convert.
    pub input_folder: Option<String>,
    /// Voices offered by the server; starts as the built-in catalog until
    /// a `voices` response arrives.
    pub available_voices: Vec<String>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            voice: "fem 1".to_owned(),
            quality: Quality::High,
            input_folder: None,
            available_voices: default_voices(),
        }
    }
}

/// The built-in voice catalog: ten feminine and ten masculine presets.
#[must_use]
pub fn default_voices() -> Vec<String> {
    let mut voices = (1..=10).map(|i| format!("fem {i}")).collect::<Vec<_>>();
    voices.extend((1..=10).map(|i| format!("male {i}")));
    voices
}

/// Conversion quality levels with their processing-window latency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quality {
    /// Best quality, 1.5 s processing window.
    #[default]
    High,
    /// Balanced, 1.0 s window.
    Medium,
    /// Fastest, 0.5 s window.
    Low,
}

impl Quality {
    /// All levels, in the order offered to the user.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Label shown in the picker and sent to the server.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High (1.5s)",
            Self::Medium => "Medium (1.0s)",
            Self::Low => "Low (0.5s)",
        }
    }

    /// Parse a picker label back into a level.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }

    /// Length of the processing window in seconds.
    #[must_use]
    pub fn latency_secs(self) -> f64 {
        match self {
            Self::High => 1.5,
            Self::Medium => 1.0,
            Self::Low => 0.5,
        }
    }
}
