//! Driver settings
//!
//! Only the tick driver is configurable. Level geometry and gameplay tuning
//! are compiled in (see [`crate::consts`]).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SUBSTEPS;

/// Tick driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for win-message draws; random when absent
    pub seed: Option<u64>,
    /// Maximum fixed ticks per frame
    pub max_substeps: u32,
    /// Frame deltas above this (seconds) are clamped, e.g. after a stall
    pub max_frame_dt: f32,
    /// Frames simulated by the headless runner
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: 0.1,
            demo_frames: 3600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    ///
    /// Driver values that would panic or stall the tick loop are replaced by
    /// their defaults with a warning.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Replace out-of-range driver values with their defaults
    ///
    /// `max_frame_dt` must be finite and positive; `max_substeps` must allow
    /// at least one tick per frame.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            log::warn!(
                "Invalid max_frame_dt {}; using {}",
                self.max_frame_dt,
                defaults.max_frame_dt
            );
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if self.max_substeps == 0 {
            log::warn!("max_substeps must be at least 1; using {}", defaults.max_substeps);
            self.max_substeps = defaults.max_substeps;
        }
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
        assert_eq!(settings.max_frame_dt, 0.1);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
        assert_eq!(settings.demo_frames, 3600);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ seed: nope").is_err());
        assert!(Settings::from_json(r#"{ "max_substeps": -1 }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            max_substeps: 4,
            max_frame_dt: 0.05,
            demo_frames: 10,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_non_positive_frame_clamp_falls_back() {
        let settings = Settings::from_json(r#"{ "seed": 1, "max_frame_dt": -0.5 }"#).unwrap();
        assert_eq!(settings.seed, Some(1));
        assert_eq!(settings.max_frame_dt, 0.1);

        let settings = Settings::from_json(r#"{ "max_frame_dt": 0.0 }"#).unwrap();
        assert_eq!(settings.max_frame_dt, 0.1);
    }

    #[test]
    fn test_non_finite_frame_clamp_falls_back() {
        let settings = Settings {
            max_frame_dt: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.max_frame_dt, 0.1);

        let settings = Settings {
            max_frame_dt: f32::INFINITY,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.max_frame_dt, 0.1);
    }

    #[test]
    fn test_zero_substeps_falls_back() {
        let settings = Settings::from_json(r#"{ "max_substeps": 0 }"#).unwrap();
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
    }

    #[test]
    fn test_valid_driver_values_kept() {
        let settings = Settings::from_json(r#"{ "max_substeps": 1, "max_frame_dt": 0.25 }"#).unwrap();
        assert_eq!(settings.max_substeps, 1);
        assert_eq!(settings.max_frame_dt, 0.25);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/stealth-chase.json"));
        assert_eq!(settings, Settings::default());
    }
}
