//! Allocator policy configuration.
//!
//! Defaults reproduce the reference policy: three reinforcement sessions
//! per deadline, one-hour blocks, 09:00 when a slot carries no time.
//!
//! ```
//! use u_revision::config::PlannerConfig;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     [allocator]
//!     reinforcement_cap = 2
//! "#).unwrap();
//! assert_eq!(config.allocator.reinforcement_cap, 2);
//! assert_eq!(config.allocator.session_minutes, 60);
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::PlanningWindow;

/// Allocation policy parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Maximum pre-deadline sessions placed per deadline.
    pub reinforcement_cap: usize,
    /// Start time for entries whose slot has no parseable time.
    #[serde(with = "hh_mm")]
    pub default_session_time: NaiveTime,
    /// Nominal session length (minutes).
    pub session_minutes: u32,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            reinforcement_cap: 3,
            default_session_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            session_minutes: 60,
        }
    }
}

impl AllocatorConfig {
    /// Sets the reinforcement cap.
    pub fn with_reinforcement_cap(mut self, cap: usize) -> Self {
        self.reinforcement_cap = cap;
        self
    }

    /// Sets the default session start time.
    pub fn with_default_session_time(mut self, time: NaiveTime) -> Self {
        self.default_session_time = time;
        self
    }

    /// Sets the nominal session length.
    pub fn with_session_minutes(mut self, minutes: u32) -> Self {
        self.session_minutes = minutes;
        self
    }

    /// Parses an allocator section on its own.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

/// Top-level planner configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Allocation policy.
    pub allocator: AllocatorConfig,
    /// Planning window, if fixed by configuration.
    pub window: Option<PlanningWindow>,
}

impl PlannerConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

/// `HH:MM` (de)serialization for `NaiveTime`.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults() {
        let c = AllocatorConfig::default();
        assert_eq!(c.reinforcement_cap, 3);
        assert_eq!(c.default_session_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(c.session_minutes, 60);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let c = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(c, PlannerConfig::default());
        assert!(c.window.is_none());
    }

    #[test]
    fn test_full_toml() {
        let c = PlannerConfig::from_toml_str(
            r#"
            [allocator]
            reinforcement_cap = 5
            default_session_time = "10:30"
            session_minutes = 45

            [window]
            start = "2025-04-04"
            end = "2025-07-19"
            intensive_cutover = "2025-04-22"
            "#,
        )
        .unwrap();

        assert_eq!(c.allocator.reinforcement_cap, 5);
        assert_eq!(
            c.allocator.default_session_time,
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
        assert_eq!(c.allocator.session_minutes, 45);
        let w = c.window.unwrap();
        assert_eq!(w.start, NaiveDate::from_ymd_opt(2025, 4, 4).unwrap());
        assert_eq!(w.intensive_cutover, NaiveDate::from_ymd_opt(2025, 4, 22).unwrap());
    }

    #[test]
    fn test_bad_time_is_config_error() {
        let err = AllocatorConfig::from_toml_str(r#"default_session_time = "noon""#).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_roundtrip_time_format() {
        let c = AllocatorConfig::default();
        let text = toml::to_string(&c).unwrap();
        assert!(text.contains("default_session_time = \"09:00\""));
    }
}
