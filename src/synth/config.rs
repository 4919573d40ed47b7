//! Synthesis configuration record.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Baseline floor distribution used when a per-function count is absent.
pub const DEFAULT_FLOORS_RETAIL: i32 = 3;
pub const DEFAULT_FLOORS_OFFICE: i32 = 34;
pub const DEFAULT_FLOORS_RESIDENTIAL: i32 = 17;
pub const DEFAULT_FLOORS_HOTEL: i32 = 17;

/// Engineering limit on floors per replicated block.
pub const DEFAULT_PER_BLOCK_CAP: u32 = 12;

/// Smallest total story count (function floors plus skylobby, elevator
/// machine room and basement allowance) for the tall-building class.
pub const MIN_TOTAL_FLOORS: u32 = 10;

/// Skylobby + elevator machine room + basement allowance counted toward
/// the building-class minimum.
const EXTRA_FLOORS: u32 = 3;

/// Input parameters consumed at synthesis start.
///
/// Counts are optional; an absent count default-fills from the baseline
/// distribution instead of failing. Negative counts and undersized
/// buildings are rejected by [`Self::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    #[serde(default)]
    pub floors_retail: Option<i32>,
    #[serde(default)]
    pub floors_office: Option<i32>,
    #[serde(default)]
    pub floors_residential: Option<i32>,
    #[serde(default)]
    pub floors_hotel: Option<i32>,
    #[serde(default = "default_per_block_cap")]
    pub per_block_cap: u32,
}

fn default_per_block_cap() -> u32 {
    DEFAULT_PER_BLOCK_CAP
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            floors_retail: None,
            floors_office: None,
            floors_residential: None,
            floors_hotel: None,
            per_block_cap: DEFAULT_PER_BLOCK_CAP,
        }
    }
}

/// Validated, default-filled floor counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorCounts {
    pub retail: u32,
    pub office: u32,
    pub residential: u32,
    pub hotel: u32,
}

impl FloorCounts {
    pub fn total(&self) -> u32 {
        self.retail + self.office + self.residential + self.hotel
    }
}

impl SynthesisConfig {
    /// Checks the configuration and resolves defaults.
    ///
    /// Fatal configuration errors: any negative count, all four counts
    /// zero, or a total below the building-class minimum.
    pub fn validate(&self) -> Result<FloorCounts> {
        if self.per_block_cap == 0 {
            bail!("invalid configuration: per_block_cap must be at least 1");
        }
        let counts = FloorCounts {
            retail: resolve("floors_retail", self.floors_retail, DEFAULT_FLOORS_RETAIL)?,
            office: resolve("floors_office", self.floors_office, DEFAULT_FLOORS_OFFICE)?,
            residential: resolve(
                "floors_residential",
                self.floors_residential,
                DEFAULT_FLOORS_RESIDENTIAL,
            )?,
            hotel: resolve("floors_hotel", self.floors_hotel, DEFAULT_FLOORS_HOTEL)?,
        };
        if counts.total() == 0 {
            bail!("invalid configuration: all four floor counts are zero");
        }
        if counts.total() + EXTRA_FLOORS < MIN_TOTAL_FLOORS {
            bail!(
                "invalid configuration: {} total floors is below the building-class minimum of {}",
                counts.total() + EXTRA_FLOORS,
                MIN_TOTAL_FLOORS
            );
        }
        Ok(counts)
    }
}

fn resolve(field: &str, value: Option<i32>, default: i32) -> Result<u32> {
    let value = value.unwrap_or(default);
    if value < 0 {
        bail!("invalid configuration: {field} is negative: {value}");
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_baseline() {
        let counts = SynthesisConfig::default().validate().unwrap();
        assert_eq!(
            counts,
            FloorCounts {
                retail: 3,
                office: 34,
                residential: 17,
                hotel: 17,
            }
        );
    }

    #[test]
    fn test_partial_defaults() {
        let config = SynthesisConfig {
            floors_retail: Some(0),
            floors_office: Some(20),
            ..Default::default()
        };
        let counts = config.validate().unwrap();
        assert_eq!(counts.retail, 0);
        assert_eq!(counts.office, 20);
        assert_eq!(counts.residential, 17);
        assert_eq!(counts.hotel, 17);
    }

    #[test]
    fn test_negative_count_rejected() {
        let config = SynthesisConfig {
            floors_hotel: Some(-2),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("floors_hotel is negative"));
    }

    #[test]
    fn test_all_zero_rejected() {
        let config = SynthesisConfig {
            floors_retail: Some(0),
            floors_office: Some(0),
            floors_residential: Some(0),
            floors_hotel: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("all four floor counts are zero"));
    }

    #[test]
    fn test_below_minimum_rejected() {
        let config = SynthesisConfig {
            floors_retail: Some(1),
            floors_office: Some(0),
            floors_residential: Some(0),
            floors_hotel: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("building-class minimum"));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = SynthesisConfig {
            per_block_cap: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let config: SynthesisConfig = serde_json::from_str("{\"floors_office\": 20}").unwrap();
        assert_eq!(config.floors_office, Some(20));
        assert_eq!(config.floors_retail, None);
        assert_eq!(config.per_block_cap, DEFAULT_PER_BLOCK_CAP);
    }
}
