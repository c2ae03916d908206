//! Generator configuration
//!
//! Assembled from CLI arguments; only the record count and output path are
//! validated. Reversed numeric ranges are accepted and reordered by the
//! sampler.

use chrono::{Local, NaiveDateTime, NaiveTime};
use radar_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Generation parameters for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of records to generate
    pub num_records: usize,

    /// Seed for deterministic generation; entropy-seeded when absent
    pub seed: Option<u64>,

    /// Lookback window in days for timestamp sampling
    pub days_back: i64,

    /// Latitude bounds (degrees)
    pub lat_min: f64,
    pub lat_max: f64,

    /// Longitude bounds (degrees)
    pub long_min: f64,
    pub long_max: f64,

    /// Temperature bounds (Celsius)
    pub temp_min: f64,
    pub temp_max: f64,

    /// Measured speed bounds (km/h)
    pub speed_min: u32,
    pub speed_max: u32,

    /// Vehicle model year bounds
    pub year_min: i32,
    pub year_max: i32,

    /// Locale for the remark catalog (pt_BR uses the Portuguese set)
    pub locale: String,

    /// Anchor for timestamp sampling and vehicle age
    pub reference_time: NaiveDateTime,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_records: 1000,
            seed: None,
            days_back: 30,
            lat_min: -33.7,
            lat_max: 5.2,
            long_min: -73.9,
            long_max: -35.3,
            temp_min: 15.0,
            temp_max: 40.0,
            speed_min: 0,
            speed_max: 120,
            year_min: 2010,
            year_max: 2023,
            locale: "pt_BR".to_string(),
            reference_time: Local::now().naive_local(),
        }
    }
}

impl GeneratorConfig {
    /// Timestamp anchor for a run
    ///
    /// Seeded runs anchor to local midnight so reruns within the same day
    /// produce byte-identical output; unseeded runs use the wall clock.
    pub fn reference_time_for(seed: Option<u64>) -> NaiveDateTime {
        let now = Local::now().naive_local();
        match seed {
            Some(_) => now.date().and_time(NaiveTime::MIN),
            None => now,
        }
    }

    /// Startup validation; everything not checked here proceeds
    /// unconditionally.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_records == 0 {
            return Err(ConfigError::InvalidRecordCount);
        }
        Ok(())
    }
}
