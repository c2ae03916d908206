//! Detection record type definitions

use chrono::NaiveDateTime;
use radar_types::{
    Direction, Infraction, PlateFormat, PlateType, RoadCondition, TrafficCondition,
    VehicleType, VisibilityCondition, WeatherCondition,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One simulated camera detection
///
/// Built once by the field sampler, classified once, then serialized.
/// `speed_limit` is the unadjusted posted limit for `city`; condition
/// derating is internal to the classifier and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub record_id: Uuid,

    /// Plate number in the layout named by `plate_format`
    pub plate_number: String,
    pub plate_format: PlateFormat,
    /// Federative unit of registration (e.g. "São Paulo")
    pub plate_state: String,
    pub plate_type: PlateType,

    pub vehicle_type: VehicleType,
    /// Must be one of the makes valid for `vehicle_type`
    pub vehicle_make: String,
    /// Must be one of the models valid for (`vehicle_type`, `vehicle_make`)
    pub vehicle_model: String,
    pub vehicle_color: String,
    pub vehicle_year: i32,

    pub city: String,
    /// Posted limit in km/h, unadjusted
    pub speed_limit: u32,
    pub road_condition: RoadCondition,
    pub weather_condition: WeatherCondition,
    pub traffic_condition: TrafficCondition,
    pub visibility: VisibilityCondition,
    pub direction: Direction,
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub camera_id: String,
    pub image_path: String,
    /// OCR confidence in [0.70, 1.00]
    pub ocr_confidence: f64,

    /// Measured speed in km/h
    pub speed: u32,
    pub infraction: Infraction,

    /// Operator remark; empty for most records
    pub remarks: String,
}
