//! CSV export for detection records
//!
//! Column names follow the upstream dataset layout; calendar columns are
//! derived from the timestamp at export time.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{Datelike, Timelike};
use radar_domain::DetectionRecord;
use radar_types::{ConfigError, Error, Result};
use serde::Serialize;

/// Flat export row; field names become the CSV header
#[derive(Debug, Serialize)]
struct CsvRow {
    record_id: String,
    license_plate_number: String,
    plate_format: String,
    plate_state_region: String,
    plate_type: String,
    vehicle_type: String,
    vehicle_make: String,
    vehicle_model: String,
    vehicle_color: String,
    vehicle_year: i32,
    city: String,
    speed_limit: u32,
    timestamp: String,
    latitude: f64,
    longitude: f64,
    camera_device_id: String,
    image_path: String,
    ocr_confidence_score: f64,
    weather_conditions: String,
    temperature: f64,
    visibility_lighting: String,
    road_conditions: String,
    traffic_conditions: String,
    speed: u32,
    direction_of_travel: String,
    infraction: String,
    error_codes_remarks: String,
    day_of_week: String,
    hour_of_day: u32,
    week: u32,
    month: u32,
    year: i32,
}

/// Open the output file for writing
///
/// Called before generation so an unwritable path fails the run at
/// startup as a configuration error.
pub fn open_csv_writer(path: &Path) -> Result<csv::Writer<File>> {
    csv::Writer::from_path(path).map_err(|e| {
        Error::Config(ConfigError::OutputNotWritable(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })
}

/// Serialize all records, header first, and flush
pub fn write_records<W: Write>(
    writer: &mut csv::Writer<W>,
    records: &[DetectionRecord],
) -> Result<()> {
    for record in records {
        writer
            .serialize(to_row(record))
            .map_err(|e| Error::Csv(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

fn to_row(record: &DetectionRecord) -> CsvRow {
    let ts = record.timestamp;
    CsvRow {
        record_id: record.record_id.to_string(),
        license_plate_number: record.plate_number.clone(),
        plate_format: record.plate_format.label().to_string(),
        plate_state_region: record.plate_state.clone(),
        plate_type: record.plate_type.label().to_string(),
        vehicle_type: record.vehicle_type.label().to_string(),
        vehicle_make: record.vehicle_make.clone(),
        vehicle_model: record.vehicle_model.clone(),
        vehicle_color: record.vehicle_color.clone(),
        vehicle_year: record.vehicle_year,
        city: record.city.clone(),
        speed_limit: record.speed_limit,
        timestamp: ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        latitude: record.latitude,
        longitude: record.longitude,
        camera_device_id: record.camera_id.clone(),
        image_path: record.image_path.clone(),
        ocr_confidence_score: record.ocr_confidence,
        weather_conditions: record.weather_condition.label().to_string(),
        temperature: record.temperature,
        visibility_lighting: record.visibility.label().to_string(),
        road_conditions: record.road_condition.label().to_string(),
        traffic_conditions: record.traffic_condition.label().to_string(),
        speed: record.speed,
        direction_of_travel: record.direction.label().to_string(),
        infraction: record.infraction.description().to_string(),
        error_codes_remarks: record.remarks.clone(),
        day_of_week: ts.format("%A").to_string(),
        hour_of_day: ts.hour(),
        week: ts.iso_week().week(),
        month: ts.month(),
        year: ts.year(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use radar_types::{
        Direction, Infraction, PlateFormat, PlateType, RoadCondition, TrafficCondition,
        VehicleType, VisibilityCondition, WeatherCondition,
    };
    use uuid::Uuid;

    fn sample_record() -> DetectionRecord {
        DetectionRecord {
            record_id: Uuid::nil(),
            plate_number: "ABC1D23".to_string(),
            plate_format: PlateFormat::Mercosur,
            plate_state: "São Paulo".to_string(),
            plate_type: PlateType::Standard,
            vehicle_type: VehicleType::Car,
            vehicle_make: "Volkswagen".to_string(),
            vehicle_model: "Gol".to_string(),
            vehicle_color: "Silver".to_string(),
            vehicle_year: 2018,
            city: "São Paulo".to_string(),
            speed_limit: 50,
            road_condition: RoadCondition::Dry,
            weather_condition: WeatherCondition::Clear,
            traffic_condition: TrafficCondition::Moderate,
            visibility: VisibilityCondition::Daytime,
            direction: Direction::Northbound,
            timestamp: NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(14, 30, 5)
                .unwrap(),
            latitude: -23.55052,
            longitude: -46.633308,
            temperature: 27.5,
            camera_id: "BR-116".to_string(),
            image_path: "/images/capture_0000.jpg".to_string(),
            ocr_confidence: 0.93,
            speed: 62,
            infraction: Infraction::MinorSpeeding,
            remarks: String::new(),
        }
    }

    #[test]
    fn test_derived_calendar_columns() {
        let row = to_row(&sample_record());
        // 2025-06-15 is a Sunday in ISO week 24
        assert_eq!(row.day_of_week, "Sunday");
        assert_eq!(row.hour_of_day, 14);
        assert_eq!(row.week, 24);
        assert_eq!(row.month, 6);
        assert_eq!(row.year, 2025);
        assert_eq!(row.timestamp, "2025-06-15 14:30:05");
    }

    #[test]
    fn test_row_uses_catalog_labels() {
        let row = to_row(&sample_record());
        assert_eq!(row.vehicle_type, "Car");
        assert_eq!(row.infraction, "Speeding (up to 20% over limit)");
        assert_eq!(row.plate_format, "Mercosur");
    }

    #[test]
    fn test_written_file_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut writer = open_csv_writer(&path).unwrap();
        let records = vec![sample_record(), sample_record()];
        write_records(&mut writer, &records).unwrap();
        drop(writer);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert!(headers.iter().any(|h| h == "record_id"));
        assert!(headers.iter().any(|h| h == "infraction"));
        assert!(headers.iter().any(|h| h == "day_of_week"));
        assert_eq!(reader.records().count(), 2);
    }

    #[test]
    fn test_unwritable_path_is_config_error() {
        let result = open_csv_writer(Path::new("/nonexistent-dir/out.csv"));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::OutputNotWritable(_)))
        ));
    }
}
