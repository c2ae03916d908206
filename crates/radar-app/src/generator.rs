//! Field sampler and record generation
//!
//! One RNG stream drives record ids and every field draw, advanced in
//! record-index order, so a fixed seed reproduces the whole run.

use chrono::{Datelike, Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use radar_domain::service::{classify, generate_plate, vehicle_age, ClassifierInput};
use radar_domain::DetectionRecord;
use radar_types::{
    Direction, PlateFormat, PlateType, RoadCondition, TrafficCondition, VehicleType,
    VisibilityCondition, WeatherCondition,
};

use crate::config::GeneratorConfig;
use crate::constants::locations::{
    camera_id, posted_limit_for, CAMERA_HIGHWAY_MAX, CAMERA_HIGHWAY_MIN, CITIES, STATES,
};
use crate::constants::remarks::remarks_for;
use crate::constants::vehicles::{makes_for, VEHICLE_COLORS};

/// Probability that a record carries an operator remark
const REMARK_RATE: f64 = 0.2;

/// Generate all records for a run
pub fn generate_records(config: &GeneratorConfig) -> Vec<DetectionRecord> {
    generate_records_with(config, |_| {})
}

/// Generate all records, invoking `on_record` with each finished index
pub fn generate_records_with<F>(config: &GeneratorConfig, mut on_record: F) -> Vec<DetectionRecord>
where
    F: FnMut(usize),
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..config.num_records)
        .map(|index| {
            let record = generate_record(&mut rng, config, index);
            on_record(index);
            record
        })
        .collect()
}

fn generate_record<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    index: usize,
) -> DetectionRecord {
    let record_id = next_record_id(rng);

    let plate_format = *pick(rng, &PlateFormat::ALL);
    let plate_number = generate_plate(rng, plate_format);
    let plate_state = pick(rng, STATES).to_string();
    let plate_type = *pick(rng, &PlateType::ALL);

    let vehicle_type = *pick(rng, &VehicleType::ALL);
    let make_entry = pick(rng, makes_for(vehicle_type));
    let vehicle_make = make_entry.make.to_string();
    let vehicle_model = pick(rng, make_entry.models).to_string();
    let vehicle_color = pick(rng, VEHICLE_COLORS).to_string();
    let vehicle_year = uniform_i32(rng, config.year_min, config.year_max);

    let city = pick(rng, CITIES).to_string();
    let speed_limit = posted_limit_for(&city);

    let road_condition = *pick(rng, &RoadCondition::ALL);
    let weather_condition = *pick(rng, &WeatherCondition::ALL);
    let traffic_condition = *pick(rng, &TrafficCondition::ALL);
    let visibility = *pick(rng, &VisibilityCondition::ALL);
    let direction = *pick(rng, &Direction::ALL);

    let timestamp = sample_timestamp(rng, config.reference_time, config.days_back);
    let latitude = round_to(uniform_f64(rng, config.lat_min, config.lat_max), 6);
    let longitude = round_to(uniform_f64(rng, config.long_min, config.long_max), 6);
    let temperature = round_to(uniform_f64(rng, config.temp_min, config.temp_max), 1);
    let camera = camera_id(rng.gen_range(CAMERA_HIGHWAY_MIN..=CAMERA_HIGHWAY_MAX));
    let image_path = format!("/images/capture_{:04}.jpg", index);
    let ocr_confidence = round_to(uniform_f64(rng, 0.70, 1.0), 2);

    let speed = uniform_u32(rng, config.speed_min, config.speed_max);

    let remarks = if rng.gen_bool(REMARK_RATE) {
        pick(rng, remarks_for(&config.locale)).to_string()
    } else {
        String::new()
    };

    let infraction = classify(
        rng,
        &ClassifierInput {
            speed,
            posted_limit: speed_limit,
            road_condition,
            weather_condition,
            vehicle_type,
            vehicle_age: vehicle_age(vehicle_year, config.reference_time.year()),
        },
    );

    DetectionRecord {
        record_id,
        plate_number,
        plate_format,
        plate_state,
        plate_type,
        vehicle_type,
        vehicle_make,
        vehicle_model,
        vehicle_color,
        vehicle_year,
        city,
        speed_limit,
        road_condition,
        weather_condition,
        traffic_condition,
        visibility,
        direction,
        timestamp,
        latitude,
        longitude,
        temperature,
        camera_id: camera,
        image_path,
        ocr_confidence,
        speed,
        infraction,
        remarks,
    }
}

/// Record id drawn from the run's RNG stream
///
/// Seeded runs get stable ids this way; unseeded runs still get valid v4
/// uuids from the entropy-seeded stream.
fn next_record_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let bytes: [u8; 16] = rng.gen();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

fn sample_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    reference: NaiveDateTime,
    days_back: i64,
) -> NaiveDateTime {
    reference
        - Duration::days(uniform_i64(rng, 0, days_back))
        - Duration::hours(rng.gen_range(0..24))
        - Duration::minutes(rng.gen_range(0..60))
        - Duration::seconds(rng.gen_range(0..60))
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

// The uniform_* helpers reorder reversed bounds instead of rejecting them

fn uniform_u32<R: Rng + ?Sized>(rng: &mut R, a: u32, b: u32) -> u32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

fn uniform_i32<R: Rng + ?Sized>(rng: &mut R, a: i32, b: i32) -> i32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

fn uniform_i64<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

fn uniform_f64<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::vehicles::models_for;
    use chrono::NaiveDate;

    fn fixed_config(num_records: usize, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            num_records,
            seed: Some(seed),
            reference_time: NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_run() {
        let config = fixed_config(50, 42);
        let first = generate_records(&config);
        let second = generate_records(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generate_records(&fixed_config(50, 1));
        let second = generate_records(&fixed_config(50, 2));
        assert_ne!(first, second);
    }

    #[test]
    fn test_make_and_model_match_vehicle_type() {
        let records = generate_records(&fixed_config(300, 7));
        for record in &records {
            let models = models_for(record.vehicle_type, &record.vehicle_make)
                .unwrap_or_else(|| panic!("{} is not a {} make", record.vehicle_make, record.vehicle_type));
            assert!(
                models.contains(&record.vehicle_model.as_str()),
                "{} is not a {} {} model",
                record.vehicle_model,
                record.vehicle_make,
                record.vehicle_type
            );
        }
    }

    #[test]
    fn test_field_bounds() {
        let config = fixed_config(300, 9);
        let records = generate_records(&config);
        for record in &records {
            assert!(record.ocr_confidence >= 0.70 && record.ocr_confidence <= 1.0);
            assert!(record.vehicle_year >= config.year_min && record.vehicle_year <= config.year_max);
            assert!(record.speed >= config.speed_min && record.speed <= config.speed_max);
            assert!(record.latitude >= config.lat_min && record.latitude <= config.lat_max);
            assert!(record.longitude >= config.long_min && record.longitude <= config.long_max);
            assert!(record.temperature >= config.temp_min && record.temperature <= config.temp_max);
            assert_eq!(record.speed_limit, posted_limit_for(&record.city));
        }
    }

    #[test]
    fn test_timestamps_inside_lookback_window() {
        let config = fixed_config(300, 11);
        let records = generate_records(&config);
        let earliest = config.reference_time
            - Duration::days(config.days_back)
            - Duration::seconds(23 * 3600 + 59 * 60 + 59);
        for record in &records {
            assert!(record.timestamp <= config.reference_time);
            assert!(record.timestamp >= earliest);
        }
    }

    #[test]
    fn test_image_path_follows_index() {
        let records = generate_records(&fixed_config(5, 3));
        assert_eq!(records[0].image_path, "/images/capture_0000.jpg");
        assert_eq!(records[4].image_path, "/images/capture_0004.jpg");
    }

    #[test]
    fn test_record_ids_unique() {
        let records = generate_records(&fixed_config(200, 5));
        let mut ids: Vec<_> = records.iter().map(|r| r.record_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_reversed_speed_range_is_reordered() {
        let config = GeneratorConfig {
            speed_min: 120,
            speed_max: 0,
            ..fixed_config(100, 13)
        };
        let records = generate_records(&config);
        for record in &records {
            assert!(record.speed <= 120);
        }
    }

    #[test]
    fn test_callback_sees_every_index() {
        let mut seen = Vec::new();
        let records = generate_records_with(&fixed_config(10, 17), |index| seen.push(index));
        assert_eq!(records.len(), 10);
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_rounding_precision() {
        assert_eq!(round_to(0.123456789, 6), 0.123457);
        assert_eq!(round_to(27.349, 1), 27.3);
        assert_eq!(round_to(0.706, 2), 0.71);
    }
}
