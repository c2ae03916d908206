//! Violation classification service
//!
//! Derives a single infraction label from a record's speed, conditions,
//! vehicle type, and vehicle age. The speeding tier is deterministic; the
//! remaining triggers are Bernoulli trials on the caller-supplied RNG.
//! When several candidates fire, one is drawn uniformly — the label is a
//! single-cause summary, never a full violation report.

use rand::seq::SliceRandom;
use rand::Rng;
use radar_types::{Infraction, RoadCondition, VehicleType, WeatherCondition};

/// Classifier inputs for one record
#[derive(Debug, Clone)]
pub struct ClassifierInput {
    /// Measured speed in km/h
    pub speed: u32,
    /// Unadjusted posted limit in km/h
    pub posted_limit: u32,
    pub road_condition: RoadCondition,
    pub weather_condition: WeatherCondition,
    pub vehicle_type: VehicleType,
    /// Years since the model year, clamped at zero
    pub vehicle_age: u32,
}

/// Vehicle age from model year, clamped at zero for current or
/// future-dated model years.
pub fn vehicle_age(model_year: i32, current_year: i32) -> u32 {
    (current_year - model_year).max(0) as u32
}

/// Posted limit derated for road and weather conditions
///
/// Road penalties are mutually exclusive: Wet/Flooded takes 0.8, else
/// UnderConstruction/Potholed takes 0.7. A Rainy/Stormy weather factor of
/// 0.9 compounds multiplicatively on top of whichever applied.
pub fn effective_limit(
    posted_limit: u32,
    road: RoadCondition,
    weather: WeatherCondition,
) -> f64 {
    let mut limit = posted_limit as f64;
    match road {
        RoadCondition::Wet | RoadCondition::Flooded => limit *= 0.8,
        RoadCondition::UnderConstruction | RoadCondition::Potholed => limit *= 0.7,
        _ => {}
    }
    if matches!(weather, WeatherCondition::Rainy | WeatherCondition::Stormy) {
        limit *= 0.9;
    }
    limit
}

/// Speeding tier against the effective limit, if any
///
/// Excess of up to 20% is minor, up to 50% moderate, beyond that severe.
/// Both boundaries are inclusive on the lower tier.
pub fn speeding_tier(speed: u32, effective_limit: f64) -> Option<Infraction> {
    let speed = speed as f64;
    if speed <= effective_limit {
        return None;
    }
    let excess_pct = (speed - effective_limit) / effective_limit * 100.0;
    Some(if excess_pct <= 20.0 {
        Infraction::MinorSpeeding
    } else if excess_pct <= 50.0 {
        Infraction::ModerateSpeeding
    } else {
        Infraction::SevereSpeeding
    })
}

/// All infraction labels that apply to this record before resolution
///
/// Exposed separately from [`classify`] so the deterministic triggers can
/// be tested in isolation.
pub fn candidate_violations<R: Rng + ?Sized>(
    rng: &mut R,
    input: &ClassifierInput,
) -> Vec<Infraction> {
    let mut candidates = Vec::new();

    let limit = effective_limit(input.posted_limit, input.road_condition, input.weather_condition);
    if let Some(tier) = speeding_tier(input.speed, limit) {
        candidates.push(tier);
    }

    // Age-correlated triggers, probability growing with age
    let age = input.vehicle_age as f64;
    if input.vehicle_age > 10 && rng.gen_bool((0.03 * age / 10.0).min(1.0)) {
        candidates.push(Infraction::UnregisteredVehicle);
    }
    if input.vehicle_age > 8 && rng.gen_bool((0.04 * age / 8.0).min(1.0)) {
        candidates.push(Infraction::MissingEquipment);
    }

    // Unconditional triggers, fixed per-call probabilities
    if rng.gen_bool(0.05) {
        candidates.push(Infraction::RedLight);
    }
    if rng.gen_bool(0.02) {
        candidates.push(Infraction::WrongWay);
    }
    if rng.gen_bool(0.07) {
        candidates.push(Infraction::MobilePhone);
    }
    if input.vehicle_type != VehicleType::Bus && rng.gen_bool(0.04) {
        candidates.push(Infraction::ExclusiveLane);
    }
    if rng.gen_bool(0.06) {
        candidates.push(Infraction::HeadlightsOff);
    }

    // Compared against the unadjusted posted limit, not the effective one
    let risky_road = matches!(
        input.road_condition,
        RoadCondition::Wet | RoadCondition::Flooded | RoadCondition::UnderConstruction
    );
    let risky_weather = matches!(
        input.weather_condition,
        WeatherCondition::Rainy | WeatherCondition::Stormy | WeatherCondition::LowVisibility
    );
    if (risky_road || risky_weather) && input.speed as f64 > 0.7 * input.posted_limit as f64 {
        candidates.push(Infraction::IncompatibleSpeed);
    }

    candidates
}

/// Resolve one record to a single infraction label
///
/// Empty candidate set returns the `No violation` sentinel; otherwise one
/// candidate is drawn uniformly.
pub fn classify<R: Rng + ?Sized>(rng: &mut R, input: &ClassifierInput) -> Infraction {
    let candidates = candidate_violations(rng, input);
    candidates.choose(rng).copied().unwrap_or(Infraction::None)
}
