//! Static catalogs the field sampler draws from

pub mod locations;
pub mod remarks;
pub mod vehicles;

pub use locations::{camera_id, posted_limit_for, CITIES, DEFAULT_SPEED_LIMIT, STATES};
pub use remarks::remarks_for;
pub use vehicles::{makes_for, models_for, MakeEntry, VEHICLE_COLORS};
