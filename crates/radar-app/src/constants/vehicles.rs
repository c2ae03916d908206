//! Vehicle make/model catalog, partitioned by vehicle type
//!
//! Makes and models popular on the Brazilian market. The partition by
//! vehicle type is what guarantees the type -> make -> model referential
//! consistency of generated records.

use radar_types::VehicleType;

/// One make and its model range for a given vehicle type
#[derive(Debug, Clone, Copy)]
pub struct MakeEntry {
    pub make: &'static str,
    pub models: &'static [&'static str],
}

pub const VEHICLE_COLORS: &[&str] = &[
    "Black", "White", "Silver", "Gray", "Red", "Blue", "Green", "Yellow", "Brown", "Orange",
];

static CAR_MAKES: &[MakeEntry] = &[
    MakeEntry { make: "Volkswagen", models: &["Gol", "Polo", "Virtus", "Jetta"] },
    MakeEntry { make: "Fiat", models: &["Argo", "Mobi", "Uno", "Cronos"] },
    MakeEntry { make: "Chevrolet", models: &["Onix", "Cruze", "Joy"] },
    MakeEntry { make: "Toyota", models: &["Corolla", "Yaris", "Etios"] },
    MakeEntry { make: "Hyundai", models: &["HB20", "HB20S", "i30", "Elantra"] },
    MakeEntry { make: "Renault", models: &["Kwid", "Sandero", "Logan", "Stepway"] },
    MakeEntry { make: "Honda", models: &["Civic", "City", "Fit", "Accord"] },
    MakeEntry { make: "Ford", models: &["Ka"] },
    MakeEntry { make: "Nissan", models: &["Versa", "Sentra", "March", "Leaf"] },
    MakeEntry { make: "Citroën", models: &["C3"] },
    MakeEntry { make: "Peugeot", models: &["208"] },
    MakeEntry { make: "BMW", models: &["320i", "118i", "530i"] },
    MakeEntry { make: "Mercedes-Benz", models: &["Classe A", "Classe C", "Classe E"] },
    MakeEntry { make: "Audi", models: &["A3", "A4", "A5"] },
    MakeEntry { make: "Kia", models: &["Cerato", "Stonic", "Rio"] },
];

static SUV_MAKES: &[MakeEntry] = &[
    MakeEntry { make: "Volkswagen", models: &["T-Cross", "Nivus", "Taos"] },
    MakeEntry { make: "Fiat", models: &["Pulse", "Fastback"] },
    MakeEntry { make: "Chevrolet", models: &["Tracker", "Spin", "Equinox"] },
    MakeEntry { make: "Toyota", models: &["SW4", "Corolla Cross", "RAV4"] },
    MakeEntry { make: "Hyundai", models: &["Creta", "Tucson", "Santa Fe"] },
    MakeEntry { make: "Renault", models: &["Duster", "Captur"] },
    MakeEntry { make: "Honda", models: &["HR-V", "WR-V", "CR-V"] },
    MakeEntry { make: "Ford", models: &["EcoSport", "Territory", "Bronco"] },
    MakeEntry { make: "Jeep", models: &["Renegade", "Compass", "Commander", "Wrangler", "Cherokee"] },
    MakeEntry { make: "Nissan", models: &["Kicks"] },
    MakeEntry { make: "Mitsubishi", models: &["Pajero", "ASX", "Eclipse Cross", "Outlander"] },
    MakeEntry { make: "Citroën", models: &["C4 Cactus", "Aircross"] },
    MakeEntry { make: "Peugeot", models: &["2008", "3008"] },
    MakeEntry { make: "BMW", models: &["X1", "X3", "X5"] },
    MakeEntry { make: "Mercedes-Benz", models: &["GLA", "GLC"] },
    MakeEntry { make: "Audi", models: &["Q3", "Q5"] },
    MakeEntry { make: "Kia", models: &["Sportage", "Sorento"] },
];

static TRUCK_MAKES: &[MakeEntry] = &[
    MakeEntry { make: "Volkswagen", models: &["Amarok", "Saveiro", "Constellation", "Delivery"] },
    MakeEntry { make: "Fiat", models: &["Toro", "Strada", "Fiorino"] },
    MakeEntry { make: "Chevrolet", models: &["S10", "Montana"] },
    MakeEntry { make: "Toyota", models: &["Hilux"] },
    MakeEntry { make: "Renault", models: &["Oroch"] },
    MakeEntry { make: "Ford", models: &["Ranger", "Maverick", "Cargo"] },
    MakeEntry { make: "Nissan", models: &["Frontier"] },
    MakeEntry { make: "Mitsubishi", models: &["L200"] },
    MakeEntry { make: "Mercedes-Benz", models: &["Actros", "Atego", "Accelo"] },
    MakeEntry { make: "Volvo", models: &["FH", "FM", "VM"] },
    MakeEntry { make: "Scania", models: &["R 450", "G 410", "P 320"] },
    MakeEntry { make: "Iveco", models: &["Tector", "Hi-Way"] },
];

static MOTORCYCLE_MAKES: &[MakeEntry] = &[
    MakeEntry { make: "Honda", models: &["CG 160", "Biz 125", "CB 300F", "PCX", "XRE 300"] },
    MakeEntry { make: "Yamaha", models: &["Fazer 250", "MT-03", "Factor 150", "XTZ 250 Lander", "NMax 160"] },
    MakeEntry { make: "Suzuki", models: &["GSX-S750", "V-Strom 650", "Burgman 125"] },
    MakeEntry { make: "Kawasaki", models: &["Ninja 400", "Z400", "Versys 650"] },
    MakeEntry { make: "BMW", models: &["G 310 R", "F 850 GS", "R 1250 GS"] },
];

static BUS_MAKES: &[MakeEntry] = &[
    MakeEntry { make: "Mercedes-Benz", models: &["OF-1721", "O-500"] },
    MakeEntry { make: "Volkswagen", models: &["Volksbus 15.190", "Volksbus 17.230"] },
    MakeEntry { make: "Volvo", models: &["B270F", "B340R"] },
    MakeEntry { make: "Scania", models: &["K 310", "F 250"] },
    MakeEntry { make: "Iveco", models: &["Granclass 10-190"] },
];

static VAN_MAKES: &[MakeEntry] = &[
    MakeEntry { make: "Fiat", models: &["Ducato", "Doblò", "Scudo"] },
    MakeEntry { make: "Renault", models: &["Master", "Kangoo"] },
    MakeEntry { make: "Mercedes-Benz", models: &["Sprinter", "Vito"] },
    MakeEntry { make: "Peugeot", models: &["Partner", "Expert", "Boxer"] },
    MakeEntry { make: "Citroën", models: &["Jumpy", "Berlingo", "Jumper"] },
    MakeEntry { make: "Iveco", models: &["Daily"] },
];

/// Makes valid for a vehicle type, each with its model range
pub fn makes_for(vehicle_type: VehicleType) -> &'static [MakeEntry] {
    match vehicle_type {
        VehicleType::Car => CAR_MAKES,
        VehicleType::Suv => SUV_MAKES,
        VehicleType::Truck => TRUCK_MAKES,
        VehicleType::Motorcycle => MOTORCYCLE_MAKES,
        VehicleType::Bus => BUS_MAKES,
        VehicleType::Van => VAN_MAKES,
    }
}

/// Model set for a (type, make) pair, if the make is valid for the type
pub fn models_for(vehicle_type: VehicleType, make: &str) -> Option<&'static [&'static str]> {
    makes_for(vehicle_type)
        .iter()
        .find(|entry| entry.make == make)
        .map(|entry| entry.models)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_makes() {
        for vehicle_type in VehicleType::ALL {
            let makes = makes_for(vehicle_type);
            assert!(!makes.is_empty(), "no makes for {}", vehicle_type);
            for entry in makes {
                assert!(!entry.models.is_empty(), "no models for {} {}", vehicle_type, entry.make);
            }
        }
    }

    #[test]
    fn test_models_for_known_pair() {
        let models = models_for(VehicleType::Car, "Volkswagen").unwrap();
        assert!(models.contains(&"Gol"));
    }

    #[test]
    fn test_models_for_invalid_pair() {
        // Yamaha makes motorcycles, not buses
        assert!(models_for(VehicleType::Bus, "Yamaha").is_none());
    }

    #[test]
    fn test_no_duplicate_makes_within_type() {
        for vehicle_type in VehicleType::ALL {
            let makes = makes_for(vehicle_type);
            for (i, entry) in makes.iter().enumerate() {
                assert!(
                    makes[i + 1..].iter().all(|other| other.make != entry.make),
                    "duplicate make {} for {}",
                    entry.make,
                    vehicle_type
                );
            }
        }
    }
}
