//! Geographic catalogs: federative units, cities, posted speed limits

use std::collections::HashMap;
use std::sync::LazyLock;

/// Posted limit for cities with no explicit mapping
pub const DEFAULT_SPEED_LIMIT: u32 = 60;

/// Camera ids follow federal highway designations BR-101 through BR-130
pub const CAMERA_HIGHWAY_MIN: u32 = 101;
pub const CAMERA_HIGHWAY_MAX: u32 = 130;

/// The 27 federative units used for plate registration
pub const STATES: &[&str] = &[
    "Acre", "Alagoas", "Amapá", "Amazonas", "Bahia", "Ceará",
    "Distrito Federal", "Espírito Santo", "Goiás", "Maranhão",
    "Mato Grosso", "Mato Grosso do Sul", "Minas Gerais", "Pará",
    "Paraíba", "Paraná", "Pernambuco", "Piauí", "Rio de Janeiro",
    "Rio Grande do Norte", "Rio Grande do Sul", "Rondônia",
    "Roraima", "Santa Catarina", "São Paulo", "Sergipe", "Tocantins",
];

/// Major cities cameras are placed in
pub const CITIES: &[&str] = &[
    "São Paulo", "Rio de Janeiro", "Brasília", "Salvador", "Fortaleza",
    "Belo Horizonte", "Manaus", "Curitiba", "Recife", "Porto Alegre",
    "Belém", "Goiânia", "Guarulhos", "Campinas", "São Luís",
    "São Gonçalo", "Maceió", "Duque de Caxias", "Campo Grande", "Natal",
];

// Cities absent from this map fall back to DEFAULT_SPEED_LIMIT
static CITY_SPEED_LIMITS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("São Paulo", 50);
    m.insert("Rio de Janeiro", 70);
    m.insert("Brasília", 80);
    m.insert("Salvador", 60);
    m.insert("Fortaleza", 60);
    m.insert("Belo Horizonte", 70);
    m.insert("Manaus", 60);
    m.insert("Curitiba", 60);
    m.insert("Recife", 50);
    m.insert("Porto Alegre", 60);
    m.insert("Belém", 60);
    m.insert("Goiânia", 70);
    m.insert("Campinas", 60);
    m.insert("Maceió", 60);
    m.insert("Campo Grande", 70);
    m.insert("Natal", 60);
    m
});

/// Posted speed limit for a city
pub fn posted_limit_for(city: &str) -> u32 {
    CITY_SPEED_LIMITS
        .get(city)
        .copied()
        .unwrap_or(DEFAULT_SPEED_LIMIT)
}

/// Camera device id for a highway number
pub fn camera_id(highway: u32) -> String {
    format!("BR-{:03}", highway)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_city_limit() {
        assert_eq!(posted_limit_for("São Paulo"), 50);
        assert_eq!(posted_limit_for("Brasília"), 80);
    }

    #[test]
    fn test_unmapped_city_falls_back_to_default() {
        assert_eq!(posted_limit_for("Guarulhos"), DEFAULT_SPEED_LIMIT);
        assert_eq!(posted_limit_for("Nowhere"), DEFAULT_SPEED_LIMIT);
    }

    #[test]
    fn test_limits_only_cover_catalog_cities() {
        for city in CITY_SPEED_LIMITS.keys() {
            assert!(CITIES.contains(city), "{} not in city catalog", city);
        }
    }

    #[test]
    fn test_camera_id_format() {
        assert_eq!(camera_id(101), "BR-101");
        assert_eq!(camera_id(CAMERA_HIGHWAY_MAX), "BR-130");
    }

    #[test]
    fn test_state_catalog_complete() {
        assert_eq!(STATES.len(), 27);
    }
}
