//! Brazilian license plate synthesis

use rand::Rng;
use radar_types::PlateFormat;

fn letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.gen_range(b'A'..=b'Z') as char
}

fn digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.gen_range(b'0'..=b'9') as char
}

/// Generate a plate number in the given layout
///
/// Traditional: three letters + four digits (`ABC1234`).
/// Mercosur: three letters + digit + letter + two digits (`ABC1D23`).
pub fn generate_plate<R: Rng + ?Sized>(rng: &mut R, format: PlateFormat) -> String {
    let mut plate = String::with_capacity(7);
    for _ in 0..3 {
        plate.push(letter(rng));
    }
    match format {
        PlateFormat::Traditional => {
            for _ in 0..4 {
                plate.push(digit(rng));
            }
        }
        PlateFormat::Mercosur => {
            plate.push(digit(rng));
            plate.push(letter(rng));
            plate.push(digit(rng));
            plate.push(digit(rng));
        }
    }
    plate
}
