//! Sample output formatting

use radar_domain::DetectionRecord;
use radar_types::{OutputFormat, Result};

pub fn print_sample(format: OutputFormat, records: &[DetectionRecord], limit: usize) -> Result<()> {
    let sample = &records[..limit.min(records.len())];

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(sample)?);
        return Ok(());
    }

    println!("\nSample data");
    println!("===========");
    println!(
        "{:<9} {:<12} {:<13} {:<22} {:<16} {:>5} {:>5}  {}",
        "Plate", "Format", "Type", "Vehicle", "City", "Speed", "Limit", "Infraction"
    );
    println!("{}", "-".repeat(110));
    for record in sample {
        println!(
            "{:<9} {:<12} {:<13} {:<22} {:<16} {:>5} {:>5}  {}",
            record.plate_number,
            record.plate_format.label(),
            record.vehicle_type.label(),
            truncate_str(&format!("{} {}", record.vehicle_make, record.vehicle_model), 21),
            truncate_str(&record.city, 15),
            record.speed,
            record.speed_limit,
            record.infraction.description(),
        );
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("Mercedes-Benz Sprinter", 10), "Mercedes..");
    }
}
