//! Dataset summary report

use std::collections::HashMap;

use radar_domain::DetectionRecord;

pub fn generate_stats_report(records: &[DetectionRecord]) -> String {
    let total = records.len();
    let violation_count = records.iter().filter(|r| r.infraction.is_violation()).count();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("            Detection Dataset Summary             \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Total records:        {}\n", total));
    report.push_str(&format!("  With violation:       {}\n", violation_count));
    if total > 0 {
        let rate = violation_count as f64 / total as f64 * 100.0;
        report.push_str(&format!("  Violation rate:       {:.1}%\n", rate));
    }
    report.push('\n');

    if total == 0 {
        report.push_str("==================================================\n");
        return report;
    }

    let speeds: Vec<u32> = records.iter().map(|r| r.speed).collect();
    let temps: Vec<f64> = records.iter().map(|r| r.temperature).collect();
    let mean_speed = speeds.iter().map(|&s| s as u64).sum::<u64>() as f64 / total as f64;
    let mean_temp = temps.iter().sum::<f64>() / total as f64;
    let mean_ocr = records.iter().map(|r| r.ocr_confidence).sum::<f64>() / total as f64;

    report.push_str("  Speed (km/h):         ");
    report.push_str(&format!(
        "min {} / mean {:.1} / max {}\n",
        speeds.iter().min().unwrap_or(&0),
        mean_speed,
        speeds.iter().max().unwrap_or(&0)
    ));
    report.push_str("  Temperature (C):      ");
    report.push_str(&format!(
        "min {:.1} / mean {:.1} / max {:.1}\n",
        temps.iter().cloned().fold(f64::INFINITY, f64::min),
        mean_temp,
        temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    ));
    report.push_str(&format!("  OCR confidence:       mean {:.2}\n\n", mean_ocr));

    report.push_str("  Infractions\n");
    report.push_str("  -----------\n");
    for (label, count) in sorted_counts(records.iter().filter(|r| r.infraction.is_violation()).map(|r| r.infraction.description())) {
        report.push_str(&format!("  {:<40} {:>6}\n", label, count));
    }
    if violation_count == 0 {
        report.push_str("  (none)\n");
    }
    report.push('\n');

    report.push_str("  Vehicle types\n");
    report.push_str("  -------------\n");
    for (label, count) in sorted_counts(records.iter().map(|r| r.vehicle_type.label())) {
        report.push_str(&format!("  {:<40} {:>6}\n", label, count));
    }

    report.push_str("\n==================================================\n");
    report
}

// Counts descending, label ascending for stable output
fn sorted_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut entries: Vec<_> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::generate_records;
    use chrono::NaiveDate;

    #[test]
    fn test_report_totals() {
        let config = GeneratorConfig {
            num_records: 100,
            seed: Some(21),
            reference_time: NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            ..Default::default()
        };
        let records = generate_records(&config);
        let report = generate_stats_report(&records);
        assert!(report.contains("Total records:        100"));
        assert!(report.contains("Detection Dataset Summary"));
        assert!(report.contains("Vehicle types"));
    }

    #[test]
    fn test_empty_report() {
        let report = generate_stats_report(&[]);
        assert!(report.contains("Total records:        0"));
    }

    #[test]
    fn test_sorted_counts_order() {
        let labels = ["b", "a", "b", "c", "b", "a"];
        let counts = sorted_counts(labels.into_iter());
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }
}
