//! Command execution

use indicatif::{ProgressBar, ProgressStyle};
use radar_app::config::GeneratorConfig;
use radar_app::generator::generate_records_with;
use radar_app::stats::generate_stats_report;
use radar_infra::csv_export::{open_csv_writer, write_records};
use radar_types::Result;

use crate::cli::Cli;
use crate::output::print_sample;

const SAMPLE_SIZE: usize = 5;

/// Execute a generation run
pub fn execute(cli: Cli) -> Result<()> {
    let config = GeneratorConfig {
        num_records: cli.num_records,
        seed: cli.seed,
        days_back: cli.dias_passados,
        lat_min: cli.lat_min,
        lat_max: cli.lat_max,
        long_min: cli.long_min,
        long_max: cli.long_max,
        temp_min: cli.temp_min,
        temp_max: cli.temp_max,
        speed_min: cli.velocidade_min,
        speed_max: cli.velocidade_max,
        year_min: cli.ano_min,
        year_max: cli.ano_max,
        locale: cli.locale.clone(),
        reference_time: GeneratorConfig::reference_time_for(cli.seed),
    };
    config.validate()?;

    // Open the output before generating so a bad path fails immediately
    let mut writer = open_csv_writer(&cli.output)?;

    if cli.verbose {
        eprintln!(
            "Generating {} records (seed: {}, locale: {})",
            config.num_records,
            config
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string()),
            config.locale
        );
    }

    let pb = ProgressBar::new(config.num_records as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let records = generate_records_with(&config, |_| pb.inc(1));
    pb.finish_and_clear();

    write_records(&mut writer, &records)?;

    println!(
        "Generated {} records and saved to {}",
        records.len(),
        cli.output.display()
    );

    if cli.show_sample {
        print_sample(cli.format.unwrap_or_default(), &records, SAMPLE_SIZE)?;
    }

    if cli.show_stats {
        println!("{}", generate_stats_report(&records));
    }

    Ok(())
}
