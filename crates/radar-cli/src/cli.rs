//! CLI definition using clap

use clap::Parser;
use radar_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "radar-gen")]
#[command(version)]
#[command(about = "Synthesizes Brazilian license-plate camera detection records")]
#[command(long_about = None)]
pub struct Cli {
    /// Seed for deterministic generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of records to generate
    #[arg(long, default_value_t = 1000)]
    pub num_records: usize,

    /// Output CSV path
    #[arg(long, short = 'o', default_value = "license_plate_data_brazil.csv")]
    pub output: PathBuf,

    /// Lookback window in days for timestamps
    #[arg(long = "dias-passados", default_value_t = 30)]
    pub dias_passados: i64,

    /// Minimum latitude
    #[arg(long = "lat-min", default_value_t = -33.7, allow_hyphen_values = true)]
    pub lat_min: f64,

    /// Maximum latitude
    #[arg(long = "lat-max", default_value_t = 5.2, allow_hyphen_values = true)]
    pub lat_max: f64,

    /// Minimum longitude
    #[arg(long = "long-min", default_value_t = -73.9, allow_hyphen_values = true)]
    pub long_min: f64,

    /// Maximum longitude
    #[arg(long = "long-max", default_value_t = -35.3, allow_hyphen_values = true)]
    pub long_max: f64,

    /// Minimum temperature in Celsius
    #[arg(long = "temp-min", default_value_t = 15.0, allow_hyphen_values = true)]
    pub temp_min: f64,

    /// Maximum temperature in Celsius
    #[arg(long = "temp-max", default_value_t = 40.0, allow_hyphen_values = true)]
    pub temp_max: f64,

    /// Minimum measured speed in km/h
    #[arg(long = "velocidade-min", default_value_t = 0)]
    pub velocidade_min: u32,

    /// Maximum measured speed in km/h
    #[arg(long = "velocidade-max", default_value_t = 120)]
    pub velocidade_max: u32,

    /// Minimum vehicle model year
    #[arg(long = "ano-min", default_value_t = 2010)]
    pub ano_min: i32,

    /// Maximum vehicle model year
    #[arg(long = "ano-max", default_value_t = 2023)]
    pub ano_max: i32,

    /// Locale for generated remarks (pt_BR uses the Portuguese catalog)
    #[arg(long, default_value = "pt_BR")]
    pub locale: String,

    /// Print the first records after generation
    #[arg(long)]
    pub show_sample: bool,

    /// Print a dataset summary after generation
    #[arg(long)]
    pub show_stats: bool,

    /// Output format for --show-sample (json, table)
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
