use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Renders the random sphere field to a PPM image.
#[derive(Debug, Parser)]
#[command(name = "weekend_tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Width over height
    #[arg(long, default_value_t = 1.5)]
    pub aspect_ratio: f32,

    /// Samples per pixel
    #[arg(short, long, default_value_t = 20)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(short, long, default_value_t = 5)]
    pub depth: u32,

    /// Seed for scene layout and sampling, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file
    #[arg(short, long, default_value = "image.ppm")]
    pub output: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
