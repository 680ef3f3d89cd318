use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use sphere_tracer::config::RenderConfig;

/// Verbosity accepted by `--debug-level`.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Maps the flag value onto the filter handed to the logger.
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render settings from the command line; each one given overrides the config file.
#[derive(Debug, Parser)]
#[command(name = "sphere_tracer")]
#[command(about = "Renders a scene of diffuse spheres under a sky gradient")]
pub struct Args {
    /// TOML file with render settings and spheres
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image width over height
    #[arg(long)]
    pub aspect_ratio: Option<f64>,

    /// Number of samples per pixel
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub samples_per_pixel: Option<i32>,

    /// Maximum number of ray bounces
    #[arg(long, allow_negative_numbers = true)]
    pub max_depth: Option<i32>,

    /// Seed for reproducible renders
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (.png for PNG, anything else for PPM); PPM goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the effective settings as TOML and exit without rendering
    #[arg(long)]
    pub dump_config: bool,
}

impl Args {
    /// Apply command line overrides on top of `config`.
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            config.aspect_ratio = aspect_ratio;
        }
        if let Some(samples) = self.samples_per_pixel {
            config.samples_per_pixel = samples;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let args = Args::parse_from([
            "sphere_tracer",
            "--width",
            "32",
            "-s",
            "-2",
            "--seed",
            "9",
            "--debug-level",
            "warn",
        ]);
        let mut config = RenderConfig::default();
        args.apply(&mut config);

        assert_eq!(config.width, 32);
        assert_eq!(config.samples_per_pixel, -2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_depth, 50);
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Warn);
        assert!(args.output.is_none());
        assert!(!args.dump_config);
    }

    #[test]
    fn test_dump_config_reflects_overrides() {
        let args = Args::parse_from(["sphere_tracer", "--dump-config", "--max-depth", "7"]);
        assert!(args.dump_config);

        let mut config = RenderConfig::default();
        args.apply(&mut config);
        let text = config.to_toml().unwrap();
        assert_eq!(RenderConfig::parse(&text).unwrap().max_depth, 7);
    }
}
