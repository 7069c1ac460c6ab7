//! CLI argument definitions for the SACE import builder.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sace_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "sace-import",
    version,
    about = "Build SACE Schools Online import files from timetable exports",
    long_about = "Build SACE Schools Online import files from a year's two \
                  Timetable Development (tfx) exports.\n\n\
                  Writes teacher, class and enrollment CSV files split by \
                  stage, semester and SWD cohort."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow student and teacher identifiers in trace output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

impl Cli {
    /// Logging setup from the global flags.
    ///
    /// `--log-level` beats `-v`/`-q`; either one switches off `RUST_LOG`.
    /// Colour follows `--color`, and `auto` colours only a terminal stderr.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter,
            use_env_filter: !self.verbosity.is_present() && self.log_level.is_none(),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            log_data: self.log_data,
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Read both semester timetables and write the import files.
    Import(ImportArgs),

    /// List the import files a run produces.
    Tables,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Contact school number stamped on every row.
    #[arg(long = "school-number", value_name = "NUMBER")]
    pub school_number: u32,

    /// Academic year (default: the current year).
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// Folder holding TTD_<YEAR>_S1.tfx and TTD_<YEAR>_S2.tfx.
    #[arg(long = "timetable-dir", value_name = "DIR")]
    pub timetable_dir: Option<PathBuf>,

    /// Timetabling root searched for a <YEAR> folder when no timetable folder
    /// is given. May be repeated; the first existing folder wins.
    #[arg(long = "search-dir", value_name = "DIR")]
    pub search_dirs: Vec<PathBuf>,

    /// Output directory for the import files.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "schools_online_import_files"
    )]
    pub output_dir: PathBuf,

    /// Build and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_flag_overrides_verbosity() {
        let cli = Cli::try_parse_from(["sace-import", "-vv", "--log-level", "error", "tables"])
            .expect("parse");
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn defaults_defer_to_environment() {
        let cli = Cli::try_parse_from(["sace-import", "--color", "never", "tables"]).expect("parse");
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_ansi);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn import_arguments_parse() {
        let cli = Cli::try_parse_from([
            "sace-import",
            "--log-format",
            "json",
            "import",
            "--school-number",
            "245",
            "--year",
            "2025",
            "--search-dir",
            "a",
            "--search-dir",
            "b",
            "--dry-run",
        ])
        .expect("parse");
        assert_eq!(cli.log_config().format, LogFormat::Json);
        let Command::Import(args) = cli.command else {
            panic!("expected import");
        };
        assert_eq!(args.school_number, 245);
        assert_eq!(args.year, Some(2025));
        assert_eq!(args.search_dirs, [PathBuf::from("a"), PathBuf::from("b")]);
        assert!(args.dry_run);
    }
}
