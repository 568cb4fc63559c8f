//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "mcqueen")]
#[command(about = "Build and preview the McQueen Solutions static site")]
#[command(version)]
pub struct Args {
    /// Config file (default: ./site.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level; RUST_LOG takes precedence
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Year for the footer copyright line (default: current year)
    #[arg(long, global = true)]
    pub year: Option<i32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every page into an output directory
    Build {
        /// Output directory (default: config `out_dir`, then `dist`)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print one rendered page to stdout
    Render {
        /// URL path of the page
        #[arg(default_value = "/")]
        path: String,
    },
    /// Print the page content inventory as JSON
    Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_accepts_out_dir() {
        let args = Args::try_parse_from(["mcqueen", "build", "--out", "public"]).expect("parse");
        match args.command {
            Command::Build { out } => assert_eq!(out, Some(PathBuf::from("public"))),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn render_defaults_to_root() {
        let args = Args::try_parse_from(["mcqueen", "render"]).expect("parse");
        assert!(matches!(args.command, Command::Render { ref path } if path == "/"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from(["mcqueen", "content", "--year", "2030", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(args.year, Some(2030));
        assert_eq!(args.log_level, LogLevel::Debug);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = Args::try_parse_from(["mcqueen", "render", "--log-level", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["mcqueen"]).is_err());
    }
}
