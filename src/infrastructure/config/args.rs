//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Log verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "skyhall",
    version,
    about = "A lightweight operator client for the SkyHall service API",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL override.
    #[arg(long, value_name = "URL", env = "SKYHALL_BASE_URL")]
    pub base_url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// User flows exposed by the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with credentials and establish a session.
    Login {
        /// Login name.
        #[arg(short, long, env = "SKYHALL_LOGIN")]
        login: String,

        /// Password.
        #[arg(short, long, env = "SKYHALL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Fetch and print the operator profile.
    Profile,
    /// Log out and clear local session state.
    Logout,
    /// Print whether a persisted token is present.
    Status,
}
