use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::form::reset_timer::DEFAULT_RESET_DELAY_MS;
use crate::page::clock::parse_date;
use crate::view::error::PageError;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "cupcake-page",
    version,
    about = "Headless interaction core of the bakery order page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: cupcake-page.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL trace of handled events to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an order as if submitted on a fresh page
    Validate {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        /// Order details
        #[arg(long, default_value = "")]
        order: String,

        /// Requested date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,

        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,
    },

    /// Replay an event script against a page and print the final state
    Replay {
        /// Path to the event script YAML
        #[arg(long)]
        script: String,

        /// Page layout YAML (default: the built-in bakery page)
        #[arg(long)]
        layout: Option<String>,

        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,

        /// Output format: console, json, yaml
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the keyboard panel's transformations of a text
    Transform {
        #[arg(long)]
        text: String,
    },

    /// Print the built-in page layout
    Layout {
        /// Output format: yaml, json
        #[arg(long, default_value = "yaml")]
        format: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `cupcake-page.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub replay: ReplayConfig,

    /// Fixed "today" for validation; the local date when absent
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_reset_delay")]
    pub reset_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
        }
    }
}

// Serde default helpers
fn default_reset_delay() -> u64 { DEFAULT_RESET_DELAY_MS }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("cupcake-page.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config > defaults)
// ============================================================================

/// The date to validate against: CLI flag, then config, then `None` (use the local date).
pub fn resolve_today(cli_today: Option<&str>, config: &AppConfig) -> Result<Option<NaiveDate>, PageError> {
    match cli_today {
        Some(raw) => parse_date(raw).map(Some),
        None => Ok(config.today),
    }
}

pub fn resolve_trace_path<'a>(cli_trace: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli_trace.or(config.trace.path.as_deref())
}

pub fn resolve_format<'a>(cli_format: Option<&'a str>, config: &'a AppConfig) -> &'a str {
    cli_format.unwrap_or(config.replay.format.as_str())
}
