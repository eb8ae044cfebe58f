use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "flash-fill",
    version,
    about = "Fill web forms with plausible test data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: flash-fill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory holding the stored profile configuration
    #[arg(long, global = true)]
    pub store_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill every detected field of a page snapshot
    Fill {
        /// Page snapshot JSON produced by the DOM extractor
        #[arg(long)]
        page: String,

        /// Where to write the filled snapshot (default: <page>.filled.json)
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for reproducible values
        #[arg(long)]
        seed: Option<u64>,

        /// Profile to take overrides from (default: the active profile)
        #[arg(long)]
        profile: Option<String>,

        /// Append a JSON-lines trace of every resolution to this file
        #[arg(long)]
        trace: Option<String>,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,
    },

    /// List the fields detected on a page snapshot
    Scan {
        #[arg(long)]
        page: String,
    },

    /// Classify one key and print the value it resolves to
    Resolve {
        #[arg(long)]
        key: String,

        /// Control type, e.g. email, date, number
        #[arg(long = "type", default_value = "text")]
        input_type: String,

        /// Control tag: input, textarea, select
        #[arg(long, default_value = "input")]
        tag: String,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage stored profiles
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// List profiles, marking the active one
    List,
    /// Print a profile's override data (default: the active profile)
    Show { name: Option<String> },
    Add { name: String },
    Remove { name: String },
    /// Make a profile the active one
    Use { name: String },
    /// Set one override value on a profile
    Set { name: String, key: String, value: String },
    Enable,
    Disable,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `flash-fill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fill: FillConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillConfig {
    pub seed: Option<u64>,

    pub trace: Option<String>,

    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trace: None,
            format: "console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_dir")]
    pub dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

// Serde default helpers
fn default_console() -> String { "console".to_string() }
fn default_store_dir() -> String { ".flash-fill".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

pub const DEFAULT_CONFIG_FILE: &str = "flash-fill.yaml";

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config file, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}
