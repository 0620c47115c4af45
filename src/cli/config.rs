use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "accessid",
    version,
    about = "Generates unique accessibility identifiers for screen fixtures"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: accessid.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the identifier assignment pass over a screen fixture
    Assign {
        /// Path to a screen fixture (.json, .yaml, or .yml)
        #[arg(long)]
        fixture: String,

        /// Append assignment events to this JSONL file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print the outlet table of a screen fixture
    Outlets {
        /// Path to a screen fixture (.json, .yaml, or .yml)
        #[arg(long)]
        fixture: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `accessid.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub assign: AssignConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssignConfig {
    /// JSONL trace output path; tracing is off when unset.
    pub trace: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("accessid.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
