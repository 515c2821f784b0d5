//! CLI argument parsing using clap derive macros.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// punk - Build Punk API beer queries
#[derive(Parser, Debug)]
#[command(name = "punk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the query string for a set of beer filters
    #[command(alias = "q")]
    Query(QueryArgs),

    /// List every query key the filters can produce
    Keys,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Filters accepted by `punk query`.
///
/// Filters are emitted in the order the fields are declared here.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// ABV greater than
    #[arg(long)]
    pub abv_gt: Option<f32>,

    /// ABV lower than
    #[arg(long)]
    pub abv_lt: Option<f32>,

    /// IBU greater than
    #[arg(long)]
    pub ibu_gt: Option<f32>,

    /// IBU lower than
    #[arg(long)]
    pub ibu_lt: Option<f32>,

    /// EBC greater than
    #[arg(long)]
    pub ebc_gt: Option<f32>,

    /// EBC lower than
    #[arg(long)]
    pub ebc_lt: Option<f32>,

    /// Beer name
    #[arg(long)]
    pub beer_name: Option<String>,

    /// Yeast name
    #[arg(long)]
    pub yeast: Option<String>,

    /// Brewed after (MM-YYYY or YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub brewed_gt: Option<NaiveDate>,

    /// Brewed before (MM-YYYY or YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub brewed_lt: Option<NaiveDate>,

    /// Hops name
    #[arg(long)]
    pub hops: Option<String>,

    /// Malt name
    #[arg(long)]
    pub malt: Option<String>,

    /// Food pairing
    #[arg(long)]
    pub food: Option<String>,

    /// Beer ids (comma separated)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub ids: Option<Vec<i64>>,

    /// Result page
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Print the full request URL instead of the query string
    #[arg(long)]
    pub url: bool,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (base_url, output.color, output.format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// How `punk query` prints its result.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Encoded query string
    #[default]
    Query,
    /// JSON document with the query and its pairs
    Json,
    /// Full request URL
    Url,
}

impl OutputFormat {
    /// Returns the name used in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Query => "query",
            OutputFormat::Json => "json",
            OutputFormat::Url => "url",
        }
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    punk_api_rs::beers::parse_brew_date(s).map_err(|e| e.to_string())
}
