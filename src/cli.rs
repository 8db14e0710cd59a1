use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "opnet", version, about = "Telecom operator network graph builder")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ~/.config/opnet/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Dataset JSON file (overrides config)")]
    pub data: Option<PathBuf>,
    #[arg(long, short, global = true, help = "Log pipeline steps to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the graph model for the filtered slice.
    Graph {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Volume statistics over the filtered slice.
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Describe the operator behind a node id.
    Select {
        id: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List the years available in a category.
    Years {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    /// Replay a JSON-lines script of UI events.
    Session {
        #[arg(long, help = "Event script (reads stdin when omitted)")]
        script: Option<PathBuf>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Build a dataset file from numbering registry exports.
    Import {
        #[arg(long)]
        landline: PathBuf,
        #[arg(long)]
        mobile: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
    #[arg(long, value_enum)]
    pub category: Option<Category>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Landline,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Mobile => f.write_str("mobile"),
            Category::Landline => f.write_str("landline"),
        }
    }
}
