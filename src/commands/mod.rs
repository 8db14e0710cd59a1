//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `graph.rs` — graph/stats/select/years against a loaded dataset.
//! - `session.rs` — replay of UI event scripts.
//! - `import.rs` — dataset construction from registry files.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate pipeline logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod graph;
pub mod import;
pub mod session;

use crate::cli::{Category, Cli, FilterArgs};
use crate::domain::constants::DEFAULT_LIMIT;
use crate::domain::errors::GraphError;
use crate::domain::models::{Dataset, FilterState};
use crate::services::config::ConfigFile;
use crate::services::dataset::load_dataset;

pub use graph::handle_graph_commands;
pub use import::handle_import;
pub use session::handle_session;

pub fn load_inputs(cli: &Cli, config: &ConfigFile) -> anyhow::Result<Dataset> {
    let path = cli
        .data
        .clone()
        .or_else(|| config.data.dataset.clone())
        .ok_or_else(|| anyhow::anyhow!("no dataset: pass --data or set [data] dataset in config"))?;
    load_dataset(&path)
}

/// CLI flag, then config default, then built-in default. Without an explicit
/// year the latest year of the category is used.
pub fn resolve_filter(
    args: &FilterArgs,
    config: &ConfigFile,
    dataset: &Dataset,
) -> anyhow::Result<FilterState> {
    let category = args
        .category
        .or(config.defaults.category)
        .unwrap_or(Category::Mobile);
    let limit = args
        .limit
        .map(|l| l as usize)
        .or(config.defaults.limit)
        .unwrap_or(DEFAULT_LIMIT);
    if limit == 0 {
        return Err(GraphError::InvalidLimit(limit).into());
    }
    let year = match args.year.or(config.defaults.year) {
        Some(y) => y,
        None => latest_year(dataset, category)?,
    };
    Ok(FilterState::new(year, limit, category))
}

fn latest_year(dataset: &Dataset, category: Category) -> Result<i32, GraphError> {
    dataset
        .years(category)
        .last()
        .copied()
        .ok_or_else(|| GraphError::InvalidDataset(format!("{} dataset has no years", category)))
}
