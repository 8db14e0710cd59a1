//! Service layer containing the graph pipeline and side-effect helpers.
//!
//! ## Service map
//! - `stats.rs` — min/max/total volume over a slice.
//! - `weight.rs` — node size and mass heuristics.
//! - `graph.rs` — slice + metadata -> graph model.
//! - `filter.rs` — filter state, sort/slice, selector listing.
//! - `selection.rs` — node id -> operator description.
//! - `render.rs` — renderer seam and dispose-before-replace stage.
//! - `session.rs` — UI event dispatch.
//! - `dataset.rs` — dataset file load/save + validation.
//! - `import.rs` — registry export parsing.
//! - `config.rs` — TOML config loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - The pipeline (`stats` through `session`) is pure in-memory work.
//! - Filesystem access stays in `dataset`, `import` and `config`.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod dataset;
pub mod filter;
pub mod graph;
pub mod import;
pub mod output;
pub mod render;
pub mod selection;
pub mod session;
pub mod stats;
pub mod weight;
