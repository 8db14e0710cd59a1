//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep dataset, graph and report structs in one place.
//! - Avoid cyclic imports between services.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — dataset input, filter state, graph model and report structs.
//! - `constants.rs` — reserved ids and visual weight bounds.
//! - `errors.rs` — `GraphError`, the pipeline's error kinds.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and the dataset file format.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
