/// Reserved id of the synthetic regulator node.
pub const ROOT_ID: &str = "0";
pub const ROOT_LABEL: &str = "ER";
pub const ROOT_NAME: &str = "Entidad Reguladora";
pub const ROOT_DATE_ADDED: &str = "1998";

/// Networks with at least this many operators skip per-node mass and the
/// improved layout pass.
pub const BIG_NETWORK_NODES: usize = 100;

pub const MAX_SIZE: u32 = 12;
/// Size used when every operator in the slice has the same volume.
pub const NEUTRAL_SIZE: u32 = MAX_SIZE / 2;

pub const MEDIUM_NETWORK_MASS: f64 = 1.5;
pub const DEFAULT_MASS: f64 = 2.5;
/// Node counts strictly above this (and below `BIG_NETWORK_NODES`) get the lighter mass.
pub const MEDIUM_NETWORK_FLOOR: usize = 30;

pub const SELECTOR_PLACEHOLDER: &str = "Search (ordered by size)";

pub const DEFAULT_LIMIT: usize = 50;
