use crate::cli::Category;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("no operators to compute stats over")]
    EmptyDataset,
    #[error("year {year} not present in {category} dataset")]
    UnknownYear { category: Category, year: i32 },
    #[error("no metadata for operator: {0}")]
    MissingMetadata(String),
    #[error("limit must be at least 1, got {0}")]
    InvalidLimit(usize),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

impl GraphError {
    /// Stable machine-readable code used in the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::EmptyDataset => "EMPTY_DATASET",
            GraphError::UnknownYear { .. } => "UNKNOWN_YEAR",
            GraphError::MissingMetadata(_) => "MISSING_METADATA",
            GraphError::InvalidLimit(_) => "INVALID_LIMIT",
            GraphError::InvalidDataset(_) => "INVALID_DATASET",
        }
    }
}
