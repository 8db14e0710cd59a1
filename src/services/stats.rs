use crate::domain::errors::GraphError;
use crate::domain::models::{OperatorRecord, Stats};

pub fn compute_stats(operators: &[OperatorRecord]) -> Result<Stats, GraphError> {
    let first = operators.first().ok_or(GraphError::EmptyDataset)?;
    let mut stats = Stats {
        min: first.volume,
        max: first.volume,
        total: 0,
    };
    for op in operators {
        stats.total = stats.total.checked_add(op.volume).ok_or_else(|| {
            GraphError::InvalidDataset(format!("line total overflows at operator {}", op.id))
        })?;
        stats.min = stats.min.min(op.volume);
        stats.max = stats.max.max(op.volume);
    }
    Ok(stats)
}
