use crate::domain::constants::{MAX_SIZE, ROOT_DATE_ADDED, ROOT_ID, ROOT_LABEL, ROOT_NAME};
use crate::domain::errors::GraphError;
use crate::domain::models::{
    EdgeView, GraphModel, MetadataLookup, NodeKind, NodeView, OperatorMetadata, OperatorRecord,
};
use crate::services::output::group_thousands;
use crate::services::stats::compute_stats;
use crate::services::weight::{derive_mass, derive_size, is_big_network};
use std::borrow::Cow;

/// Builds the node and edge set for `slice`.
///
/// The regulator root always comes first. Every entry in an operator's
/// `links` becomes one edge `link -> operator`; link sources outside the
/// slice are kept as dangling edges.
pub fn build(
    slice: &[OperatorRecord],
    metadata: &MetadataLookup,
) -> Result<GraphModel, GraphError> {
    let stats = compute_stats(slice)?;
    let node_count = slice.len();
    let big_network = is_big_network(node_count);
    let mass = (!big_network).then(|| derive_mass(node_count));

    let mut nodes = Vec::with_capacity(node_count + 1);
    nodes.push(NodeView {
        id: ROOT_ID.to_string(),
        label: ROOT_LABEL.to_string(),
        size_weight: MAX_SIZE,
        mass_weight: None,
        display_text: format!(
            "{}\nDate added:\t{}\nDistributed lines :\t{}",
            ROOT_NAME,
            ROOT_DATE_ADDED,
            group_thousands(stats.total)
        ),
        raw_volume: stats.total,
        margin: 6,
        kind: NodeKind::Root,
    });

    let mut edges = Vec::with_capacity(slice.iter().map(|op| op.links.len()).sum());
    for op in slice {
        let meta = metadata_or_placeholder(metadata, &op.id);
        let size = derive_size(op.volume, &stats);
        nodes.push(NodeView {
            id: op.id.clone(),
            label: meta.name.clone(),
            size_weight: size,
            mass_weight: mass,
            display_text: format!(
                "{}\nDate added:\t{}\nTotal lines:\t{}",
                meta.name,
                meta.date_added,
                group_thousands(op.volume)
            ),
            raw_volume: op.volume,
            margin: 2 * (1 + size),
            kind: NodeKind::Operator,
        });
        edges.extend(op.links.iter().map(|link| EdgeView {
            from: link.clone(),
            to: op.id.clone(),
        }));
    }

    tracing::debug!(
        operators = node_count,
        edges = edges.len(),
        min = stats.min,
        max = stats.max,
        total = stats.total,
        big_network,
        "graph built"
    );

    Ok(GraphModel {
        nodes,
        edges,
        big_network,
    })
}

/// Looks up an operator's metadata, degrading to a placeholder when the
/// lookup has no entry.
pub fn metadata_or_placeholder<'a>(
    metadata: &'a MetadataLookup,
    id: &str,
) -> Cow<'a, OperatorMetadata> {
    match metadata.get(id) {
        Some(m) => Cow::Borrowed(m),
        None => {
            tracing::warn!("{}", GraphError::MissingMetadata(id.to_string()));
            Cow::Owned(OperatorMetadata {
                name: format!("Unknown operator {}", id),
                date_added: "n/a".to_string(),
            })
        }
    }
}
