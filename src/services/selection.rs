use crate::domain::constants::ROOT_ID;
use crate::domain::models::{MetadataLookup, OperatorRecord, SelectionInfo};
use crate::services::graph::metadata_or_placeholder;
use crate::services::output::group_thousands;

/// Resolves a clicked or selected node id to its operator.
///
/// Returns `None` without any lookup for the root id or when nothing was hit.
pub fn resolve_selection(
    id: Option<&str>,
    slice: &[OperatorRecord],
    metadata: &MetadataLookup,
) -> Option<SelectionInfo> {
    let id = id.filter(|id| *id != ROOT_ID)?;
    let volume = slice
        .iter()
        .find(|op| op.id == id)
        .map(|op| op.volume)
        .unwrap_or(0);
    let meta = metadata_or_placeholder(metadata, id);
    Some(SelectionInfo {
        id: id.to_string(),
        name: meta.name.clone(),
        date_added: meta.date_added.clone(),
        volume,
    })
}

pub fn describe(info: &SelectionInfo) -> String {
    let mut text = format!("  {} (added: {})", info.name, info.date_added);
    if info.volume != 0 {
        text.push_str(&format!(". Total lines: {}", group_thousands(info.volume)));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{describe, resolve_selection};
    use crate::domain::models::{MetadataLookup, OperatorMetadata, OperatorRecord};
    use crate::services::graph::build;

    fn slice() -> Vec<OperatorRecord> {
        vec![OperatorRecord {
            id: "2".to_string(),
            volume: 300_000,
            links: vec!["1".to_string()],
        }]
    }

    fn meta() -> MetadataLookup {
        [("1", "X"), ("2", "Y")]
            .iter()
            .map(|(id, name)| {
                (
                    id.to_string(),
                    OperatorMetadata {
                        name: name.to_string(),
                        date_added: "1999-12-01".to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn root_and_empty_clicks_are_no_ops() {
        assert!(resolve_selection(Some("0"), &slice(), &meta()).is_none());
        assert!(resolve_selection(None, &slice(), &meta()).is_none());
    }

    #[test]
    fn operator_in_slice_reports_volume() {
        let info = resolve_selection(Some("2"), &slice(), &meta()).unwrap();
        assert_eq!(info.name, "Y");
        assert_eq!(info.volume, 300_000);
        assert_eq!(describe(&info), "  Y (added: 1999-12-01). Total lines: 300,000");
    }

    #[test]
    fn operator_outside_slice_has_no_volume() {
        let info = resolve_selection(Some("1"), &slice(), &meta()).unwrap();
        assert_eq!(info.volume, 0);
        assert_eq!(describe(&info), "  X (added: 1999-12-01)");
    }

    #[test]
    fn unknown_id_gets_placeholder_metadata() {
        let info = resolve_selection(Some("77"), &slice(), &meta()).unwrap();
        assert_eq!(info.name, "Unknown operator 77");
        assert_eq!(info.date_added, "n/a");
    }

    #[test]
    fn placeholder_matches_graph_label() {
        let slice = vec![OperatorRecord {
            id: "77".to_string(),
            volume: 5,
            links: vec![],
        }];
        let model = build(&slice, &meta()).unwrap();
        let info = resolve_selection(Some("77"), &slice, &meta()).unwrap();
        assert_eq!(model.nodes[1].label, info.name);
        assert_eq!(info.volume, 5);
    }
}
