use crate::cli::Category;
use crate::domain::constants::ROOT_ID;
use crate::domain::errors::GraphError;
use crate::domain::models::Dataset;
use anyhow::Context;
use std::path::Path;

pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read dataset {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .map_err(|e| GraphError::InvalidDataset(e.to_string()))
        .with_context(|| format!("parse dataset {}", path.display()))?;
    validate(&dataset)?;
    tracing::info!(
        path = %path.display(),
        mobile_years = dataset.mobile.years.len(),
        landline_years = dataset.landline.years.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

pub fn save_dataset(path: &Path, dataset: &Dataset) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string(dataset)?)
        .with_context(|| format!("write dataset {}", path.display()))?;
    Ok(())
}

/// Rejects records the graph cannot represent: empty ids and operators
/// claiming the regulator's reserved id.
pub fn validate(dataset: &Dataset) -> Result<(), GraphError> {
    for category in [Category::Mobile, Category::Landline] {
        for (year, bucket) in &dataset.category(category).years {
            for op in &bucket.operators {
                if op.id.is_empty() {
                    return Err(GraphError::InvalidDataset(format!(
                        "{} {}: operator with empty id",
                        category, year
                    )));
                }
                if op.id == ROOT_ID {
                    return Err(GraphError::InvalidDataset(format!(
                        "{} {}: operator id {} is reserved for the regulator",
                        category, year, ROOT_ID
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_dataset, save_dataset};
    use crate::domain::errors::GraphError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_year_keyed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.json");
        fs::write(
            &path,
            r#"{
                "mobile": {
                    "operators": {"1": {"name": "X", "date_added": "2001-01-01"}},
                    "years": {"2020": {"operators": [{"id": "1", "volume": 10}]}}
                }
            }"#,
        )
        .unwrap();
        let data = load_dataset(&path).unwrap();
        let bucket = &data.mobile.years[&2020];
        assert_eq!(bucket.operators[0].volume, 10);
        assert!(bucket.operators[0].links.is_empty());
        assert!(data.landline.years.is_empty());
    }

    #[test]
    fn negative_volume_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.json");
        fs::write(
            &path,
            r#"{"mobile": {"years": {"2020": {"operators": [{"id": "1", "volume": -5}]}}}}"#,
        )
        .unwrap();
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::InvalidDataset(_))
        ));
    }

    #[test]
    fn reserved_root_id_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.json");
        fs::write(
            &path,
            r#"{"landline": {"years": {"2020": {"operators": [{"id": "0", "volume": 5}]}}}}"#,
        )
        .unwrap();
        let err = load_dataset(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("reserved"));
    }

    #[test]
    fn save_then_load_keeps_years() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/dataset.json");
        let mut data = crate::services::filter::tests::fixture();
        data.landline.years.clear();
        save_dataset(&path, &data).unwrap();
        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded.mobile.years, data.mobile.years);
    }
}
