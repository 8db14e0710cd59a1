use crate::cli::{Cli, Commands};
use crate::domain::models::{Dataset, ImportReport};
use crate::services::config::ConfigFile;
use crate::services::dataset::save_dataset;
use crate::services::import::{build_category, read_registries};
use crate::services::output::print_one;

pub fn handle_import(cli: &Cli, _config: &ConfigFile) -> anyhow::Result<bool> {
    let Commands::Import {
        landline,
        mobile,
        out,
    } = &cli.command
    else {
        return Ok(false);
    };

    let landline_registries = read_registries(landline)?;
    let mobile_registries = read_registries(mobile)?;
    if landline_registries.is_empty() {
        anyhow::bail!("no registries read from {}", landline.display());
    }
    if mobile_registries.is_empty() {
        anyhow::bail!("no registries read from {}", mobile.display());
    }

    let dataset = Dataset {
        mobile: build_category(&mobile_registries),
        landline: build_category(&landline_registries),
    };
    save_dataset(out, &dataset)?;

    let mut years: Vec<i32> = dataset
        .mobile
        .years
        .keys()
        .chain(dataset.landline.years.keys())
        .copied()
        .collect();
    years.sort_unstable();
    years.dedup();

    let report = ImportReport {
        out: out.to_string_lossy().to_string(),
        landline_registries: landline_registries.len(),
        mobile_registries: mobile_registries.len(),
        landline_operators: dataset.landline.operators.len(),
        mobile_operators: dataset.mobile.operators.len(),
        years,
    };
    tracing::info!(
        out = %report.out,
        landline_operators = report.landline_operators,
        mobile_operators = report.mobile_operators,
        "dataset written"
    );
    print_one(cli.json, report, |r| {
        format!(
            "wrote {} ({} landline / {} mobile operators)",
            r.out, r.landline_operators, r.mobile_operators
        )
    })?;
    Ok(true)
}
