use crate::cli::{Category, Cli, Commands};
use crate::commands::{load_inputs, resolve_filter};
use crate::domain::models::{FilterState, GraphReport, SelectionReport, StatsReport, YearsReport};
use crate::services::config::ConfigFile;
use crate::services::filter::{select_slice, FilterController};
use crate::services::output::{group_thousands, print_one};
use crate::services::render::{RecordingRenderer, Stage};
use crate::services::selection::{describe, resolve_selection};
use crate::services::stats::compute_stats;
use crate::services::weight::is_big_network;
use anyhow::Context;

pub fn handle_graph_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Graph { filter } => {
            let dataset = load_inputs(cli, config)?;
            let state = resolve_filter(filter, config, &dataset)?;
            let report = graph_report(FilterController::new(dataset, state), state, config)?;
            if cli.json {
                print_one(true, report, |_| String::new())?;
            } else {
                print_graph_text(&report);
            }
        }
        Commands::Stats { filter } => {
            let dataset = load_inputs(cli, config)?;
            let state = resolve_filter(filter, config, &dataset)?;
            let slice = select_slice(&dataset, &state)?;
            let stats = compute_stats(&slice)?;
            let report = StatsReport {
                filter: state,
                operators: slice.len(),
                big_network: is_big_network(slice.len()),
                stats,
            };
            print_one(cli.json, report, |r| {
                format!(
                    "operators={} min={} max={} total={} big_network={}",
                    r.operators,
                    r.stats.min,
                    r.stats.max,
                    group_thousands(r.stats.total),
                    r.big_network
                )
            })?;
        }
        Commands::Select { id, filter } => {
            let dataset = load_inputs(cli, config)?;
            let state = resolve_filter(filter, config, &dataset)?;
            let slice = select_slice(&dataset, &state)?;
            let metadata = &dataset.category(state.category).operators;
            let selection = resolve_selection(Some(id.as_str()), &slice, metadata);
            let report = SelectionReport {
                description: selection.as_ref().map(describe),
                selection,
            };
            print_one(cli.json, report, |r| {
                r.description
                    .clone()
                    .unwrap_or_else(|| format!("no selection for id {}", id))
            })?;
        }
        Commands::Years { category } => {
            let dataset = load_inputs(cli, config)?;
            let category = category
                .or(config.defaults.category)
                .unwrap_or(Category::Mobile);
            let report = YearsReport {
                category,
                years: dataset.years(category),
            };
            print_one(cli.json, report, |r| {
                r.years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn graph_report(
    mut controller: FilterController,
    state: FilterState,
    config: &ConfigFile,
) -> anyhow::Result<GraphReport> {
    let mut stage = Stage::new(RecordingRenderer::default(), config.render.clone());
    controller
        .apply_filters(state, &mut stage)
        .with_context(|| format!("apply filters for {} {}", state.category, state.year))?;
    let stats = compute_stats(controller.slice())?;
    let (graph, options) = stage
        .renderer()
        .last
        .clone()
        .ok_or_else(|| anyhow::anyhow!("renderer holds no graph after apply"))?;
    Ok(GraphReport {
        filter: *controller.state(),
        stats,
        graph,
        options,
        selector: controller.selector().clone(),
    })
}

fn print_graph_text(report: &GraphReport) {
    println!(
        "{} {} limit={} nodes={} edges={} big_network={}",
        report.filter.category,
        report.filter.year,
        report.filter.limit,
        report.graph.nodes.len(),
        report.graph.edges.len(),
        report.graph.big_network
    );
    for n in &report.graph.nodes {
        println!(
            "node\t{}\t{}\tsize={}\tlines={}",
            n.id,
            n.label,
            n.size_weight,
            group_thousands(n.raw_volume)
        );
    }
    for e in &report.graph.edges {
        println!("edge\t{}\t{}", e.from, e.to);
    }
}
