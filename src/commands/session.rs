use crate::cli::{Cli, Commands};
use crate::commands::{load_inputs, resolve_filter};
use crate::domain::models::{ErrorBody, JsonOut};
use crate::services::config::ConfigFile;
use crate::services::filter::FilterController;
use crate::services::render::{RecordingRenderer, Stage};
use crate::services::session::{Session, SessionReply, UiEvent};
use anyhow::Context;
use serde::Serialize;
use std::io::Read;

#[derive(Serialize)]
pub struct SessionStep {
    pub event: Option<UiEvent>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<SessionReply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

pub fn handle_session(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    let Commands::Session { script, filter } = &cli.command else {
        return Ok(false);
    };

    let raw = match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read event script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read event script from stdin")?;
            buf
        }
    };
    let events = parse_script(&raw)?;

    let dataset = load_inputs(cli, config)?;
    let state = resolve_filter(filter, config, &dataset)?;
    let controller = FilterController::new(dataset, state);
    let stage = Stage::new(RecordingRenderer::default(), config.render.clone());
    let (mut session, first) = Session::start(controller, stage, state)
        .with_context(|| format!("start session at {} {}", state.category, state.year))?;

    let mut steps = vec![SessionStep {
        event: None,
        ok: true,
        reply: Some(first),
        error: None,
    }];
    for event in events {
        let step = match session.handle(event.clone()) {
            Ok(reply) => SessionStep {
                event: Some(event),
                ok: true,
                reply: Some(reply),
                error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "event rejected, previous graph kept");
                SessionStep {
                    event: Some(event),
                    ok: false,
                    reply: None,
                    error: Some(ErrorBody {
                        code: e.code().to_string(),
                        message: e.to_string(),
                    }),
                }
            }
        };
        steps.push(step);
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &steps
            })?
        );
    } else {
        for step in &steps {
            println!("{}", step_line(step));
        }
    }
    Ok(true)
}

/// One event per line; blank lines and `#` comments are skipped.
pub fn parse_script(raw: &str) -> anyhow::Result<Vec<UiEvent>> {
    raw.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
        .map(|(i, l)| {
            serde_json::from_str::<UiEvent>(l.trim()).with_context(|| format!("event script line {}", i + 1))
        })
        .collect()
}

fn step_line(step: &SessionStep) -> String {
    if let Some(err) = &step.error {
        return format!("error\t{}\t{}", err.code, err.message);
    }
    match &step.reply {
        Some(SessionReply::YearLabel { text }) => format!("year\t{}", text),
        Some(SessionReply::Rebuilt {
            filter,
            nodes,
            edges,
            loading,
            ..
        }) => format!(
            "graph\t{} {} limit={}\tnodes={} edges={} loading={}",
            filter.category, filter.year, filter.limit, nodes, edges, loading
        ),
        Some(SessionReply::Selected { description, .. }) => format!("selected\t{}", description),
        Some(SessionReply::Drawn) => "drawn".to_string(),
        Some(SessionReply::Ignored) | None => "ignored".to_string(),
    }
}
