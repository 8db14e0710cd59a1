//! Synchronous dispatch of UI events through the filter controller.
//!
//! Each event runs to completion before the next one is handled.

use crate::cli::Category;
use crate::domain::errors::GraphError;
use crate::domain::models::{FilterState, SelectionInfo, SelectorListing};
use crate::services::filter::FilterController;
use crate::services::render::{Renderer, Stage};
use crate::services::selection::{describe, resolve_selection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// Raw slider movement; only the year label follows it.
    YearInput { value: i32 },
    YearChange { year: i32 },
    LimitChange { limit: usize },
    Category { category: Category },
    NodeClick {
        #[serde(default)]
        id: Option<String>,
    },
    SelectorChange { id: String },
    AfterDrawing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum SessionReply {
    YearLabel {
        text: String,
    },
    Rebuilt {
        filter: FilterState,
        nodes: usize,
        edges: usize,
        big_network: bool,
        loading: bool,
        selector: SelectorListing,
    },
    Selected {
        selection: SelectionInfo,
        description: String,
    },
    Ignored,
    Drawn,
}

pub struct Session<R: Renderer> {
    controller: FilterController,
    stage: Stage<R>,
    year_label: String,
}

impl<R: Renderer> Session<R> {
    /// Runs the initial filter pass so the session starts with a model on stage.
    pub fn start(
        mut controller: FilterController,
        mut stage: Stage<R>,
        initial: FilterState,
    ) -> Result<(Self, SessionReply), GraphError> {
        controller.apply_filters(initial, &mut stage)?;
        let mut session = Self {
            controller,
            stage,
            year_label: initial.year.to_string(),
        };
        let reply = session.rebuilt();
        Ok((session, reply))
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<SessionReply, GraphError> {
        match event {
            UiEvent::YearInput { value } => {
                self.year_label = value.to_string();
                Ok(SessionReply::YearLabel {
                    text: self.year_label.clone(),
                })
            }
            UiEvent::YearChange { year } => {
                self.controller.change_year(year, &mut self.stage)?;
                self.year_label = year.to_string();
                Ok(self.rebuilt())
            }
            UiEvent::LimitChange { limit } => {
                self.controller.change_limit(limit, &mut self.stage)?;
                Ok(self.rebuilt())
            }
            UiEvent::Category { category } => {
                self.controller.change_category(category, &mut self.stage)?;
                Ok(self.rebuilt())
            }
            UiEvent::NodeClick { id } => Ok(self.select(id.as_deref())),
            UiEvent::SelectorChange { id } => Ok(self.select(Some(&id))),
            UiEvent::AfterDrawing => {
                self.stage.finish_drawing();
                Ok(SessionReply::Drawn)
            }
        }
    }

    /// Only nodes on the current graph are highlighted; the description is
    /// reported either way.
    fn select(&mut self, id: Option<&str>) -> SessionReply {
        let Some(info) = resolve_selection(
            id,
            self.controller.slice(),
            self.controller.metadata(),
        ) else {
            return SessionReply::Ignored;
        };
        let on_graph = self
            .controller
            .model()
            .and_then(|m| m.node(&info.id))
            .is_some();
        if on_graph {
            self.stage.select(&info.id);
        }
        let description = describe(&info);
        SessionReply::Selected {
            selection: info,
            description,
        }
    }

    fn rebuilt(&self) -> SessionReply {
        let (nodes, edges, big_network) = self
            .controller
            .model()
            .map(|m| (m.nodes.len(), m.edges.len(), m.big_network))
            .unwrap_or_default();
        SessionReply::Rebuilt {
            filter: *self.controller.state(),
            nodes,
            edges,
            big_network,
            loading: self.stage.is_loading(),
            selector: self.controller.selector().clone(),
        }
    }
}
