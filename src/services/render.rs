//! Seam to the rendering collaborator.
//!
//! At most one rendered instance is live at a time: `Stage::show` destroys
//! the previous one before presenting the next.

use crate::domain::models::{GraphModel, RenderOptions};
use crate::services::config::RenderConfig;
use serde::Serialize;

pub trait Renderer {
    fn present(&mut self, model: &GraphModel, options: &RenderOptions);
    fn destroy(&mut self);
    fn select_node(&mut self, id: &str);
}

pub fn render_options(model: &GraphModel, config: &RenderConfig) -> RenderOptions {
    RenderOptions {
        width: config.width.clone(),
        height: config.height.clone(),
        node_shape: "box".to_string(),
        edge_width: config.edge_width,
        edge_smooth: "continuous".to_string(),
        hide_edges_on_drag: true,
        tooltip_delay_ms: config.tooltip_delay_ms,
        improved_layout: !model.big_network,
    }
}

pub struct Stage<R: Renderer> {
    renderer: R,
    config: RenderConfig,
    live: bool,
    loading: bool,
}

impl<R: Renderer> Stage<R> {
    pub fn new(renderer: R, config: RenderConfig) -> Self {
        Self {
            renderer,
            config,
            live: false,
            loading: false,
        }
    }

    pub fn show(&mut self, model: &GraphModel) {
        if self.is_live() {
            self.renderer.destroy();
            self.live = false;
        }
        let options = render_options(model, &self.config);
        self.loading = model.big_network;
        self.renderer.present(model, &options);
        self.live = true;
    }

    /// "Finished initial draw" notification; drops the loading indicator.
    pub fn finish_drawing(&mut self) {
        self.loading = false;
    }

    pub fn select(&mut self, id: &str) {
        if self.is_live() {
            self.renderer.select_node(id);
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum RenderCall {
    Present { nodes: usize, edges: usize },
    Destroy,
    SelectNode { id: String },
}

/// Headless renderer: records lifecycle calls and keeps the last frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
    pub last: Option<(GraphModel, RenderOptions)>,
}

impl Renderer for RecordingRenderer {
    fn present(&mut self, model: &GraphModel, options: &RenderOptions) {
        self.calls.push(RenderCall::Present {
            nodes: model.nodes.len(),
            edges: model.edges.len(),
        });
        self.last = Some((model.clone(), options.clone()));
    }

    fn destroy(&mut self) {
        self.calls.push(RenderCall::Destroy);
        self.last = None;
    }

    fn select_node(&mut self, id: &str) {
        self.calls.push(RenderCall::SelectNode { id: id.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::{render_options, RecordingRenderer, RenderCall, Stage};
    use crate::domain::models::GraphModel;
    use crate::services::config::RenderConfig;

    fn model(big: bool) -> GraphModel {
        GraphModel {
            big_network: big,
            ..GraphModel::default()
        }
    }

    #[test]
    fn previous_instance_is_destroyed_before_next_present() {
        let mut stage = Stage::new(RecordingRenderer::default(), RenderConfig::default());
        stage.show(&model(false));
        stage.show(&model(false));
        assert_eq!(
            stage.renderer().calls,
            vec![
                RenderCall::Present { nodes: 0, edges: 0 },
                RenderCall::Destroy,
                RenderCall::Present { nodes: 0, edges: 0 },
            ]
        );
        assert!(stage.is_live());
    }

    #[test]
    fn big_network_shows_loading_until_drawn() {
        let mut stage = Stage::new(RecordingRenderer::default(), RenderConfig::default());
        stage.show(&model(true));
        assert!(stage.is_loading());
        stage.finish_drawing();
        assert!(!stage.is_loading());

        stage.show(&model(false));
        assert!(!stage.is_loading());
    }

    #[test]
    fn select_before_any_present_is_ignored() {
        let mut stage = Stage::new(RecordingRenderer::default(), RenderConfig::default());
        stage.select("3");
        assert!(stage.renderer().calls.is_empty());
    }

    #[test]
    fn big_network_disables_improved_layout() {
        let cfg = RenderConfig::default();
        assert!(render_options(&model(false), &cfg).improved_layout);
        assert!(!render_options(&model(true), &cfg).improved_layout);
        assert_eq!(render_options(&model(true), &cfg).tooltip_delay_ms, 200);
    }
}
