use crate::cli::Category;
use crate::domain::constants::SELECTOR_PLACEHOLDER;
use crate::domain::errors::GraphError;
use crate::domain::models::{
    Dataset, FilterState, GraphModel, MetadataLookup, NodeKind, OperatorRecord, SelectorEntry,
    SelectorListing,
};
use crate::services::graph::build;
use crate::services::render::{Renderer, Stage};

/// Owns the filter state and the active slice.
///
/// Every change re-sorts and re-slices the dataset and rebuilds the graph
/// from scratch. Nothing is committed until the whole rebuild succeeded, so
/// a failing change leaves the previous slice and model in place.
pub struct FilterController {
    dataset: Dataset,
    state: FilterState,
    slice: Vec<OperatorRecord>,
    selector: SelectorListing,
    model: Option<GraphModel>,
}

impl FilterController {
    pub fn new(dataset: Dataset, state: FilterState) -> Self {
        Self {
            dataset,
            state,
            slice: Vec::new(),
            selector: SelectorListing::default(),
            model: None,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn slice(&self) -> &[OperatorRecord] {
        &self.slice
    }

    pub fn selector(&self) -> &SelectorListing {
        &self.selector
    }

    pub fn model(&self) -> Option<&GraphModel> {
        self.model.as_ref()
    }

    /// Metadata of the active category.
    pub fn metadata(&self) -> &MetadataLookup {
        &self.dataset.category(self.state.category).operators
    }

    pub fn apply_filters<R: Renderer>(
        &mut self,
        state: FilterState,
        stage: &mut Stage<R>,
    ) -> Result<&GraphModel, GraphError> {
        let slice = select_slice(&self.dataset, &state)?;
        let metadata = &self.dataset.category(state.category).operators;
        let model = build(&slice, metadata)?;
        let selector = selector_listing(&model);

        tracing::debug!(
            category = %state.category,
            year = state.year,
            limit = state.limit,
            operators = slice.len(),
            "filters applied"
        );

        stage.show(&model);
        self.state = state;
        self.slice = slice;
        self.selector = selector;
        Ok(&*self.model.insert(model))
    }

    pub fn change_category<R: Renderer>(
        &mut self,
        category: Category,
        stage: &mut Stage<R>,
    ) -> Result<&GraphModel, GraphError> {
        self.apply_filters(self.state.with_category(category), stage)
    }

    pub fn change_year<R: Renderer>(
        &mut self,
        year: i32,
        stage: &mut Stage<R>,
    ) -> Result<&GraphModel, GraphError> {
        self.apply_filters(self.state.with_year(year), stage)
    }

    pub fn change_limit<R: Renderer>(
        &mut self,
        limit: usize,
        stage: &mut Stage<R>,
    ) -> Result<&GraphModel, GraphError> {
        self.apply_filters(self.state.with_limit(limit), stage)
    }
}

/// The `state.limit` largest operators of the selected year, by volume
/// descending. Equal volumes keep their dataset order.
pub fn select_slice(
    dataset: &Dataset,
    state: &FilterState,
) -> Result<Vec<OperatorRecord>, GraphError> {
    if state.limit == 0 {
        return Err(GraphError::InvalidLimit(state.limit));
    }
    let bucket = dataset
        .category(state.category)
        .years
        .get(&state.year)
        .ok_or(GraphError::UnknownYear {
            category: state.category,
            year: state.year,
        })?;
    let mut operators = bucket.operators.clone();
    operators.sort_by(|a, b| b.volume.cmp(&a.volume));
    operators.truncate(state.limit);
    Ok(operators)
}

/// Operator nodes of `model` in slice order, labelled as on the graph.
pub fn selector_listing(model: &GraphModel) -> SelectorListing {
    SelectorListing {
        placeholder: SELECTOR_PLACEHOLDER.to_string(),
        entries: model
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Operator)
            .map(|n| SelectorEntry {
                value: n.id.clone(),
                text: n.label.clone(),
            })
            .collect(),
    }
}
