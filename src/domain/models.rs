use crate::cli::Category;
use crate::domain::constants::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OperatorRecord {
    pub id: String,
    pub volume: u64,
    /// Ids of the operators this one hangs from; each entry becomes an edge
    /// `link -> id`.
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OperatorMetadata {
    pub name: String,
    pub date_added: String,
}

pub type MetadataLookup = HashMap<String, OperatorMetadata>;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct YearBucket {
    #[serde(default)]
    pub operators: Vec<OperatorRecord>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CategoryData {
    #[serde(default)]
    pub operators: MetadataLookup,
    #[serde(default)]
    pub years: BTreeMap<i32, YearBucket>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Dataset {
    #[serde(default)]
    pub mobile: CategoryData,
    #[serde(default)]
    pub landline: CategoryData,
}

impl Dataset {
    pub fn category(&self, category: Category) -> &CategoryData {
        match category {
            Category::Mobile => &self.mobile,
            Category::Landline => &self.landline,
        }
    }

    /// Years present for `category`, ascending.
    pub fn years(&self, category: Category) -> Vec<i32> {
        self.category(category).years.keys().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub year: i32,
    pub limit: usize,
    pub category: Category,
}

impl FilterState {
    pub fn new(year: i32, limit: usize, category: Category) -> Self {
        Self {
            year,
            limit,
            category,
        }
    }

    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    pub fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self { category, ..self }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT, Category::Mobile)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub min: u64,
    pub max: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Operator,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub size_weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_weight: Option<f64>,
    pub display_text: String,
    pub raw_volume: u64,
    pub margin: u32,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GraphModel {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub big_network: bool,
}

impl GraphModel {
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorEntry {
    pub value: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SelectorListing {
    pub placeholder: String,
    pub entries: Vec<SelectorEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionInfo {
    pub id: String,
    pub name: String,
    pub date_added: String,
    /// `0` means the operator is not part of the current slice.
    pub volume: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    pub width: String,
    pub height: String,
    pub node_shape: String,
    pub edge_width: f64,
    pub edge_smooth: String,
    pub hide_edges_on_drag: bool,
    pub tooltip_delay_ms: u32,
    pub improved_layout: bool,
}

#[derive(Serialize)]
pub struct GraphReport {
    pub filter: FilterState,
    pub stats: Stats,
    pub graph: GraphModel,
    pub options: RenderOptions,
    pub selector: SelectorListing,
}

#[derive(Serialize)]
pub struct StatsReport {
    pub filter: FilterState,
    pub operators: usize,
    pub big_network: bool,
    pub stats: Stats,
}

#[derive(Serialize)]
pub struct SelectionReport {
    pub selection: Option<SelectionInfo>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct YearsReport {
    pub category: Category,
    pub years: Vec<i32>,
}

#[derive(Serialize)]
pub struct ImportReport {
    pub out: String,
    pub landline_registries: usize,
    pub mobile_registries: usize,
    pub landline_operators: usize,
    pub mobile_operators: usize,
    pub years: Vec<i32>,
}
