//! Evaluation results handed to the writers.

use serde::Serialize;

use super::{ActFilter, Necessity};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReport {
    pub name: String,
    pub act: u8,
    pub prerequisites: Vec<String>,
    pub location: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub name: String,
    pub tooltip: String,
    pub necessity: Necessity,
    /// Formula result over unlocked items for primary categories, plain
    /// unlocked count for supporting ones.
    pub unlocked_score: u32,
    /// Same measure over every item of the category, act filter ignored.
    pub max_score: u32,
    pub completed: bool,
    /// Only the items admitted by the act filter, in catalog order.
    pub items: Vec<ItemReport>,
}

impl CategoryReport {
    pub fn unlocked_items(&self) -> impl Iterator<Item = &ItemReport> {
        self.items.iter().filter(|item| item.unlocked)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub act_filter: ActFilter,
    pub categories: Vec<CategoryReport>,
    /// Sum of primary category scores. An estimate; it can disagree with
    /// `reported_completion`.
    pub total_score: u32,
    pub max_total_score: u32,
    /// `playerData.completionPercentage` from the save, if present.
    pub reported_completion: Option<f64>,
}
