//! Component 2 – the functional core.
//!
//! Takes a decoded save and the catalog, decides per item whether it is
//! unlocked and aggregates per-category scores.
pub mod scoring;
pub mod unlock;

pub use scoring::score_category;
pub use unlock::{is_unlocked, is_unlocked_value};

use log::{debug, info, warn};

use crate::model::{
    ActFilter, Catalog, CatalogReport, CategoryItem, CategoryReport, CollectableCategory, ItemReport,
    Necessity, SaveState,
};

/// Runs every category through the unlock predicates and scoring rules.
pub fn evaluate_catalog(catalog: &Catalog, save: &SaveState, act_filter: ActFilter) -> CatalogReport {
    let categories: Vec<CategoryReport> = catalog
        .categories
        .iter()
        .map(|category| evaluate_category(category, save, act_filter))
        .collect();

    let primary = || {
        categories
            .iter()
            .filter(|c| c.necessity == Necessity::Primary)
    };
    let total_score: u32 = primary().map(|c| c.unlocked_score).sum();
    let max_total_score: u32 = primary().map(|c| c.max_score).sum();
    let reported_completion = save.reported_completion();

    info!("Expected completion: {total_score}/{max_total_score}");
    match reported_completion {
        Some(actual) if actual != f64::from(total_score) => {
            warn!("Save reports {actual}% completion, catalog estimate is {total_score}%")
        }
        Some(actual) => info!("Actual completion: {actual}"),
        None => debug!("save has no completionPercentage"),
    }

    CatalogReport {
        act_filter,
        categories,
        total_score,
        max_total_score,
        reported_completion,
    }
}

pub fn evaluate_category(
    category: &CollectableCategory,
    save: &SaveState,
    act_filter: ActFilter,
) -> CategoryReport {
    let shown: Vec<(&CategoryItem, bool)> = category
        .items
        .iter()
        .filter(|item| act_filter.admits(item.act))
        .map(|item| (item, is_unlocked(&item.parsing_info, save)))
        .collect();

    let unlocked: Vec<&CategoryItem> = shown
        .iter()
        .filter(|(_, unlocked)| *unlocked)
        .map(|(item, _)| *item)
        .collect();
    let all: Vec<_> = category.items.iter().collect();

    let unlocked_score = score_category(category, &unlocked);
    let max_score = score_category(category, &all);

    debug!(
        "{}: {}/{} items shown unlocked, score {unlocked_score}/{max_score}",
        category.name,
        unlocked.len(),
        shown.len()
    );

    let items = shown
        .into_iter()
        .map(|(item, unlocked)| ItemReport {
            name: item.name.clone(),
            act: item.act,
            prerequisites: item.prerequisites.clone(),
            location: item.location.clone(),
            unlocked,
        })
        .collect();

    CategoryReport {
        name: category.name.clone(),
        tooltip: category.tooltip.clone(),
        necessity: category.necessity,
        unlocked_score,
        max_score,
        completed: max_score > 0 && unlocked_score == max_score,
        items,
    }
}
