//! Category completion formulas.

use crate::model::{CategoryItem, CollectableCategory, Necessity, Scoring};

impl Scoring {
    pub fn apply(self, count: usize) -> u32 {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        match self {
            Scoring::Count => count,
            Scoring::DivideBy { divisor } => count.checked_div(divisor).unwrap_or(0),
            Scoring::CountMinus { offset } => count.saturating_sub(offset),
        }
    }
}

/// Score of `items` within `category`.
///
/// Primary categories run their formula; supporting categories just count.
/// A primary category without a formula (rejected at catalog load) scores
/// as a plain count.
pub fn score_category(category: &CollectableCategory, items: &[&CategoryItem]) -> u32 {
    match (category.necessity, category.scoring) {
        (Necessity::Primary, Some(scoring)) => scoring.apply(items.len()),
        _ => Scoring::Count.apply(items.len()),
    }
}
