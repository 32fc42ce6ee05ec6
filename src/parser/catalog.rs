//! Catalog loading.
//!
//! The file is first read as loosely typed JSON so that an unknown
//! `parsingInfo.type` is reported as such instead of as a generic serde
//! failure, then converted into the typed [`Catalog`].

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigurationError;
use crate::model::{Catalog, CategoryItem, CollectableCategory, Necessity, ParsingInfo, Scoring};

const BUILTIN: &str = include_str!("../../catalog/silksong.json");

/// The catalog that ships with the binary.
pub fn builtin() -> Result<Catalog, ConfigurationError> {
    load_from_json(BUILTIN)
}

pub fn load_from_json(json: &str) -> Result<Catalog, ConfigurationError> {
    let raw: RawCatalog = serde_json::from_str(json)?;

    let categories = raw
        .categories
        .into_iter()
        .map(RawCategory::into_typed)
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog {
        version: raw.version,
        categories,
    };
    validate(&catalog)?;

    debug!(
        "catalog v{}: {} categories, {} items",
        catalog.version,
        catalog.categories.len(),
        catalog.categories.iter().map(|c| c.items.len()).sum::<usize>()
    );
    Ok(catalog)
}

impl ParsingInfo {
    /// Parse one untyped descriptor, rejecting tags the evaluator has no
    /// strategy for.
    pub fn from_value(value: &Value) -> Result<Self, ConfigurationError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ConfigurationError::MissingTag)?;
        if !Self::TAGS.contains(&tag) {
            return Err(ConfigurationError::UnknownParsingInfo { tag: tag.to_string() });
        }
        serde_json::from_value(value.clone()).map_err(|source| {
            ConfigurationError::MalformedParsingInfo {
                tag: tag.to_string(),
                source,
            }
        })
    }
}

/// Structural rules serde can't express.
pub fn validate(catalog: &Catalog) -> Result<(), ConfigurationError> {
    for category in &catalog.categories {
        match (category.necessity, category.scoring) {
            (Necessity::Primary, None) => {
                return Err(ConfigurationError::MissingScoring {
                    category: category.name.clone(),
                });
            }
            (Necessity::Supporting, Some(_)) => {
                return Err(ConfigurationError::UnexpectedScoring {
                    category: category.name.clone(),
                });
            }
            (_, Some(Scoring::DivideBy { divisor: 0 })) => {
                return Err(ConfigurationError::ZeroDivisor {
                    category: category.name.clone(),
                });
            }
            _ => {}
        }

        if let Some(item) = category.items.iter().find(|item| item.act > 3) {
            return Err(ConfigurationError::InvalidAct {
                item: item.name.clone(),
                act: item.act,
            });
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────
// Raw (untyped parsingInfo) mirror of the catalog file
// ─────────────────────────────────────────────────────
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    version: u32,
    categories: Vec<RawCategory>,
}

#[derive(Deserialize)]
struct RawCategory {
    name: String,
    necessity: Necessity,
    #[serde(default)]
    tooltip: String,
    #[serde(default)]
    scoring: Option<Scoring>,
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    name: String,
    #[serde(default)]
    act: u8,
    #[serde(default)]
    prerequisites: Vec<String>,
    #[serde(default)]
    location: String,
    parsing_info: Value,
}

impl RawCategory {
    fn into_typed(self) -> Result<CollectableCategory, ConfigurationError> {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                Ok(CategoryItem {
                    parsing_info: ParsingInfo::from_value(&item.parsing_info)?,
                    name: item.name,
                    act: item.act,
                    prerequisites: item.prerequisites,
                    location: item.location,
                })
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        Ok(CollectableCategory {
            name: self.name,
            necessity: self.necessity,
            tooltip: self.tooltip,
            scoring: self.scoring,
            items,
        })
    }
}
