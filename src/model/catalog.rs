//! Typed catalog: what can be collected and how to recognise it in a save.

use serde::{Deserialize, Serialize};

/// How to test one catalog item against a [`super::SaveState`].
///
/// The JSON form is `{ "type": <tag>, "internalId": ..., ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ParsingInfo {
    /// Truthy `playerData[name]`.
    Flag {
        #[serde(rename = "internalId")]
        name: String,
    },
    /// `playerData[name] >= threshold`.
    TempIntFlag {
        #[serde(rename = "internalId")]
        name: String,
        threshold: i64,
    },
    /// Completed entry in `QuestCompletionData`.
    Quest {
        #[serde(rename = "internalId")]
        name: String,
    },
    /// Persistent scene bool `(scene, id)`.
    SceneData {
        #[serde(rename = "internalId")]
        key: (String, String),
    },
    /// Unlocked and visible entry in `Tools`.
    Tool {
        #[serde(rename = "internalId")]
        name: String,
    },
    /// Any one of several tool entries (upgrade levels of the same tool).
    UpgradableTool {
        #[serde(rename = "internalId")]
        names: Vec<String>,
    },
    /// Unlocked entry in `ToolEquips`.
    Crest {
        #[serde(rename = "internalId")]
        name: String,
    },
    /// Entry in `Collectables` with a positive amount.
    Collectable {
        #[serde(rename = "internalId")]
        name: String,
    },
}

impl ParsingInfo {
    /// Every tag the evaluator understands, as written in catalog JSON.
    pub const TAGS: &'static [&'static str] = &[
        "flag",
        "tempIntFlag",
        "quest",
        "sceneData",
        "tool",
        "upgradableTool",
        "crest",
        "collectable",
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Flag { .. } => "flag",
            Self::TempIntFlag { .. } => "tempIntFlag",
            Self::Quest { .. } => "quest",
            Self::SceneData { .. } => "sceneData",
            Self::Tool { .. } => "tool",
            Self::UpgradableTool { .. } => "upgradableTool",
            Self::Crest { .. } => "crest",
            Self::Collectable { .. } => "collectable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Necessity {
    /// Feeds the overall completion estimate.
    #[serde(alias = "main")]
    Primary,
    /// Tracked for visibility only.
    #[serde(alias = "essential")]
    Supporting,
}

/// Per-category completion formula for primary categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Scoring {
    /// One point per item.
    Count,
    /// `floor(count / divisor)`.
    DivideBy { divisor: u32 },
    /// `count - offset`, never below zero. Used where a baseline item is
    /// always unlocked and must not be counted.
    CountMinus { offset: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub name: String,
    /// Earliest act the item can be obtained in; 0 means always available.
    pub act: u8,
    /// Display only. May spoil progression.
    pub prerequisites: Vec<String>,
    pub location: String,
    pub parsing_info: ParsingInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectableCategory {
    pub name: String,
    pub necessity: Necessity,
    pub tooltip: String,
    /// Present iff `necessity == Primary`; enforced when the catalog loads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<Scoring>,
    pub items: Vec<CategoryItem>,
}

/// The full, ordered list of categories. Built once and passed by reference
/// into the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: u32,
    pub categories: Vec<CollectableCategory>,
}

/// Which acts are in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActFilter {
    #[default]
    All,
    UpTo(u8),
}

impl ActFilter {
    pub fn admits(self, act: u8) -> bool {
        match self {
            Self::All => true,
            Self::UpTo(max) => act == 0 || act <= max,
        }
    }
}

impl From<Option<u8>> for ActFilter {
    fn from(act: Option<u8>) -> Self {
        act.map_or(Self::All, Self::UpTo)
    }
}
