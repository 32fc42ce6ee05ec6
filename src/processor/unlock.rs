//! Unlock predicates: one lookup strategy per [`ParsingInfo`] variant.
//!
//! Every lookup is null-safe. A missing section, list or entry is simply
//! "not unlocked".

use serde_json::Value;

use crate::error::ConfigurationError;
use crate::model::{ParsingInfo, SaveState};

const QUESTS: &str = "QuestCompletionData";
const TOOLS: &str = "Tools";
const CRESTS: &str = "ToolEquips";
const COLLECTABLES: &str = "Collectables";

pub fn is_unlocked(info: &ParsingInfo, save: &SaveState) -> bool {
    match info {
        ParsingInfo::Flag { name } => save.player_field(name).is_some_and(is_truthy),
        ParsingInfo::TempIntFlag { name, threshold } => save
            .player_field(name)
            .and_then(Value::as_f64)
            .is_some_and(|value| value >= *threshold as f64),
        ParsingInfo::Quest { name } => field_is_true(save.named_entry(QUESTS, name), "IsCompleted"),
        ParsingInfo::SceneData { key: (scene, id) } => save.scene_bool(scene, id) == Some(true),
        ParsingInfo::Tool { name } => tool_unlocked(save, name),
        ParsingInfo::UpgradableTool { names } => names.iter().any(|name| tool_unlocked(save, name)),
        ParsingInfo::Crest { name } => field_is_true(save.named_entry(CRESTS, name), "IsUnlocked"),
        ParsingInfo::Collectable { name } => save
            .named_entry(COLLECTABLES, name)
            .and_then(|data| data.get("Amount"))
            .and_then(Value::as_f64)
            .is_some_and(|amount| amount > 0.0),
    }
}

/// Same as [`is_unlocked`] for a descriptor that hasn't been typed yet.
/// Only an unrecognised tag (or a malformed descriptor) fails.
pub fn is_unlocked_value(info: &Value, save: &SaveState) -> Result<bool, ConfigurationError> {
    Ok(is_unlocked(&ParsingInfo::from_value(info)?, save))
}

fn tool_unlocked(save: &SaveState, name: &str) -> bool {
    let data = save.named_entry(TOOLS, name);
    // absent IsHidden means visible
    field_is_true(data, "IsUnlocked") && !field_is_true(data, "IsHidden")
}

fn field_is_true(data: Option<&Value>, field: &str) -> bool {
    data.and_then(|d| d.get(field)).and_then(Value::as_bool) == Some(true)
}

/// Loose truthiness as the game's own tooling sees flags: null, false, 0,
/// NaN and "" are false; everything else is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
