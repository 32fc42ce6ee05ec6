pub mod catalog;
pub mod report;

pub use catalog::{ActFilter, Catalog, CategoryItem, CollectableCategory, Necessity, ParsingInfo, Scoring};
pub use report::{CatalogReport, CategoryReport, ItemReport};

use serde_json::Value;

/// Decrypted player save, exactly as the game wrote it.
///
/// The document has no fixed schema we can rely on across game versions, so
/// we keep it as a raw `Value` and only ever reach into it through the
/// accessors below. Every accessor returns `None` for anything missing or of
/// the wrong shape; callers treat that as "not unlocked".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveState {
    root: Value,
}

impl SaveState {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }

    pub fn raw(&self) -> &Value {
        &self.root
    }

    /// `playerData[name]`.
    pub fn player_field(&self, name: &str) -> Option<&Value> {
        self.root.get("playerData")?.get(name)
    }

    /// Looks up `playerData[list].savedData[]` for the entry whose `Name`
    /// equals `name` and returns its `Data` record.
    ///
    /// Quests, tools, crests and collectables all share this layout.
    pub fn named_entry(&self, list: &str, name: &str) -> Option<&Value> {
        self.player_field(list)?
            .get("savedData")?
            .as_array()?
            .iter()
            .find(|entry| entry.get("Name").and_then(Value::as_str) == Some(name))?
            .get("Data")
    }

    /// Value of the persistent scene bool keyed by `(scene, id)`.
    pub fn scene_bool(&self, scene: &str, id: &str) -> Option<bool> {
        self.root
            .get("sceneData")?
            .get("persistentBools")?
            .get("serializedList")?
            .as_array()?
            .iter()
            .find(|entry| {
                entry.get("SceneName").and_then(Value::as_str) == Some(scene)
                    && entry.get("ID").and_then(Value::as_str) == Some(id)
            })?
            .get("Value")?
            .as_bool()
    }

    /// The completion percentage the game itself stored in the save.
    pub fn reported_completion(&self) -> Option<f64> {
        self.player_field("completionPercentage")?.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors_tolerate_missing_sections() {
        let empty = SaveState::default();
        assert!(empty.player_field("anything").is_none());
        assert!(empty.named_entry("Tools", "Straight Pin").is_none());
        assert!(empty.scene_bool("Crawl_02", "Heart Piece").is_none());
        assert!(empty.reported_completion().is_none());

        // wrong shapes are "missing" too
        let odd = SaveState::from_value(json!({
            "playerData": { "Tools": { "savedData": "not a list" } },
            "sceneData": { "persistentBools": 7 }
        }));
        assert!(odd.named_entry("Tools", "Straight Pin").is_none());
        assert!(odd.scene_bool("Crawl_02", "Heart Piece").is_none());
    }

    #[test]
    fn named_entry_matches_exact_name() {
        let save = SaveState::from_value(json!({
            "playerData": {
                "Tools": { "savedData": [
                    { "Name": "Pin", "Data": { "IsUnlocked": false } },
                    { "Name": "Straight Pin", "Data": { "IsUnlocked": true } }
                ]}
            }
        }));

        let data = save.named_entry("Tools", "Straight Pin").expect("entry");
        assert_eq!(data["IsUnlocked"], json!(true));
        assert!(save.named_entry("Tools", "straight pin").is_none());
    }

    #[test]
    fn scene_bool_needs_both_keys() {
        let save = SaveState::from_value(json!({
            "sceneData": { "persistentBools": { "serializedList": [
                { "SceneName": "Dock_08", "ID": "Heart Piece", "Value": true },
                { "SceneName": "Bone_11b", "ID": "Silk Spool", "Value": false }
            ]}}
        }));

        assert_eq!(save.scene_bool("Dock_08", "Heart Piece"), Some(true));
        assert_eq!(save.scene_bool("Bone_11b", "Silk Spool"), Some(false));
        assert_eq!(save.scene_bool("Dock_08", "Silk Spool"), None);
    }
}
