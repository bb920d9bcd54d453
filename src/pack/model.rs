//! Item/block model files and their override lists.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::key::ResourceKey;

/// A conditional rule attached to a model that selects an alternate model
/// when its predicates match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOverride {
    /// Predicate values (e.g. `custom_model_data`) that activate the override.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub predicate: Map<String, Value>,

    /// Key of the model to substitute, as a key string.
    pub model: String,
}

impl ItemOverride {
    /// Create an override on a single numeric predicate.
    pub fn custom_model_data(value: u64, model: impl Into<String>) -> Self {
        let mut predicate = Map::new();
        predicate.insert("custom_model_data".to_string(), Value::from(value));
        Self {
            predicate,
            model: model.into(),
        }
    }
}

/// On-disk shape of a model file. Everything except the override list is
/// opaque to the merge rules and carried through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct ModelFile {
    #[serde(flatten)]
    extra: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    overrides: Vec<ItemOverride>,
}

/// A model entry in a resource pack.
///
/// Multiple packs routinely contribute override variants to the *same* model
/// (e.g. many items sharing `minecraft:item/paper`), so overrides are merged
/// additively rather than last-writer-wins; see [`crate::merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Resource key of this model (file path without `models/` or `.json`).
    pub key: ResourceKey,

    /// Ordered override rules. The client evaluates them in sequence.
    pub overrides: Vec<ItemOverride>,

    /// All other model fields (`parent`, `textures`, `elements`, ...).
    pub extra: Map<String, Value>,
}

impl Model {
    /// Create a model with no overrides and no extra fields.
    pub fn new(key: ResourceKey) -> Self {
        Self {
            key,
            overrides: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Parse a model from raw JSON bytes.
    pub fn from_json(key: ResourceKey, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let file: ModelFile = serde_json::from_slice(bytes)?;
        Ok(Self {
            key,
            overrides: file.overrides,
            extra: file.extra,
        })
    }

    /// Serialize back to model-file JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&ModelFile {
            extra: self.extra.clone(),
            overrides: self.overrides.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ResourceKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_overrides_in_order() {
        let raw = br#"{
            "parent": "item/generated",
            "textures": {"layer0": "item/paper"},
            "overrides": [
                {"predicate": {"custom_model_data": 1}, "model": "packmill:item/coin"},
                {"predicate": {"custom_model_data": 2}, "model": "packmill:item/gem"}
            ]
        }"#;
        let model = Model::from_json(key("item/paper"), raw).unwrap();
        assert_eq!(model.overrides.len(), 2);
        assert_eq!(model.overrides[0].model, "packmill:item/coin");
        assert_eq!(model.overrides[1].model, "packmill:item/gem");
        assert!(model.extra.contains_key("parent"));
    }

    #[test]
    fn test_round_trip_without_overrides() {
        let raw = br#"{"parent":"block/cube_all","textures":{"all":"block/stone"}}"#;
        let model = Model::from_json(key("block/stone"), raw).unwrap();
        assert!(model.overrides.is_empty());

        let written = model.to_json_bytes().unwrap();
        let reparsed = Model::from_json(key("block/stone"), &written).unwrap();
        assert_eq!(model, reparsed);
        // An empty override list is not materialized in the output.
        assert!(!String::from_utf8(written).unwrap().contains("overrides"));
    }

    #[test]
    fn test_custom_model_data_helper() {
        let o = ItemOverride::custom_model_data(7, "packmill:item/amulet");
        assert_eq!(o.predicate.get("custom_model_data"), Some(&Value::from(7)));
        assert_eq!(o.model, "packmill:item/amulet");
    }
}
