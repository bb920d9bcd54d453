//! Per-namespace sound event registries (`sounds.json`).

use serde_json::{Map, Value};

/// One named sound event and its opaque definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundEvent {
    /// Event name within the namespace, e.g. `block.anvil.use`.
    pub name: String,

    /// Event definition (`sounds` list, `subtitle`, ...), carried verbatim.
    pub definition: Value,
}

/// The sound registry of a single namespace.
///
/// Events are kept as an ordered sequence rather than a map: the merge rules
/// append one registry's events to another's, and file order must survive a
/// read/write cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundRegistry {
    /// Namespace this registry belongs to (`assets/<namespace>/sounds.json`).
    pub namespace: String,

    /// Sound events in file order.
    pub events: Vec<SoundEvent>,
}

impl SoundRegistry {
    /// Create an empty registry for a namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            events: Vec::new(),
        }
    }

    /// Parse from raw `sounds.json` bytes.
    pub fn from_json(namespace: impl Into<String>, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(bytes)?;
        Ok(Self {
            namespace: namespace.into(),
            events: object
                .into_iter()
                .map(|(name, definition)| SoundEvent { name, definition })
                .collect(),
        })
    }

    /// Serialize back to `sounds.json` bytes.
    ///
    /// If the event list carries duplicate names (possible after a merge),
    /// the first occurrence wins; later duplicates are dropped rather than
    /// silently overwriting the earlier entry in the emitted object.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut object = Map::new();
        for event in &self.events {
            if !object.contains_key(&event.name) {
                object.insert(event.name.clone(), event.definition.clone());
            }
        }
        serde_json::to_vec(&object)
    }
}
