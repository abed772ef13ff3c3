//! Two-way binding between a remote entity and a set of declared form fields.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::TransportError;
use crate::model::Entity;

mod binder;

pub use self::binder::{EntityFormBinder, EntityFormModel};

/// A field the form declares, keyed like the entity it edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: true,
        }
    }

    pub fn optional(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Unhydrated,
    Hydrated,
    Submitting,
    Failed,
}

/// Flat key→value map sent back on save, in hydration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdatePayload(Vec<(String, String)>);

impl UpdatePayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_entity(&self) -> Entity {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect()
    }
}

impl FromIterator<(String, String)> for UpdatePayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Serialized as a map so the same value works for JSON and form encoding.
impl Serialize for UpdatePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Destination of a submitted form.
pub trait EntitySink {
    fn save(&self, payload: &UpdatePayload) -> Result<(), TransportError>;
}

impl<F> EntitySink for F
where
    F: Fn(&UpdatePayload) -> Result<(), TransportError>,
{
    fn save(&self, payload: &UpdatePayload) -> Result<(), TransportError> {
        self(payload)
    }
}

#[cfg(test)]
#[path = "tests/form/binder_tests.rs"]
mod tests;
