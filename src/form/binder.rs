use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, warn};

use super::{EntitySink, FieldSpec, FormPhase, UpdatePayload};
use crate::error::{SubmitError, TransportError, ValidationError};
use crate::model::Entity;

/// In-memory source of truth for the form; UI elements only render and feed it.
#[derive(Clone, Debug, Default)]
pub struct EntityFormModel {
    fields: HashMap<String, String>,
    required: HashSet<String>,
    labels: HashMap<String, String>,
    // Entity keys that matched a declared field, in entity order.
    bound: Vec<String>,
}

impl EntityFormModel {
    fn declare(specs: &[FieldSpec]) -> Self {
        let mut model = Self::default();
        for spec in specs {
            model.fields.insert(spec.key.clone(), String::new());
            model.labels.insert(spec.key.clone(), spec.label.clone());
            if spec.required {
                model.required.insert(spec.key.clone());
            }
        }
        model
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required.contains(key)
    }

    pub fn bound_keys(&self) -> &[String] {
        &self.bound
    }
}

pub struct EntityFormBinder {
    model: EntityFormModel,
    phase: FormPhase,
    focus: Option<String>,
}

impl EntityFormBinder {
    pub fn new(fields: &[FieldSpec]) -> Self {
        Self {
            model: EntityFormModel::declare(fields),
            phase: FormPhase::Unhydrated,
            focus: None,
        }
    }

    pub fn model(&self) -> &EntityFormModel {
        &self.model
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Saving may only be offered once hydrated (or after a failed save).
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, FormPhase::Hydrated | FormPhase::Failed)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.model.value(key)
    }

    /// Field that should receive input focus after a failed validation.
    pub fn focus_request(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Copies every entity value that has a declared field. Other keys are dropped.
    ///
    /// Ignored while a save is outstanding; the save's outcome must land first.
    pub fn hydrate(&mut self, entity: &Entity) {
        if self.phase == FormPhase::Submitting {
            warn!("hydrate ignored: save in progress");
            return;
        }
        self.model.bound.clear();
        for slot in self.model.fields.values_mut() {
            slot.clear();
        }
        for (key, value) in entity {
            let Some(slot) = self.model.fields.get_mut(key) else {
                continue;
            };
            *slot = display_value(value);
            self.model.bound.push(key.clone());
        }
        debug!(bound = self.model.bound.len(), "form hydrated");
        self.focus = None;
        self.phase = FormPhase::Hydrated;
    }

    /// Returns false when `key` is not a declared field.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.model.fields.get_mut(key) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Validates bound fields in hydration order; the first empty required field wins.
    pub fn collect(&mut self) -> Result<UpdatePayload, ValidationError> {
        let mut payload = Vec::with_capacity(self.model.bound.len());
        for key in &self.model.bound {
            let value = self.model.value(key).unwrap_or_default();
            if value.is_empty() && self.model.is_required(key) {
                self.focus = Some(key.clone());
                return Err(ValidationError {
                    field: key.clone(),
                    label: self.model.label(key).unwrap_or(key).to_string(),
                });
            }
            payload.push((key.clone(), value.to_string()));
        }
        self.focus = None;
        Ok(payload.into_iter().collect())
    }

    /// Validates and enters `Submitting`, handing back the payload to send.
    pub fn begin_submit(&mut self) -> Result<UpdatePayload, SubmitError> {
        match self.phase {
            FormPhase::Unhydrated => return Err(SubmitError::NotReady),
            FormPhase::Submitting => return Err(SubmitError::Busy),
            FormPhase::Hydrated | FormPhase::Failed => {}
        }
        let payload = self.collect()?;
        self.phase = FormPhase::Submitting;
        Ok(payload)
    }

    /// Records the save outcome. Field values are never touched.
    pub fn finish_submit(&mut self, result: Result<(), TransportError>) -> Result<(), SubmitError> {
        if self.phase != FormPhase::Submitting {
            return Err(SubmitError::NotReady);
        }
        match result {
            Ok(()) => {
                self.phase = FormPhase::Hydrated;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "form save failed");
                self.phase = FormPhase::Failed;
                Err(SubmitError::Transport(err))
            }
        }
    }

    pub fn submit<S>(&mut self, sink: &S) -> Result<(), SubmitError>
    where
        S: EntitySink + ?Sized,
    {
        let payload = self.begin_submit()?;
        let result = sink.save(&payload);
        self.finish_submit(result)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
