//! Entity-agnostic view rendering.
//!
//! A [`ViewSpec`] turns any `Serialize` entity into a [`ViewRecord`]: the
//! entity's JSON object with per-field rules applied. Fields without a rule
//! pass through unchanged. View records are never persisted and are
//! recomputed on every read.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::masking::MaskPolicy;

/// The external-facing projection of an entity.
pub type ViewRecord = Map<String, Value>;

/// What happens to a single field when an entity is rendered.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Mask string values; `null` and non-string values pass through.
    Mask(MaskPolicy),
    /// Emit the value under a different key, replacing any field already
    /// using that key.
    Rename(String),
    /// Drop the field.
    Omit,
    /// Apply another spec to an object field, or to each object in an array field.
    Nested(ViewSpec),
}

/// Per-field rendering rules for one entity shape.
#[derive(Debug, Clone, Default)]
pub struct ViewSpec {
    rules: Vec<(String, FieldRule)>,
}

impl ViewSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mask(self, field: &str, policy: MaskPolicy) -> Self {
        self.rule(field, FieldRule::Mask(policy))
    }

    pub fn rename(self, field: &str, to: &str) -> Self {
        self.rule(field, FieldRule::Rename(to.to_string()))
    }

    pub fn omit(self, field: &str) -> Self {
        self.rule(field, FieldRule::Omit)
    }

    pub fn nested(self, field: &str, spec: ViewSpec) -> Self {
        self.rule(field, FieldRule::Nested(spec))
    }

    /// Set the rule for `field`, replacing any earlier rule for it.
    pub fn rule(mut self, field: &str, rule: FieldRule) -> Self {
        match self.rules.iter_mut().find(|(name, _)| name == field) {
            Some(existing) => existing.1 = rule,
            None => self.rules.push((field.to_string(), rule)),
        }
        self
    }

    fn rule_for(&self, field: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    /// Render one entity.
    ///
    /// Fails with [`CoreError::Internal`] if the entity does not serialize to
    /// a JSON object.
    pub fn render<T: Serialize>(&self, entity: &T) -> Result<ViewRecord, CoreError> {
        let value = serde_json::to_value(entity)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize entity: {e}")))?;
        match value {
            Value::Object(map) => Ok(self.apply(map)),
            other => Err(CoreError::Internal(format!(
                "View rendering expects an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Render a list of entities, preserving order.
    pub fn render_all<T: Serialize>(&self, entities: &[T]) -> Result<Vec<ViewRecord>, CoreError> {
        entities.iter().map(|e| self.render(e)).collect()
    }

    /// Renamed values are written last, so a rename onto a name the entity
    /// already uses replaces that field. Two renames onto the same name
    /// resolve in rule order: the later rule wins.
    fn apply(&self, map: Map<String, Value>) -> ViewRecord {
        let mut out = Map::with_capacity(map.len());
        let mut renamed: Vec<(usize, String, Value)> = Vec::new();
        for (key, value) in map {
            match self.rule_for(&key) {
                None => {
                    out.insert(key, value);
                }
                Some(FieldRule::Omit) => {}
                Some(FieldRule::Rename(to)) => {
                    renamed.push((self.position_of(&key), to.clone(), value));
                }
                Some(FieldRule::Mask(policy)) => {
                    let masked = match value {
                        Value::String(s) => Value::String(policy.apply(&s)),
                        other => other,
                    };
                    out.insert(key, masked);
                }
                Some(FieldRule::Nested(spec)) => {
                    out.insert(key, spec.apply_value(value));
                }
            }
        }
        renamed.sort_by_key(|(position, _, _)| *position);
        for (_, to, value) in renamed {
            out.insert(to, value);
        }
        out
    }

    fn position_of(&self, field: &str) -> usize {
        self.rules
            .iter()
            .position(|(name, _)| name == field)
            .unwrap_or(usize::MAX)
    }

    fn apply_value(&self, value: Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.apply(map)),
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|v| self.apply_value(v)).collect())
            }
            other => other,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
