use crate::{
    error::Error,
    model::{
        attributes::Attributes,
        relationships::{Related, Relationships},
    },
    obs::metrics,
};
use serde_json::Value;
use std::sync::Arc;
use wiremodel_schema::{build::resolved_model, resolve::ResolvedModel};

///
/// Record
///
/// One model instance: a resolved schema handle, the attribute store, and
/// the relationship containers. Instance reads/writes and the exposed
/// `attributes` map are two views of the same store, never copies.
///

#[derive(Clone, Debug)]
pub struct Record {
    model: Arc<ResolvedModel>,
    attributes: Attributes,
    relationships: Relationships,
}

impl Record {
    /// Construct an empty record for the model at `path`. Every declared
    /// attribute is enumerable immediately; every declared relationship
    /// already holds its default container.
    pub fn new(path: &str) -> Result<Self, Error> {
        let model = resolved_model(path)?;
        let relationships = Relationships::defaulted(&model);

        metrics::record_constructed();

        Ok(Self {
            model,
            attributes: Attributes::new(),
            relationships,
        })
    }

    /// Construct from a raw wire payload. The payload must be a JSON
    /// object; anything else is caller misuse and fails.
    pub fn from_payload(path: &str, payload: &Value) -> Result<Self, Error> {
        let mut record = Self::new(path)?;
        record.apply_payload(payload)?;

        Ok(record)
    }

    /// Merge a raw payload into the store: normalize each key under the
    /// model's policy, admit declared names, drop the rest. Dropping is
    /// silent so that additive server-side fields never break a client.
    /// When several raw keys normalize to the same declared name, the
    /// last one in payload iteration order wins.
    pub fn apply_payload(&mut self, payload: &Value) -> Result<(), Error> {
        let Value::Object(map) = payload else {
            return Err(Error::PayloadNotObject {
                kind: json_kind(payload),
            });
        };

        for (raw, value) in map {
            if let Some(name) = self.model.admit_key(raw) {
                self.attributes.insert(name, value.clone());
            }
        }

        metrics::payload_applied();

        Ok(())
    }

    /// Resolved schema this record was bound against.
    #[must_use]
    pub fn model(&self) -> &ResolvedModel {
        &self.model
    }

    #[must_use]
    pub fn path(&self) -> &str {
        self.model.path()
    }

    /// Read one attribute through the store. `None` until set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Write one attribute through the store. The name is normalized
    /// under the model's key policy; undeclared names are not written and
    /// `false` is returned.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.model.admit_key(name) {
            Some(canonical) => {
                self.attributes.insert(canonical, value);
                metrics::attribute_write();
                true
            }
            None => false,
        }
    }

    /// Enumerate every declared attribute name in first-declared schema
    /// order, whether or not a value has been set.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.model.attributes()
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.model.has_attribute(name)
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Direct mutable access to the store. Writes here are immediately
    /// visible through `get`; membership is not checked.
    pub const fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Replace the store wholesale. Undeclared names are dropped so the
    /// store's key set stays within the declared schema; subsequent reads
    /// reflect the new values immediately.
    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes
            .into_inner()
            .into_iter()
            .filter(|(name, _)| self.model.has_attribute(name))
            .collect();
    }

    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&Related> {
        self.relationships.get(name)
    }

    pub fn relationship_mut(&mut self, name: &str) -> Option<&mut Related> {
        self.relationships.get_mut(name)
    }

    #[must_use]
    pub const fn relationships(&self) -> &Relationships {
        &self.relationships
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
