mod attribute;
mod model;
mod relationship;

pub use attribute::{Attribute, AttributeList};
pub use model::{Model, ModelBuilder};
pub use relationship::{Relationship, RelationshipList};

use crate::{MAX_MODEL_NAME_LEN, err, error::ErrorTree, visit::Visitor};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("model already defined: {0}")]
    ModelAlreadyDefined(String),

    #[error("inheritance cycle detected at '{0}'")]
    ExtendsCycle(String),
}

///
/// ValidateNode
/// Node-local structural invariants; no registry access.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// VisitableNode
///

pub trait VisitableNode: ValidateNode + Sized {
    /// Route segment contributed by this node; empty segments are skipped.
    fn route_key(&self) -> String {
        String::new()
    }

    fn accept<V: Visitor>(&self, v: &mut V) {
        v.enter(&self.route_key());
        v.validate(self);
        self.drive(v);
        v.exit();
    }

    fn drive<V: Visitor>(&self, _v: &mut V) {}
}

///
/// Def
/// Identity of a declared node: module path plus ident.
///

#[derive(Clone, Debug, Serialize)]
pub struct Def {
    pub module_path: &'static str,
    pub ident: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<&'static str>,
}

impl Def {
    #[must_use]
    pub const fn new(module_path: &'static str, ident: &'static str) -> Self {
        Self {
            module_path,
            ident,
            comments: None,
        }
    }

    /// Fully-qualified path used as the registry key.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.module_path, self.ident)
    }
}

impl ValidateNode for Def {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ident.is_empty() {
            err!(errs, "ident cannot be empty");
        }
        if self.ident.len() > MAX_MODEL_NAME_LEN {
            err!(
                errs,
                "ident '{}' exceeds {MAX_MODEL_NAME_LEN} characters",
                self.ident
            );
        }

        errs.result()
    }
}

impl VisitableNode for Def {}

///
/// Schema
/// Process-wide set of model declarations, keyed by path.
///

#[derive(Debug, Default, Serialize)]
pub struct Schema {
    models: BTreeMap<String, Model>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a model; redefining a path is a definition-time fault.
    pub fn insert_model(&mut self, model: Model) -> Result<(), NodeError> {
        let path = model.path();
        if self.models.contains_key(&path) {
            return Err(NodeError::ModelAlreadyDefined(path));
        }
        self.models.insert(path, model);

        Ok(())
    }

    #[must_use]
    pub fn get_model(&self, path: &str) -> Option<&Model> {
        self.models.get(path)
    }

    pub fn try_get_model(&self, path: &str) -> Result<&Model, NodeError> {
        self.get_model(path)
            .ok_or_else(|| NodeError::ModelNotFound(path.to_string()))
    }

    pub fn models(&self) -> impl Iterator<Item = (&str, &Model)> {
        self.models.iter().map(|(path, model)| (path.as_str(), model))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ValidateNode for Schema {}

impl VisitableNode for Schema {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for (_, model) in self.models() {
            model.accept(v);
        }
    }
}
