use crate::{
    Error,
    build::{BuildError, schema_write},
    prelude::*,
};
use std::collections::BTreeMap;
use wiremodel_utils::case::camelize;

///
/// Model
///
/// Schema node for one model type: its declared attributes, its declared
/// relationships, an optional ancestor, and the key-normalization policy
/// applied when wire payloads are matched against it.
///

#[derive(Clone, Debug, Serialize)]
pub struct Model {
    pub def: Def,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<&'static str>,

    pub camelize_keys: bool,
    pub attributes: AttributeList,
    pub relationships: RelationshipList,
}

impl Model {
    #[must_use]
    pub fn path(&self) -> String {
        self.def.path()
    }

    /// Canonical form of a declared ident under this model's key policy.
    #[must_use]
    pub fn canonical(&self, ident: &str) -> String {
        if self.camelize_keys {
            camelize(ident)
        } else {
            ident.to_string()
        }
    }
}

impl ValidateNode for Model {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Some(parent) = self.extends
            && parent == self.path()
        {
            err!(errs, "model '{}' cannot extend itself", self.path());
        }

        // Duplicates are checked on canonical names so that two declared
        // idents collapsing to the same camelCase form surface here.
        let mut seen = BTreeMap::<String, &'static str>::new();
        for attr in self.attributes.iter() {
            let canonical = self.canonical(attr.ident);
            if let Some(prev) = seen.insert(canonical.clone(), attr.ident) {
                err!(
                    errs,
                    "duplicate attribute '{canonical}' declared as '{prev}' and '{}'",
                    attr.ident
                );
            }
        }

        let mut seen_rels = BTreeMap::<String, &'static str>::new();
        for rel in self.relationships.iter() {
            let canonical = self.canonical(rel.ident);
            if let Some(prev) = seen_rels.insert(canonical.clone(), rel.ident) {
                err!(
                    errs,
                    "duplicate relationship '{canonical}' declared as '{prev}' and '{}'",
                    rel.ident
                );
            }
            if seen.contains_key(&canonical) {
                err!(
                    errs,
                    "'{canonical}' is declared both as an attribute and a relationship"
                );
            }
        }

        errs.result()
    }
}

impl VisitableNode for Model {
    fn route_key(&self) -> String {
        self.path()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.def.accept(v);
        self.attributes.accept(v);
        self.relationships.accept(v);
    }
}

///
/// ModelBuilder
///
/// Definition-time surface for model authors. `register` validates the
/// node and inserts it into the process-wide schema; misdeclarations
/// surface here, never at instance construction.
///

#[derive(Debug)]
pub struct ModelBuilder {
    def: Def,
    extends: Option<&'static str>,
    camelize_keys: bool,
    attributes: AttributeList,
    relationships: RelationshipList,
}

impl ModelBuilder {
    #[must_use]
    pub fn new(module_path: &'static str, ident: &'static str) -> Self {
        Self {
            def: Def::new(module_path, ident),
            extends: None,
            camelize_keys: true,
            attributes: AttributeList::default(),
            relationships: RelationshipList::default(),
        }
    }

    #[must_use]
    pub const fn extends(mut self, path: &'static str) -> Self {
        self.extends = Some(path);
        self
    }

    #[must_use]
    pub const fn camelize_keys(mut self, on: bool) -> Self {
        self.camelize_keys = on;
        self
    }

    #[must_use]
    pub fn attribute(mut self, ident: &'static str) -> Self {
        self.attributes.push(Attribute::new(ident));
        self
    }

    #[must_use]
    pub fn relationship(mut self, ident: &'static str, cardinality: Cardinality) -> Self {
        self.relationships.push(Relationship::new(ident, cardinality));
        self
    }

    #[must_use]
    pub fn has_one(self, ident: &'static str) -> Self {
        self.relationship(ident, Cardinality::One)
    }

    #[must_use]
    pub fn has_many(self, ident: &'static str) -> Self {
        self.relationship(ident, Cardinality::Many)
    }

    /// Finish the node without registering it (local schemas, tests).
    #[must_use]
    pub fn build(self) -> Model {
        Model {
            def: self.def,
            extends: self.extends,
            camelize_keys: self.camelize_keys,
            attributes: self.attributes,
            relationships: self.relationships,
        }
    }

    /// Validate and insert into the process-wide schema.
    pub fn register(self) -> Result<(), Error> {
        let model = self.build();
        model.validate().map_err(BuildError::Validation)?;
        schema_write().insert_model(model)?;

        Ok(())
    }
}
