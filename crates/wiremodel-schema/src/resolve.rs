use crate::{
    node::{NodeError, Schema},
    types::Cardinality,
};
use serde::Serialize;
use std::collections::BTreeSet;

///
/// ResolvedModel
///
/// Flattened view of one model type: the union of its own and all
/// ancestor declarations, canonicalized under the leaf model's key
/// policy, in first-declared order with no duplicates. Computed once per
/// concrete type and cached by the build layer; instances read it, never
/// rebuild it.
///

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedModel {
    path: String,
    camelize_keys: bool,
    attributes: Vec<String>,
    relationships: Vec<(String, Cardinality)>,
}

impl ResolvedModel {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn camelize_keys(&self) -> bool {
        self.camelize_keys
    }

    /// Declared attribute names, ancestors first, first-declared order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    pub fn relationships(&self) -> impl Iterator<Item = (&str, Cardinality)> {
        self.relationships
            .iter()
            .map(|(name, cardinality)| (name.as_str(), *cardinality))
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    #[must_use]
    pub fn has_relationship(&self, name: &str) -> bool {
        self.relationships.iter().any(|(n, _)| n == name)
    }

    /// Allow-list filter for one raw payload key: normalize it under the
    /// model's key policy and admit it iff the result is a declared
    /// attribute name. Pure; the write step is separate.
    #[must_use]
    pub fn admit_key(&self, raw: &str) -> Option<String> {
        let key = if self.camelize_keys {
            wiremodel_utils::case::camelize(raw)
        } else {
            raw.to_string()
        };

        self.has_attribute(&key).then_some(key)
    }
}

impl Schema {
    /// Resolve a model's merged declaration set by walking its ancestor
    /// chain. Union semantics: ancestors contribute first, duplicates
    /// keep their first-declared position. Sibling and descendant
    /// declarations never appear.
    pub fn resolve(&self, path: &str) -> Result<ResolvedModel, NodeError> {
        let mut chain = Vec::new();
        let mut seen = BTreeSet::new();
        let mut cursor = Some(path.to_string());

        while let Some(p) = cursor {
            if !seen.insert(p.clone()) {
                return Err(NodeError::ExtendsCycle(p));
            }
            let model = self.try_get_model(&p)?;
            chain.push(model);
            cursor = model.extends.map(str::to_string);
        }

        // Key policy comes from the concrete (leaf) model, not ancestors.
        let camelize_keys = chain[0].camelize_keys;

        let mut attributes: Vec<String> = Vec::new();
        let mut relationships: Vec<(String, Cardinality)> = Vec::new();

        for model in chain.iter().rev() {
            for attr in model.attributes.iter() {
                let name = canonical(attr.ident, camelize_keys);
                if !attributes.contains(&name) {
                    attributes.push(name);
                }
            }
            for rel in model.relationships.iter() {
                let name = canonical(rel.ident, camelize_keys);
                if !relationships.iter().any(|(n, _)| n == &name) {
                    relationships.push((name, rel.cardinality));
                }
            }
        }

        Ok(ResolvedModel {
            path: path.to_string(),
            camelize_keys,
            attributes,
            relationships,
        })
    }
}

fn canonical(ident: &str, camelize_keys: bool) -> String {
    if camelize_keys {
        wiremodel_utils::case::camelize(ident)
    } else {
        ident.to_string()
    }
}
