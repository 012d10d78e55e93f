use crate::{MAX_ATTRIBUTE_NAME_LEN, prelude::*};

///
/// RelationshipList
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct RelationshipList {
    relationships: Vec<Relationship>,
}

impl RelationshipList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.ident == ident)
    }

    pub fn push(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relationship> {
        self.relationships.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

impl ValidateNode for RelationshipList {}

impl VisitableNode for RelationshipList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in &self.relationships {
            node.accept(v);
        }
    }
}

///
/// Relationship
/// One declared relationship name plus its cardinality.
///

#[derive(Clone, Debug, Serialize)]
pub struct Relationship {
    pub ident: &'static str,
    pub cardinality: Cardinality,
}

impl Relationship {
    #[must_use]
    pub const fn new(ident: &'static str, cardinality: Cardinality) -> Self {
        Self { ident, cardinality }
    }
}

impl ValidateNode for Relationship {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ident.is_empty() {
            err!(errs, "relationship ident cannot be empty");
        }
        if self.ident.len() > MAX_ATTRIBUTE_NAME_LEN {
            err!(
                errs,
                "relationship ident '{}' exceeds {MAX_ATTRIBUTE_NAME_LEN} characters",
                self.ident
            );
        }

        errs.result()
    }
}

impl VisitableNode for Relationship {
    fn route_key(&self) -> String {
        self.ident.to_string()
    }
}
