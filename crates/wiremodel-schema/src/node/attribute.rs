use crate::{MAX_ATTRIBUTE_NAME_LEN, prelude::*};

///
/// AttributeList
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct AttributeList {
    attributes: Vec<Attribute>,
}

impl AttributeList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.ident == ident)
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl ValidateNode for AttributeList {}

impl VisitableNode for AttributeList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in &self.attributes {
            node.accept(v);
        }
    }
}

///
/// Attribute
/// One declared attribute name on a model.
///

#[derive(Clone, Debug, Serialize)]
pub struct Attribute {
    pub ident: &'static str,
}

impl Attribute {
    #[must_use]
    pub const fn new(ident: &'static str) -> Self {
        Self { ident }
    }
}

impl ValidateNode for Attribute {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ident.is_empty() {
            err!(errs, "attribute ident cannot be empty");
        }
        if self.ident.len() > MAX_ATTRIBUTE_NAME_LEN {
            err!(
                errs,
                "attribute ident '{}' exceeds {MAX_ATTRIBUTE_NAME_LEN} characters",
                self.ident
            );
        }

        errs.result()
    }
}

impl VisitableNode for Attribute {
    fn route_key(&self) -> String {
        self.ident.to_string()
    }
}
