use derive_more::Deref;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use wiremodel_schema::{resolve::ResolvedModel, types::Cardinality};

///
/// Related
///
/// Default container for one declared relationship. `Many` starts as an
/// empty ordered sequence, `One` as an absent reference; both exist
/// before the first read.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Related {
    One(Option<Value>),
    Many(Vec<Value>),
}

impl Related {
    #[must_use]
    pub const fn default_for(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::One => Self::One(None),
            Cardinality::Many => Self::Many(Vec::new()),
        }
    }

    /// The single referenced value, if this is a populated `One`.
    #[must_use]
    pub const fn one(&self) -> Option<&Value> {
        match self {
            Self::One(value) => value.as_ref(),
            Self::Many(_) => None,
        }
    }

    /// The referenced sequence, if this is a `Many`.
    #[must_use]
    pub fn many(&self) -> Option<&[Value]> {
        match self {
            Self::One(_) => None,
            Self::Many(values) => Some(values),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(value) => value.is_none(),
            Self::Many(values) => values.is_empty(),
        }
    }
}

///
/// Relationships
/// Per-record container, fully populated at construction.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Serialize)]
pub struct Relationships(BTreeMap<String, Related>);

impl Relationships {
    /// Seed every declared relationship with its default container.
    pub(crate) fn defaulted(model: &ResolvedModel) -> Self {
        Self(
            model
                .relationships()
                .map(|(name, cardinality)| (name.to_string(), Related::default_for(cardinality)))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Related> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Related> {
        self.0.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Related)> {
        self.0.iter().map(|(name, related)| (name.as_str(), related))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
