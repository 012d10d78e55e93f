use derive_more::Deref;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///
/// Attributes
///
/// The single mutable attribute store owned by one record. Serializes
/// identically to a plain JSON object.
///
/// Mutation is explicit; `Attributes` does not expose `DerefMut` so that
/// bulk inspection through `Deref` cannot silently become mutation.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a store from an existing map.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Return the value under `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set the value under `name`, returning any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Remove the value under `name`, if set.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Return an iterator over set entries.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Return the number of set entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the store, yielding the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
