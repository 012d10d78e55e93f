use convert_case::{Case, Casing};

///
/// camelize
///
/// Canonical key form used to match wire keys against declared attribute
/// names. Maps snake_case and kebab-case to camelCase; keys that are
/// already camelCase pass through unchanged. Total and idempotent.
///

#[must_use]
pub fn camelize(key: &str) -> String {
    key.to_case(Case::Camel)
}

///
/// snake
///

#[must_use]
pub fn snake(key: &str) -> String {
    key.to_case(Case::Snake)
}

///
/// kebab
///

#[must_use]
pub fn kebab(key: &str) -> String {
    key.to_case(Case::Kebab)
}
