use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Cardinality
///
/// Declared shape of a relationship: `One` resolves to an absent single
/// reference by default, `Many` to an empty ordered sequence.
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    One,
    Many,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_and_parses() {
        assert_eq!(Cardinality::One.to_string(), "One");
        assert_eq!(Cardinality::Many.to_string(), "Many");
        assert_eq!("Many".parse::<Cardinality>().unwrap(), Cardinality::Many);
    }

    #[test]
    fn defaults_to_one() {
        assert_eq!(Cardinality::default(), Cardinality::One);
    }
}
