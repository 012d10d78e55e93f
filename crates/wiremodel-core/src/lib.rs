//! Core runtime for wiremodel: attribute stores, records, relationship
//! defaults, and the ergonomics exported via the `prelude`.

pub mod error;
pub mod model;
pub mod obs;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        model::{
            attributes::Attributes,
            record::Record,
            relationships::{Related, Relationships},
        },
    };
    pub use wiremodel_schema::{node::ModelBuilder, types::Cardinality};
}
