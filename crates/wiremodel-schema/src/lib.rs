pub mod build;
pub mod error;
pub mod node;
pub mod resolve;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for model schema identifiers.
pub const MAX_MODEL_NAME_LEN: usize = 64;

/// Maximum length for attribute and relationship schema identifiers.
pub const MAX_ATTRIBUTE_NAME_LEN: usize = 64;

use crate::{build::BuildError, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::Cardinality,
        visit::Visitor,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
