//! ## Crate layout
//! - `core`: runtime records, attribute stores, and relationship defaults.
//! - `schema`: schema nodes, the process-wide registry, and validation.
//! - `utils`: casing helpers shared across the workspace.
//!
//! The `prelude` module mirrors the surface used by model authors and the
//! surrounding API-client layer.

pub use wiremodel_core as core;
pub use wiremodel_schema as schema;
pub use wiremodel_utils as utils;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use wiremodel_core::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        Error,
        model::{Attributes, Record, Related, Relationships},
    };
    pub use crate::schema::{
        build::get_schema,
        node::ModelBuilder,
        types::Cardinality,
    };
    pub use crate::utils::case::camelize;
}
