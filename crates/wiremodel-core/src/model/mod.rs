pub mod attributes;
pub mod record;
pub mod relationships;

#[cfg(test)]
mod tests;

pub use attributes::Attributes;
pub use record::Record;
pub use relationships::{Related, Relationships};
