//! Observability: ephemeral in-memory counters for the model layer.
//!
//! Dropped payload keys are deliberately not counted anywhere; the
//! silent-drop contract leaves no caller-visible signal.

pub(crate) mod metrics;

// re-exports
pub use metrics::{EventState, metrics_report, metrics_reset_all};
