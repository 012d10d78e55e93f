//! Shared helpers for the wiremodel workspace.

pub mod case;
