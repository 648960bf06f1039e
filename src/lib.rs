//! Workflow - Immutable record types
//!
//! This crate re-exports the Workflow layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 0: workflow_foundation — Core record types (SomeRecord)
//! ```

pub use workflow_foundation as foundation;
