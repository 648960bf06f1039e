//! Core record types for Workflow.
//!
//! This crate provides:
//! - [`SomeRecord`] - An immutable single-value record

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod record;

pub use record::SomeRecord;
