//! Strata Domain - Core property types
//!
//! This crate defines the domain model for the Strata property resolver.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod properties;

pub use error::{DomainError, DomainResult};
pub use properties::{PropertyLayers, PropertyOrigin, PropertySet, ResolvedProperty};
