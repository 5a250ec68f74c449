//! Strata Application - property resolution engine
//!
//! Expands `${name}` placeholders in string-valued configuration properties
//! against one or two layered property sets, terminating safely on cyclic
//! references.

pub mod resolver;

pub use resolver::{
    PropertiesResolver, RECURSION_SUFFIX, ResolutionReport, resolve_properties,
    resolve_properties_with_base,
};
