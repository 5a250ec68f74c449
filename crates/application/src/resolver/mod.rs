//! Placeholder resolution module
//!
//! Provides parsing and resolution of `${name}` syntax in property values.
//!
//! # Usage
//!
//! ```
//! use strata_application::resolver::resolve_properties;
//! use strata_domain::PropertySet;
//!
//! let props: PropertySet = [
//!     ("host", "localhost"),
//!     ("url", "http://${host}/api"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let resolved = resolve_properties(&props);
//! assert_eq!(resolved.get("url"), Some("http://localhost/api"));
//! ```

pub mod engine;
pub mod parser;

pub use engine::{
    PropertiesResolver, RECURSION_SUFFIX, ResolutionReport, resolve_properties,
    resolve_properties_with_base,
};
pub use parser::{
    PlaceholderRef, SyntaxIssue, extract_placeholder_names, find_syntax_issue, has_placeholders,
    parse_placeholders,
};
