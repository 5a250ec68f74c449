//! Property resolution engine
//!
//! Expands `${name}` references according to target-then-base precedence,
//! with recursive multi-level indirection and cycle-safe termination.

use strata_domain::error::{DomainError, DomainResult};
use strata_domain::properties::{PropertyLayers, PropertySet, ResolvedProperty};

use super::parser::{SyntaxIssue, find_syntax_issue, parse_placeholders};

/// Literal suffix appended to a value whose expansion was cut short by a
/// reference cycle.
///
/// Consumers must treat any value ending in this marker as a degraded,
/// incomplete resolution rather than a hard failure.
pub const RECURSION_SUFFIX: &str = " RECURSION";

/// Result of resolving a property set.
#[derive(Debug, Clone)]
pub struct ResolutionReport {
    /// The resolved set, same key domain as the target.
    pub properties: PropertySet,

    /// References that resolved, deduplicated by name, with the raw value
    /// and the layer that supplied it.
    pub resolved: Vec<ResolvedProperty>,

    /// Names that could not be found in either layer and were left
    /// verbatim, sorted and deduplicated.
    pub unresolved: Vec<String>,

    /// Target keys whose values were cycle-truncated, sorted.
    pub truncated: Vec<String>,

    /// Whether every reference resolved and no cycle fired.
    pub is_complete: bool,
}

impl ResolutionReport {
    /// Returns the count of resolved references.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Returns the count of unresolved names.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

/// The property resolution engine.
///
/// Stateless between invocations: each [`resolve`](Self::resolve) call
/// builds its own visiting list and result set, so concurrent calls over
/// shared sets need no locking.
#[derive(Debug, Clone, Copy)]
pub struct PropertiesResolver<'a> {
    layers: PropertyLayers<'a>,
}

impl<'a> PropertiesResolver<'a> {
    /// Creates a resolver over a single set (lookups hit the target only).
    #[must_use]
    pub const fn new(target: &'a PropertySet) -> Self {
        Self {
            layers: PropertyLayers::new(target),
        }
    }

    /// Creates a resolver whose lookups are satisfied first by `target`,
    /// then by `base`. Only `target` is resolved and returned.
    #[must_use]
    pub const fn with_base(target: &'a PropertySet, base: &'a PropertySet) -> Self {
        Self {
            layers: PropertyLayers::with_base(target, base),
        }
    }

    /// Resolves every value in the target set.
    ///
    /// Never fails: unknown names stay verbatim and cyclic references are
    /// truncated with [`RECURSION_SUFFIX`] appended to the originating
    /// key's value.
    #[must_use]
    pub fn resolve(&self) -> ResolutionReport {
        let mut properties = PropertySet::new();
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();
        let mut truncated = Vec::new();

        for (key, value) in self.layers.target().iter() {
            // The key itself is on the expansion path from the start, so a
            // direct self-reference is caught at the first level.
            let mut visiting = vec![key.to_string()];
            let mut cycle = false;

            let expanded = self.expand(value, &mut visiting, &mut cycle, &mut resolved, &mut unresolved);

            if cycle {
                tracing::warn!("placeholder cycle detected while resolving `{key}`, value truncated");
                truncated.push(key.to_string());
                properties.insert(key, format!("{expanded}{RECURSION_SUFFIX}"));
            } else {
                properties.insert(key, expanded);
            }
        }

        unresolved.sort_unstable();
        unresolved.dedup();
        truncated.sort_unstable();
        let is_complete = unresolved.is_empty() && truncated.is_empty();

        ResolutionReport {
            properties,
            resolved,
            unresolved,
            truncated,
            is_complete,
        }
    }

    /// Names that would be left verbatim by [`resolve`](Self::resolve).
    ///
    /// Useful for pre-flight warnings before handing the resolved set to a
    /// connector.
    #[must_use]
    pub fn find_unresolved(&self) -> Vec<String> {
        self.resolve().unresolved
    }

    /// Checks the target set for placeholder syntax that resolution would
    /// silently pass through.
    ///
    /// Opt-in strictness for configuration-validation paths;
    /// [`resolve`](Self::resolve) itself stays permissive.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnterminatedPlaceholder`] or
    /// [`DomainError::EmptyPlaceholder`] naming the first offending key.
    pub fn verify(&self) -> DomainResult<()> {
        for (key, value) in self.layers.target().iter() {
            match find_syntax_issue(value) {
                Some(SyntaxIssue::Unterminated) => {
                    return Err(DomainError::UnterminatedPlaceholder(key.to_string()));
                }
                Some(SyntaxIssue::EmptyName) => {
                    return Err(DomainError::EmptyPlaceholder(key.to_string()));
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Recursively expands one value, splicing substitutions by span.
    ///
    /// `visiting` holds the keys on the active expansion path; a reference
    /// back into it substitutes the raw value without recursing and marks
    /// `cycle`, which keeps every expansion finite regardless of cycle
    /// length.
    fn expand(
        &self,
        value: &str,
        visiting: &mut Vec<String>,
        cycle: &mut bool,
        resolved: &mut Vec<ResolvedProperty>,
        unresolved: &mut Vec<String>,
    ) -> String {
        let references = parse_placeholders(value);
        if references.is_empty() {
            return value.to_string();
        }

        let mut result = String::with_capacity(value.len());
        let mut last_end = 0;

        for reference in &references {
            result.push_str(&value[last_end..reference.span.start]);

            if let Some(property) = self.layers.lookup(&reference.name) {
                if visiting.contains(&property.name) {
                    // Cycle closed: substitute the raw value, do not recurse.
                    result.push_str(&property.value);
                    *cycle = true;
                } else {
                    visiting.push(property.name.clone());
                    let expanded = self.expand(&property.value, visiting, cycle, resolved, unresolved);
                    visiting.pop();
                    result.push_str(&expanded);
                }

                if !resolved.iter().any(|r| r.name == property.name) {
                    resolved.push(property);
                }
            } else {
                tracing::debug!("unresolved placeholder `{}` left verbatim", reference.name);
                result.push_str(&value[reference.span.clone()]);
                unresolved.push(reference.name.clone());
            }

            last_end = reference.span.end;
        }

        result.push_str(&value[last_end..]);
        result
    }
}

/// Resolves `target` against itself only.
#[must_use]
pub fn resolve_properties(target: &PropertySet) -> PropertySet {
    PropertiesResolver::new(target).resolve().properties
}

/// Resolves `target` with lookups satisfied first by `target`, then by
/// `base`. Neither input is mutated; only `target`'s keys are returned.
#[must_use]
pub fn resolve_properties_with_base(target: &PropertySet, base: &PropertySet) -> PropertySet {
    PropertiesResolver::with_base(target, base).resolve().properties
}
