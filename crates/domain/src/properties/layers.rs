//! Layered target-then-base property lookup.

use serde::{Deserialize, Serialize};

use super::set::PropertySet;

/// The layer that supplied a resolved value.
///
/// Target takes precedence over base when both define the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyOrigin {
    /// The set being resolved and returned.
    Target,
    /// The auxiliary set consulted for lookups but never returned.
    Base,
}

impl PropertyOrigin {
    /// Returns a human-readable name for the origin.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Target => "Target",
            Self::Base => "Base",
        }
    }
}

/// A property name with the raw value and layer it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// The property name (without `${` `}`).
    pub name: String,
    /// The raw value the name maps to, before any expansion.
    pub value: String,
    /// The layer from which the value was taken.
    pub origin: PropertyOrigin,
}

impl ResolvedProperty {
    /// Creates a new resolved property.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, origin: PropertyOrigin) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            origin,
        }
    }
}

/// Target-then-base lookup over one or two property sets.
///
/// The sets stay separate rather than being merged eagerly, so neither
/// input is copied or mutated and the supplying layer stays observable.
#[derive(Debug, Clone, Copy)]
pub struct PropertyLayers<'a> {
    target: &'a PropertySet,
    base: Option<&'a PropertySet>,
}

impl<'a> PropertyLayers<'a> {
    /// Creates a lookup over a single set.
    #[must_use]
    pub const fn new(target: &'a PropertySet) -> Self {
        Self { target, base: None }
    }

    /// Creates a lookup over a target set with a base fallback.
    #[must_use]
    pub const fn with_base(target: &'a PropertySet, base: &'a PropertySet) -> Self {
        Self {
            target,
            base: Some(base),
        }
    }

    /// Returns the target set.
    #[must_use]
    pub const fn target(&self) -> &'a PropertySet {
        self.target
    }

    /// Resolves a name to its raw value and origin, target checked first.
    ///
    /// Returns `None` if neither layer defines the name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ResolvedProperty> {
        if let Some(value) = self.target.get(name) {
            return Some(ResolvedProperty::new(name, value, PropertyOrigin::Target));
        }

        if let Some(base) = self.base
            && let Some(value) = base.get(name)
        {
            return Some(ResolvedProperty::new(name, value, PropertyOrigin::Base));
        }

        None
    }

    /// Returns true if either layer defines the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.target.contains_key(name) || self.base.is_some_and(|b| b.contains_key(name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_target() -> PropertySet {
        [("shared", "from-target"), ("target_only", "t")]
            .into_iter()
            .collect()
    }

    fn create_base() -> PropertySet {
        [("shared", "from-base"), ("base_only", "b")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lookup_target() {
        let target = create_target();
        let layers = PropertyLayers::new(&target);

        let resolved = layers.lookup("target_only").expect("should resolve");
        assert_eq!(resolved.value, "t");
        assert_eq!(resolved.origin, PropertyOrigin::Target);
    }

    #[test]
    fn test_lookup_base_fallback() {
        let target = create_target();
        let base = create_base();
        let layers = PropertyLayers::with_base(&target, &base);

        let resolved = layers.lookup("base_only").expect("should resolve");
        assert_eq!(resolved.value, "b");
        assert_eq!(resolved.origin, PropertyOrigin::Base);
    }

    #[test]
    fn test_precedence_target_over_base() {
        let target = create_target();
        let base = create_base();
        let layers = PropertyLayers::with_base(&target, &base);

        // "shared" is defined in both layers
        let resolved = layers.lookup("shared").expect("should resolve");
        assert_eq!(resolved.value, "from-target");
        assert_eq!(resolved.origin, PropertyOrigin::Target);
    }

    #[test]
    fn test_lookup_not_found() {
        let target = create_target();
        let base = create_base();
        let layers = PropertyLayers::with_base(&target, &base);

        assert!(layers.lookup("nonexistent").is_none());
    }

    #[test]
    fn test_single_set_ignores_base_names() {
        let target = create_target();
        let layers = PropertyLayers::new(&target);

        assert!(layers.lookup("base_only").is_none());
    }

    #[test]
    fn test_contains() {
        let target = create_target();
        let base = create_base();
        let layers = PropertyLayers::with_base(&target, &base);

        assert!(layers.contains("target_only"));
        assert!(layers.contains("base_only"));
        assert!(!layers.contains("nonexistent"));
    }

    #[test]
    fn test_origin_display_name() {
        assert_eq!(PropertyOrigin::Target.display_name(), "Target");
        assert_eq!(PropertyOrigin::Base.display_name(), "Base");
    }
}
