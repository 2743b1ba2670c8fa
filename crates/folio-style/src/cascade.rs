//! Cascade input.
//!
//! [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
//!
//! Selector matching and cascade sorting happen upstream. What arrives here is
//! the already-sorted declaration list of one element plus a fingerprint that
//! identifies equivalent cascades for style sharing.

use serde::Serialize;

use crate::error::StyleError;
use crate::property::Property;
use crate::value::SpecifiedValue;

/// One `property: value` pair of a cascade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// The longhand being declared.
    pub property: Property,
    /// The raw declared value.
    pub value: SpecifiedValue,
}

impl Declaration {
    /// A declaration of `value` for `property`.
    #[must_use]
    pub const fn new(property: Property, value: SpecifiedValue) -> Self {
        Self { property, value }
    }
}

/// Opaque equality key: two cascades with equal fingerprints resolve
/// identically and may share one style node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap an upstream-supplied key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive a structural key from a declaration list.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures as [`StyleError::Serialization`].
    pub fn of(declarations: &[Declaration]) -> Result<Self, StyleError> {
        Ok(Self(serde_json::to_string(declarations)?))
    }

    /// The key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// "The cascade takes an unordered list of declared values for a given
/// property on a given element, sorts them by their declaration's
/// precedence..."
///
/// The declarations here are already sorted: later entries win over earlier
/// ones for the same property. The order is trusted, not re-checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cascade {
    declarations: Vec<Declaration>,
    fingerprint: Fingerprint,
}

impl Cascade {
    /// A cascade with an upstream-supplied fingerprint.
    #[must_use]
    pub const fn new(declarations: Vec<Declaration>, fingerprint: Fingerprint) -> Self {
        Self {
            declarations,
            fingerprint,
        }
    }

    /// A cascade whose fingerprint is derived from its declarations.
    ///
    /// # Errors
    ///
    /// See [`Fingerprint::of`].
    pub fn from_declarations(declarations: Vec<Declaration>) -> Result<Self, StyleError> {
        let fingerprint = Fingerprint::of(&declarations)?;
        Ok(Self::new(declarations, fingerprint))
    }

    /// The cascade with no declarations. Its fingerprint is the structural
    /// one, so it shares children with `from_declarations(vec![])`.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Fingerprint::new("[]"))
    }

    /// The declarations, lowest precedence first.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The sharing key.
    #[must_use]
    pub const fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_fingerprints_follow_declarations() {
        let a = vec![Declaration::new(Property::Display, SpecifiedValue::ident("block"))];
        let b = vec![Declaration::new(Property::Display, SpecifiedValue::ident("block"))];
        let c = vec![Declaration::new(Property::Display, SpecifiedValue::ident("inline"))];
        let (Ok(fa), Ok(fb), Ok(fc)) = (Fingerprint::of(&a), Fingerprint::of(&b), Fingerprint::of(&c))
        else {
            panic!("fingerprinting plain declarations cannot fail");
        };
        assert_eq!(fa, fb);
        assert_ne!(fa, fc);
    }

    #[test]
    fn test_empty_cascade() {
        let cascade = Cascade::empty();
        assert!(cascade.declarations().is_empty());
        let Ok(structural) = Cascade::from_declarations(Vec::new()) else {
            panic!("fingerprinting no declarations cannot fail");
        };
        assert_eq!(cascade.fingerprint(), structural.fingerprint());
    }
}
