//! Errors raised by the style engine.

use thiserror::Error;

use crate::property::Property;

/// Failures of style resolution.
///
/// Configuration errors (`MissingInitialValue`, `AliasCycle`) and programmer
/// errors (`InvalidEdge`) are never recovered from; coercion failures are
/// propagated unchanged to whoever presented the cascade.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A recognized property has no initial value in the registry.
    #[error("property '{0}' has no initial value assigned; check the property registry")]
    MissingInitialValue(Property),

    /// An `=other-property` initial value chain loops back on itself.
    #[error("initial value of property '{0}' is an alias chain that never reaches a literal")]
    AliasCycle(Property),

    /// A box edge selector outside `0..=3`.
    #[error("edge selector {0} is out of range (expected 0..=3)")]
    InvalidEdge(usize),

    /// The coercion service rejected a raw value.
    #[error("invalid value for '{property}': {reason}")]
    InvalidValue {
        /// The property the value was declared for.
        property: Property,
        /// What was wrong with it.
        reason: String,
    },

    /// A resolved value has a shape the caller cannot work with.
    #[error("'{property}' resolved to a {found} value, expected {expected}")]
    UnexpectedValueShape {
        /// The property that was queried.
        property: Property,
        /// The shape the caller needed.
        expected: &'static str,
        /// The shape actually stored.
        found: &'static str,
    },

    /// A cascade fingerprint or style snapshot could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StyleError {
    pub(crate) fn invalid(property: Property, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            property,
            reason: reason.into(),
        }
    }
}
