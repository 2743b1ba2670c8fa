//! Cascaded-style resolution for the Folio paged-media renderer.
//!
//! # Scope
//!
//! This crate turns the already-sorted cascade of each element into a tree of
//! resolved styles that layout and paint query by property:
//!
//! - **Property registry** ([§ 6.1 Property definitions](https://www.w3.org/TR/CSS2/about.html#property-defs))
//!   - Dense property ids, inheritability and initial values
//!   - `=other-property` initial-value aliases (border colors follow `color`)
//!
//! - **Resolution** ([§ 6.1 Specified values](https://www.w3.org/TR/CSS2/cascade.html#specified-value))
//!   - Cascade, then inheritance, then initial value, memoized per style
//!   - `inherit` and `initial` keywords
//!   - Style sharing between siblings with equal cascade fingerprints
//!
//! - **Derived values**
//!   - Margin, padding and border boxes ([§ 8 Box model](https://www.w3.org/TR/CSS2/box.html))
//!   - Font specification, font-size keyword ladder and line height ([§ 15 Fonts](https://www.w3.org/TR/CSS2/fonts.html))
//!   - Background layers ([CSS Backgrounds Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!
//! - **Classification predicates** ([§ 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html))
//!
//! # Not Yet Implemented
//!
//! - Selector matching and cascade sorting (done upstream)
//! - Shorthand expansion (done upstream)
//! - Nested counter scopes

/// Cascade input: declarations and sharing fingerprints.
pub mod cascade;
/// Raw-to-resolved value coercion.
pub mod coercion;
/// Device resolution and font services.
pub mod context;
/// Counter notifications from style derivation.
pub mod counters;
/// Boxes, fonts, line height and backgrounds computed from resolved values.
pub mod derived;
/// Error type.
pub mod error;
/// Box classification predicates.
pub mod predicates;
/// The property registry.
pub mod property;
/// Per-style property slots.
pub mod table;
/// Resolution and lookups on one style.
pub mod style;
/// The style arena.
pub mod tree;
/// Specified and resolved value types.
pub mod value;

// Re-exports for convenience
pub use cascade::{Cascade, Declaration, Fingerprint};
pub use coercion::{CoercionContext, CssCoercion, ValueCoercion};
pub use context::{ApproximateFontContext, FontContext, FontMetrics, RenderContext, ResolvedFont};
pub use counters::{CounterTracker, DocumentCounters, NoCounters};
pub use derived::{
    AllowedEdges, BackgroundImage, BackgroundLayer, BackgroundPosition, BackgroundSize,
    BorderEdges, BoxEdges, Edge, FontSizeTable, FontSpecification,
};
pub use error::StyleError;
pub use property::{InitialValue, Property, PropertyInfo, PropertyRegistry, SideProperties};
pub use style::{Style, StyleSnapshot};
pub use table::PropertyTable;
pub use tree::{StyleId, StyleNode, StyleTree};
pub use value::{
    AutoLength, ColorValue, CounterData, DEFAULT_FONT_SIZE_PX, FunctionValue, Ident, LengthUnit,
    LengthValue, ResolvedValue, SpecifiedValue,
};
