//! The style tree: an arena of resolved style records.
//!
//! [§ 7 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
//!
//! The tree uses arena allocation with [`StyleId`] indices for all
//! relationships. A node refers to its parent by index and to its children
//! through a fingerprint-keyed cache, so there are no reference cycles and the
//! whole tree is dropped with its owner.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use strum::EnumCount;

use crate::cascade::{Cascade, Fingerprint};
use crate::coercion::{CoercionContext, CssCoercion, ValueCoercion};
use crate::counters::CounterTracker;
use crate::derived::{AllowedEdges, BorderEdges, BoxEdges, DerivedCaches, FontSizeTable};
use crate::error::StyleError;
use crate::property::{InitialValue, Property, PropertyRegistry};
use crate::style::Style;
use crate::table::PropertyTable;
use crate::value::{Ident, ResolvedValue, SpecifiedValue};

/// A type-safe index into a [`StyleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StyleId(usize);

impl StyleId {
    /// The initial style at the root of every tree.
    pub const ROOT: Self = Self(0);

    /// The arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One resolved style record.
///
/// Its property table and `allowed_*` flags are fixed once construction
/// returns; the derived caches fill in lazily, each at most once.
#[derive(Debug)]
pub struct StyleNode {
    pub(crate) values: PropertyTable,
    pub(crate) parent: Option<StyleId>,
    pub(crate) children: HashMap<Fingerprint, StyleId>,
    pub(crate) allowed: AllowedEdges,
    pub(crate) caches: DerivedCaches,
}

impl StyleNode {
    fn new(values: PropertyTable, parent: Option<StyleId>) -> Self {
        Self {
            values,
            parent,
            children: HashMap::new(),
            allowed: AllowedEdges::default(),
            caches: DerivedCaches::default(),
        }
    }
}

/// An initial value after registry validation: either a coerced literal or an
/// alias to resolve on the querying style.
#[derive(Debug)]
pub(crate) enum MaterializedInitial {
    Value(Rc<ResolvedValue>),
    Alias(Property),
}

/// Arena owning every style record of one document.
pub struct StyleTree {
    nodes: Vec<StyleNode>,
    pub(crate) registry: PropertyRegistry,
    coercion: Box<dyn ValueCoercion>,
    pub(crate) initials: Box<[MaterializedInitial]>,
    pub(crate) zero_edges: Rc<BoxEdges>,
    pub(crate) zero_border: Rc<BorderEdges>,
    pub(crate) font_sizes: FontSizeTable,
}

impl std::fmt::Debug for StyleTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleTree")
            .field("nodes", &self.nodes.len())
            .field("font_sizes", &self.font_sizes)
            .finish_non_exhaustive()
    }
}

impl StyleTree {
    /// A tree using the standard registry and the bundled coercion service.
    ///
    /// # Errors
    ///
    /// See [`StyleTree::new`].
    pub fn css() -> Result<Self, StyleError> {
        Self::new(PropertyRegistry::css(), CssCoercion)
    }

    /// Create a tree holding only the root (initial) style.
    ///
    /// The registry is validated and every literal initial value is coerced
    /// here, once, so a broken registry is reported before any style exists.
    ///
    /// # Errors
    ///
    /// [`StyleError::MissingInitialValue`] or [`StyleError::AliasCycle`] for a
    /// broken registry; coercion errors for an initial literal the coercion
    /// service rejects.
    pub fn new(
        registry: PropertyRegistry,
        coercion: impl ValueCoercion + 'static,
    ) -> Result<Self, StyleError> {
        registry.validate()?;

        let detached = CoercionContext::detached();
        let mut initials = Vec::with_capacity(Property::COUNT);
        for property in Property::all() {
            let initial = match registry.initial(property) {
                Some(InitialValue::Alias(other)) => MaterializedInitial::Alias(*other),
                Some(InitialValue::Literal(SpecifiedValue::Inherit | SpecifiedValue::Initial)) => {
                    return Err(StyleError::invalid(
                        property,
                        "an initial value cannot be a CSS-wide keyword",
                    ));
                }
                Some(InitialValue::Literal(raw)) => {
                    MaterializedInitial::Value(Rc::new(coercion.coerce(&detached, property, raw)?))
                }
                None => return Err(StyleError::MissingInitialValue(property)),
            };
            initials.push(initial);
        }

        let mut tree = Self {
            nodes: Vec::new(),
            registry,
            coercion: Box::new(coercion),
            initials: initials.into_boxed_slice(),
            zero_edges: Rc::new(BoxEdges::ZERO),
            zero_border: Rc::new(BorderEdges::zero()),
            font_sizes: FontSizeTable::default(),
        };
        let _ = tree.push(PropertyTable::new(), None);
        Ok(tree)
    }

    /// Replace the font-size keyword table.
    #[must_use]
    pub fn with_font_sizes(mut self, font_sizes: FontSizeTable) -> Self {
        self.font_sizes = font_sizes;
        self
    }

    /// The root (initial) style.
    #[must_use]
    pub fn root(&self) -> Style<'_> {
        self.style(StyleId::ROOT)
    }

    /// A query handle for a style.
    #[must_use]
    pub fn style(&self, id: StyleId) -> Style<'_> {
        Style::new(self, id)
    }

    /// Number of styles in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root style exists from construction on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The registry this tree resolves against.
    #[must_use]
    pub const fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// The shared all-zero margin/padding box.
    #[must_use]
    pub const fn zero_edges(&self) -> &Rc<BoxEdges> {
        &self.zero_edges
    }

    /// The shared all-zero border.
    #[must_use]
    pub const fn zero_border(&self) -> &Rc<BorderEdges> {
        &self.zero_border
    }

    pub(crate) fn node(&self, id: StyleId) -> &StyleNode {
        &self.nodes[id.0]
    }

    /// [§ 7 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
    ///
    /// Derive the style of a child of `parent` from its cascade.
    ///
    /// Cascades with a fingerprint already seen under `parent` return the
    /// existing child: equal fingerprints always mean the same style. The
    /// counter tracker is told to reset and then increment for the returned
    /// style on every call, hit or miss, because counters follow element
    /// occurrences in document order rather than style identity.
    ///
    /// # Errors
    ///
    /// Coercion failures for any declared value.
    pub fn derive_child(
        &mut self,
        parent: StyleId,
        cascade: &Cascade,
        counters: &mut dyn CounterTracker,
    ) -> Result<StyleId, StyleError> {
        let cached = self.node(parent).children.get(cascade.fingerprint()).copied();
        let id = if let Some(existing) = cached {
            log::trace!(
                "style cache hit under {parent:?} for '{}'",
                cascade.fingerprint().as_str()
            );
            existing
        } else {
            let values = self.apply_cascade(Some(parent), PropertyTable::new(), cascade)?;
            let id = self.push(values, Some(parent));
            let _ = self.nodes[parent.0]
                .children
                .insert(cascade.fingerprint().clone(), id);
            id
        };

        let style = self.style(id);
        counters.reset(style);
        counters.increment(style);
        Ok(id)
    }

    /// Re-style `existing` without starting a new inheritance level.
    ///
    /// The new style has the same parent as `existing`, starts from a copy of
    /// its declared values, and then has `cascade` applied on top. It is not entered in
    /// any child cache. Memoized values of `existing` are not copied; the new
    /// style recomputes them, so initials that follow another property see
    /// the override.
    ///
    /// # Errors
    ///
    /// Coercion failures for any declared value.
    pub fn override_style(
        &mut self,
        existing: StyleId,
        cascade: &Cascade,
    ) -> Result<StyleId, StyleError> {
        let parent = self.node(existing).parent;
        let values = self.node(existing).values.declared_values();
        let values = self.apply_cascade(parent, values, cascade)?;
        Ok(self.push(values, parent))
    }

    /// Re-style `existing` with one property forced to an already-resolved
    /// value (`display: block` for an anonymous block box, for instance).
    pub fn override_value(
        &mut self,
        existing: StyleId,
        property: Property,
        value: ResolvedValue,
    ) -> StyleId {
        let parent = self.node(existing).parent;
        let mut values = self.node(existing).values.declared_values();
        values.declare(property, Rc::new(value));
        self.push(values, parent)
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "The properties of anonymous boxes are inherited from the enclosing
    /// non-anonymous box." The copy inherits exactly like `existing` but
    /// reports `display` as given.
    pub fn override_display(&mut self, existing: StyleId, display: Ident) -> StyleId {
        self.override_value(existing, Property::Display, ResolvedValue::Ident(display))
    }

    /// Build a property table by applying declarations in cascade order on
    /// top of `values`.
    fn apply_cascade(
        &self,
        parent: Option<StyleId>,
        mut values: PropertyTable,
        cascade: &Cascade,
    ) -> Result<PropertyTable, StyleError> {
        let parent_style = parent.map(|id| self.style(id));
        let ctx = CoercionContext::new(parent_style);
        for decl in cascade.declarations() {
            match (&decl.value, parent_style) {
                // [§ 6.2.1 The 'inherit' value](https://www.w3.org/TR/CSS2/cascade.html#value-def-inherit)
                // "the property takes the same specified value as the property
                // for the element's parent"
                (SpecifiedValue::Inherit, Some(parent)) => {
                    values.declare(decl.property, parent.resolve(decl.property));
                }
                // The root has nothing to inherit from: inherit means initial.
                (SpecifiedValue::Inherit | SpecifiedValue::Initial, _) => {
                    values.declare_initial(decl.property);
                }
                (raw, _) => {
                    let value = self.coercion.coerce(&ctx, decl.property, raw)?;
                    values.declare(decl.property, Rc::new(value));
                }
            }
        }
        Ok(values)
    }

    fn push(&mut self, values: PropertyTable, parent: Option<StyleId>) -> StyleId {
        let id = StyleId(self.nodes.len());
        self.nodes.push(StyleNode::new(values, parent));
        let allowed = AllowedEdges::for_style(self.style(id));
        self.nodes[id.0].allowed = allowed;
        log::trace!("created style {id:?} (parent {parent:?}, {allowed:?})");
        id
    }
}
