//! Margin, padding and border boxes.
//!
//! [§ 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)
//!
//! "Each box has a content area and optional surrounding padding, border,
//! and margin areas; the size of each area is specified by properties
//! defined below."

use std::rc::Rc;

use serde::Serialize;

use crate::context::RenderContext;
use crate::error::StyleError;
use crate::property::{Property, SideProperties};
use crate::style::Style;
use crate::value::{ColorValue, Ident};

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Edge {
    /// The top edge.
    Top,
    /// The right edge.
    Right,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
}

impl Edge {
    /// Every edge in CSS shorthand order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }
}

impl TryFrom<usize> for Edge {
    type Error = StyleError;

    /// Edges by shorthand position: 0 top, 1 right, 2 bottom, 3 left.
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(StyleError::InvalidEdge(index))
    }
}

/// Edge sizes for padding, border, or margin, in device units.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxEdges {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl BoxEdges {
    /// All four edges zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Edges in CSS shorthand order.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The size of one edge.
    #[must_use]
    pub const fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    fn get_mut(&mut self, edge: Edge) -> &mut f32 {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    /// Whether every edge is zero.
    #[must_use]
    pub fn is_all_zeros(&self) -> bool {
        Edge::ALL.iter().all(|&edge| self.get(edge) == 0.0)
    }

    /// Whether any edge is below zero.
    #[must_use]
    pub fn has_negative_values(&self) -> bool {
        Edge::ALL.iter().any(|&edge| self.get(edge) < 0.0)
    }

    /// Clamp negative edges to zero.
    pub fn reset_negative_values(&mut self) {
        for edge in Edge::ALL {
            let size = self.get_mut(edge);
            *size = size.max(0.0);
        }
    }

    /// Left plus right.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A border box: widths plus the style and color of each side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderEdges {
    /// Used border widths, in device units.
    pub widths: BoxEdges,
    /// `border-*-style` per side, in [`Edge::ALL`] order.
    pub styles: [Ident; 4],
    /// `border-*-color` per side, in [`Edge::ALL`] order.
    pub colors: [ColorValue; 4],
}

impl BorderEdges {
    /// The border with no visible side.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            widths: BoxEdges::ZERO,
            styles: [Ident::None; 4],
            colors: [ColorValue::TRANSPARENT; 4],
        }
    }

    /// The style of one side.
    #[must_use]
    pub const fn style(&self, edge: Edge) -> Ident {
        self.styles[edge.index()]
    }

    /// The color of one side.
    #[must_use]
    pub const fn color(&self, edge: Edge) -> ColorValue {
        self.colors[edge.index()]
    }

    /// Whether any side is `hidden`.
    ///
    /// [§ 17.6.2.1 Border conflict resolution](https://www.w3.org/TR/CSS2/tables.html#border-conflict-resolution)
    /// "Borders with the 'border-style' of 'hidden' take precedence over all
    /// other conflicting borders."
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.styles.contains(&Ident::Hidden)
    }
}

/// Which of the margin, padding and border boxes a style may have at all.
///
/// Fixed when the style is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllowedEdges {
    /// Whether margins apply.
    pub margins: bool,
    /// Whether padding applies.
    pub padding: bool,
    /// Whether borders apply.
    pub borders: bool,
}

impl Default for AllowedEdges {
    fn default() -> Self {
        Self {
            margins: true,
            padding: true,
            borders: true,
        }
    }
}

impl AllowedEdges {
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    ///
    /// "Applies to: all elements except elements with table display types
    /// other than table-caption, table and inline-table"
    ///
    /// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    ///
    /// "Applies to: all elements except table-row-group, table-header-group,
    /// table-footer-group, table-row, table-column-group and table-column"
    ///
    /// Tables in the collapsing border model have no padding either.
    pub(crate) fn for_style(style: Style<'_>) -> Self {
        let display = style.ident(Property::Display);
        let row_like = matches!(
            display,
            Some(
                Ident::TableHeaderGroup
                    | Ident::TableRowGroup
                    | Ident::TableFooterGroup
                    | Ident::TableRow
            )
        );
        let collapsed_table = matches!(display, Some(Ident::Table | Ident::InlineTable))
            && style.is_collapse_borders();
        Self {
            margins: !(row_like || display == Some(Ident::TableCell)),
            padding: !(row_like || collapsed_table),
            borders: !row_like,
        }
    }
}

impl Style<'_> {
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    ///
    /// "The percentage is calculated with respect to the width of the
    /// generated box's containing block." Margins may be negative.
    ///
    /// With `use_cache` the box is computed once for `cb_width` and shared;
    /// without it a fresh box is returned and the cache is left alone.
    #[must_use]
    pub fn margin(self, cb_width: f32, ctx: &RenderContext<'_>, use_cache: bool) -> Rc<BoxEdges> {
        if !self.node().allowed.margins {
            return Rc::clone(&self.tree.zero_edges);
        }
        if !use_cache {
            return self.edges(SideProperties::MARGIN, cb_width, ctx, false);
        }
        Rc::clone(
            self.node()
                .caches
                .margin
                .get_or_init(|| self.edges(SideProperties::MARGIN, cb_width, ctx, false)),
        )
    }

    /// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    ///
    /// "Unlike margin properties, values for padding values cannot be
    /// negative." Negative values are clamped to zero.
    #[must_use]
    pub fn padding(self, cb_width: f32, ctx: &RenderContext<'_>, use_cache: bool) -> Rc<BoxEdges> {
        if !self.node().allowed.padding {
            return Rc::clone(&self.tree.zero_edges);
        }
        if !use_cache {
            return self.edges(SideProperties::PADDING, cb_width, ctx, true);
        }
        Rc::clone(
            self.node()
                .caches
                .padding
                .get_or_init(|| self.edges(SideProperties::PADDING, cb_width, ctx, true)),
        )
    }

    fn edges(
        self,
        sides: SideProperties,
        cb_width: f32,
        ctx: &RenderContext<'_>,
        clamp: bool,
    ) -> Rc<BoxEdges> {
        let [top, right, bottom, left] =
            sides.as_array().map(|side| self.length_in_device_units(side, cb_width, ctx));
        let mut edges = BoxEdges::new(top, right, bottom, left);
        if edges.is_all_zeros() {
            return Rc::clone(&self.tree.zero_edges);
        }
        if clamp && edges.has_negative_values() {
            edges.reset_negative_values();
        }
        Rc::new(edges)
    }

    /// [§ 8.5 Border properties](https://www.w3.org/TR/CSS2/box.html#border-properties)
    ///
    /// "Border widths cannot be negative." A side whose style is `none` or
    /// `hidden` has width 0: "If the border style is 'none', the border
    /// width is also 0."
    #[must_use]
    pub fn border(self, ctx: &RenderContext<'_>) -> Rc<BorderEdges> {
        if !self.node().allowed.borders {
            return Rc::clone(&self.tree.zero_border);
        }
        Rc::clone(self.node().caches.border.get_or_init(|| self.compute_border(ctx)))
    }

    fn compute_border(self, ctx: &RenderContext<'_>) -> Rc<BorderEdges> {
        let styles = SideProperties::BORDER_STYLE
            .as_array()
            .map(|side| self.ident(side).unwrap_or(Ident::None));
        let colors = SideProperties::BORDER_COLOR
            .as_array()
            .map(|side| self.color(side).unwrap_or(ColorValue::TRANSPARENT));
        let widths = SideProperties::BORDER_WIDTH.as_array();
        let width = |edge: Edge| match styles[edge.index()] {
            Ident::None | Ident::Hidden => 0.0,
            _ => self.length_in_device_units(widths[edge.index()], 0.0, ctx),
        };

        let mut border = BorderEdges {
            widths: BoxEdges::new(
                width(Edge::Top),
                width(Edge::Right),
                width(Edge::Bottom),
                width(Edge::Left),
            ),
            styles,
            colors,
        };
        // Collapsed table borders still need to see a hidden side.
        if border.widths.is_all_zeros() && !border.has_hidden() {
            return Rc::clone(&self.tree.zero_border);
        }
        if border.widths.has_negative_values() {
            border.widths.reset_negative_values();
        }
        Rc::new(border)
    }
}
