//! Box classification predicates.
//!
//! [§ 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html)
//!
//! Layout branches on these directly. Each one reads one or two resolved
//! values and caches nothing of its own.

use crate::property::Property;
use crate::style::Style;
use crate::value::{Ident, ResolvedValue};

impl Style<'_> {
    fn display(self) -> Option<Ident> {
        self.ident(Property::Display)
    }

    fn display_is(self, display: Ident) -> bool {
        self.display() == Some(display)
    }

    // [§ 9.5.1 Positioning the float](https://www.w3.org/TR/CSS2/visuren.html#float-position)

    /// Floated left or right. The paged-media `footnote` float does not
    /// count: footnotes leave the flow without becoming floats.
    #[must_use]
    pub fn is_floated(self) -> bool {
        self.is_floated_left() || self.is_floated_right()
    }

    /// `float: left`.
    #[must_use]
    pub fn is_floated_left(self) -> bool {
        self.is_ident(Property::Float, Ident::Left)
    }

    /// `float: right`.
    #[must_use]
    pub fn is_floated_right(self) -> bool {
        self.is_ident(Property::Float, Ident::Right)
    }

    /// `float: footnote`.
    #[must_use]
    pub fn is_footnote(self) -> bool {
        self.is_ident(Property::Float, Ident::Footnote)
    }

    // [§ 9.3.1 Choosing a positioning scheme](https://www.w3.org/TR/CSS2/visuren.html#choose-position)

    /// `position: absolute`.
    #[must_use]
    pub fn is_absolute(self) -> bool {
        self.is_ident(Property::Position, Ident::Absolute)
    }

    /// `position: fixed`.
    #[must_use]
    pub fn is_fixed(self) -> bool {
        self.is_ident(Property::Position, Ident::Fixed)
    }

    /// `position: relative`.
    #[must_use]
    pub fn is_relative(self) -> bool {
        self.is_ident(Property::Position, Ident::Relative)
    }

    /// [§ 5 Running elements](https://www.w3.org/TR/css-gcpm-3/#running-elements)
    ///
    /// "position: running(custom-ident) removes the element (and associated
    /// ::marker pseudo-element) from the normal flow, and makes it available
    /// to place in a page margin box using element()."
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(
            &*self.resolve(Property::Position),
            ResolvedValue::Function(function) if function.name == "running"
        )
    }

    /// Absolutely, fixed or relatively positioned, or floated.
    #[must_use]
    pub fn is_positioned_or_floated(self) -> bool {
        self.is_absolute() || self.is_fixed() || self.is_floated() || self.is_relative()
    }

    fn is_out_of_flow(self) -> bool {
        self.is_floated() || self.is_absolute() || self.is_fixed()
    }

    /// An inline box that stays in the inline flow.
    #[must_use]
    pub fn is_inline(self) -> bool {
        self.display_is(Ident::Inline) && !(self.is_out_of_flow() || self.is_running())
    }

    /// `display: inline-block`.
    #[must_use]
    pub fn is_inline_block(self) -> bool {
        self.display_is(Ident::InlineBlock)
    }

    /// `display: inline-table`.
    #[must_use]
    pub fn is_inline_table(self) -> bool {
        self.display_is(Ident::InlineTable)
    }

    /// `display: table`.
    #[must_use]
    pub fn is_table(self) -> bool {
        self.display_is(Ident::Table)
    }

    /// `display: table-cell`.
    #[must_use]
    pub fn is_table_cell(self) -> bool {
        self.display_is(Ident::TableCell)
    }

    /// `display: table-row`.
    #[must_use]
    pub fn is_table_row(self) -> bool {
        self.display_is(Ident::TableRow)
    }

    /// A row group: `table-row-group`, `table-header-group` or
    /// `table-footer-group`.
    #[must_use]
    pub fn is_table_row_group(self) -> bool {
        matches!(
            self.display(),
            Some(Ident::TableRowGroup | Ident::TableHeaderGroup | Ident::TableFooterGroup)
        )
    }

    /// `display: table-caption`.
    #[must_use]
    pub fn is_table_caption(self) -> bool {
        self.display_is(Ident::TableCaption)
    }

    /// `display: list-item`.
    #[must_use]
    pub fn is_list_item(self) -> bool {
        self.display_is(Ident::ListItem)
    }

    /// `display: none`.
    #[must_use]
    pub fn is_display_none(self) -> bool {
        self.display_is(Ident::None)
    }

    /// `display: block`, regardless of positioning.
    #[must_use]
    pub fn is_specified_as_block(self) -> bool {
        self.display_is(Ident::Block)
    }

    /// [§ 9.7 Relationships between 'display', 'position', and 'float'](https://www.w3.org/TR/CSS2/visuren.html#dis-pos-flo)
    ///
    /// "Otherwise, if 'float' has a value other than 'none', the box is
    /// floated and 'display' is set according to the table below."
    ///
    /// Floated and absolutely positioned boxes are blockified. Otherwise the
    /// box is block-equivalent for block, list-item, run-in, inline-block,
    /// table and inline-table.
    #[must_use]
    pub fn is_block_equivalent(self) -> bool {
        if self.is_out_of_flow() {
            return true;
        }
        matches!(
            self.display(),
            Some(
                Ident::Block
                    | Ident::ListItem
                    | Ident::RunIn
                    | Ident::InlineBlock
                    | Ident::Table
                    | Ident::InlineTable
            )
        )
    }

    /// Whether the box is placed by an inline formatting context: inline-level
    /// display types plus every box taken out of flow from one.
    #[must_use]
    pub fn is_laid_out_in_inline_context(self) -> bool {
        if self.is_out_of_flow() || self.is_running() {
            return true;
        }
        matches!(
            self.display(),
            Some(Ident::Inline | Ident::InlineBlock | Ident::InlineTable)
        )
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// Whether `auto` horizontal margins are solved by the normal-flow
    /// constraint equation.
    #[must_use]
    pub fn is_need_auto_margin_resolution(self) -> bool {
        !(self.is_out_of_flow() || self.is_inline_block())
    }

    /// [§ 10.3.5 Floating, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#float-width)
    ///
    /// "If 'width' is computed as 'auto', the used value is the
    /// 'shrink-to-fit' width."
    #[must_use]
    pub fn is_can_be_shrunk_to_fit(self) -> bool {
        self.is_inline_block() || self.is_out_of_flow()
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "Floats, absolutely positioned elements, block containers (such as
    /// inline-blocks, table-cells, and table-captions) that are not block
    /// boxes, and block boxes with 'overflow' other than 'visible' (except
    /// when that value has been propagated to the viewport) establish new
    /// block formatting contexts for their contents."
    #[must_use]
    pub fn establishes_bfc(self) -> bool {
        if self.is_running() {
            return false;
        }
        self.is_out_of_flow()
            || self.is_inline_block()
            || self.is_table_cell()
            || !self.is_overflow_visible()
    }

    /// Whether the box paints in a layer of its own: positioned boxes, and
    /// scrolling boxes where overflow applies.
    #[must_use]
    pub fn requires_layer(self) -> bool {
        if self.is_running() {
            return false;
        }
        if self.is_absolute() || self.is_relative() || self.is_fixed() {
            return true;
        }
        matches!(
            self.ident(Property::Overflow),
            Some(Ident::Scroll | Ident::Auto)
        ) && self.is_overflow_applies()
    }

    /// [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
    ///
    /// "Applies to: block containers"
    #[must_use]
    pub fn is_overflow_applies(self) -> bool {
        matches!(
            self.display(),
            Some(
                Ident::Block
                    | Ident::ListItem
                    | Ident::Table
                    | Ident::InlineBlock
                    | Ident::TableCell
            )
        )
    }

    /// `overflow: visible`.
    #[must_use]
    pub fn is_overflow_visible(self) -> bool {
        self.is_ident(Property::Overflow, Ident::Visible)
    }

    /// [§ 8.3.1 Collapsing margins](https://www.w3.org/TR/CSS2/box.html#collapsing-margins)
    ///
    /// "Margins of elements that establish new block formatting contexts
    /// (such as floats and elements with 'overflow' other than 'visible') do
    /// not collapse with their in-flow children."
    #[must_use]
    pub fn is_may_collapse_margins_with_children(self) -> bool {
        self.is_overflow_visible() && !self.is_out_of_flow() && !self.is_inline_block()
    }

    /// [§ 17.6.2 The collapsing border model](https://www.w3.org/TR/CSS2/tables.html#collapsing-borders)
    ///
    /// Paginated tables always use separated borders.
    #[must_use]
    pub fn is_collapse_borders(self) -> bool {
        self.is_ident(Property::BorderCollapse, Ident::Collapse) && !self.is_paginate_table()
    }

    /// `-fs-table-paginate: paginate`: repeat header and footer groups on
    /// every page the table spans.
    #[must_use]
    pub fn is_paginate_table(self) -> bool {
        self.is_ident(Property::FsTablePaginate, Ident::Paginate)
    }

    /// `visibility: visible`.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.is_ident(Property::Visibility, Ident::Visible)
    }

    // [§ 13.3.1 Page break properties](https://www.w3.org/TR/CSS2/page.html#page-break-props)

    /// `page-break-before` of `always`, `left` or `right`.
    #[must_use]
    pub fn is_force_page_break_before(self) -> bool {
        is_forced_break(self.ident(Property::PageBreakBefore))
    }

    /// `page-break-after` of `always`, `left` or `right`.
    #[must_use]
    pub fn is_force_page_break_after(self) -> bool {
        is_forced_break(self.ident(Property::PageBreakAfter))
    }

    /// `page-break-inside: avoid`.
    #[must_use]
    pub fn is_avoid_page_break_inside(self) -> bool {
        self.is_ident(Property::PageBreakInside, Ident::Avoid)
    }

    // [§ 9.5.2 Controlling flow next to floats](https://www.w3.org/TR/CSS2/visuren.html#flow-control)

    /// `clear: left` or `clear: both`.
    #[must_use]
    pub fn is_clear_left(self) -> bool {
        matches!(self.ident(Property::Clear), Some(Ident::Left | Ident::Both))
    }

    /// `clear: right` or `clear: both`.
    #[must_use]
    pub fn is_clear_right(self) -> bool {
        matches!(self.ident(Property::Clear), Some(Ident::Right | Ident::Both))
    }

    /// Any `clear` other than `none`.
    #[must_use]
    pub fn is_cleared(self) -> bool {
        !self.is_ident(Property::Clear, Ident::None)
    }

    /// `width: auto`.
    #[must_use]
    pub fn is_auto_width(self) -> bool {
        self.is_ident(Property::Width, Ident::Auto)
    }

    /// `height: auto`.
    #[must_use]
    pub fn is_auto_height(self) -> bool {
        self.is_ident(Property::Height, Ident::Auto)
    }

    /// `max-width: none`.
    #[must_use]
    pub fn is_max_width_none(self) -> bool {
        self.is_ident(Property::MaxWidth, Ident::None)
    }

    /// `max-height: none`.
    #[must_use]
    pub fn is_max_height_none(self) -> bool {
        self.is_ident(Property::MaxHeight, Ident::None)
    }

    /// [§ 14.2 The background](https://www.w3.org/TR/CSS2/colors.html#background)
    ///
    /// False only for a transparent color with no image in any layer.
    #[must_use]
    pub fn has_background(self) -> bool {
        let transparent = self
            .color(Property::BackgroundColor)
            .is_none_or(|color| color.is_transparent());
        let images = self.resolve(Property::BackgroundImage);
        let no_images = match &*images {
            ResolvedValue::List(layers) => layers
                .iter()
                .all(|layer| layer.as_ident() == Some(Ident::None)),
            other => other.as_ident() == Some(Ident::None),
        };
        !(transparent && no_images)
    }

    /// `background-attachment: fixed`.
    #[must_use]
    pub fn is_fixed_background(self) -> bool {
        self.is_ident(Property::BackgroundAttachment, Ident::Fixed)
    }

    /// [§ 16.2 Alignment](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
    ///
    /// "If an element has a computed value for 'white-space' of 'pre' or
    /// 'pre-wrap', then neither the glyphs of that element's text content nor
    /// its white space may be altered by any justification algorithm."
    ///
    /// Justification is skipped for `pre` and `pre-line`.
    #[must_use]
    pub fn is_text_justify(self) -> bool {
        self.is_ident(Property::TextAlign, Ident::Justify)
            && !matches!(
                self.ident(Property::WhiteSpace),
                Some(Ident::Pre | Ident::PreLine)
            )
    }

    /// Any `text-decoration` other than `none`.
    #[must_use]
    pub fn has_text_decoration(self) -> bool {
        match &*self.resolve(Property::TextDecoration) {
            ResolvedValue::Ident(ident) => *ident != Ident::None,
            ResolvedValue::List(lines) => !lines.is_empty(),
            _ => false,
        }
    }

    /// `word-wrap: break-word`.
    #[must_use]
    pub fn is_word_wrap_break_word(self) -> bool {
        self.is_ident(Property::WordWrap, Ident::BreakWord)
    }

    /// `direction: ltr`.
    #[must_use]
    pub fn is_direction_ltr(self) -> bool {
        self.is_ident(Property::Direction, Ident::Ltr)
    }

    /// `box-sizing: border-box`.
    #[must_use]
    pub fn is_border_box(self) -> bool {
        self.is_ident(Property::BoxSizing, Ident::BorderBox)
    }
}

const fn is_forced_break(value: Option<Ident>) -> bool {
    matches!(value, Some(Ident::Always | Ident::Left | Ident::Right))
}
