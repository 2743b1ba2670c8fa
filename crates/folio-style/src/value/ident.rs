//! CSS keyword values.
//!
//! [§ 4.3.1 Identifiers](https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier)
//!
//! Every keyword the engine gives meaning to is a variant of one closed enum,
//! so predicates compare keywords with `==` instead of string matching.

use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// A CSS keyword.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs, reason = "variants are the CSS keywords")]
pub enum Ident {
    // Shared
    Auto,
    None,
    Normal,

    // [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
    Inline,
    Block,
    ListItem,
    RunIn,
    InlineBlock,
    Table,
    InlineTable,
    TableRowGroup,
    TableHeaderGroup,
    TableFooterGroup,
    TableRow,
    TableColumnGroup,
    TableColumn,
    TableCell,
    TableCaption,

    // [§ 9.5.1 'float'](https://www.w3.org/TR/CSS2/visuren.html#float-position)
    Left,
    Right,
    /// Paged-media float that moves the box into the page's footnote area.
    Footnote,
    Both,

    // [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    Static,
    Relative,
    Absolute,
    Fixed,

    // [§ 11.1.1 'overflow'](https://www.w3.org/TR/CSS2/visufx.html#overflow)
    Visible,
    Hidden,
    Scroll,
    Collapse,

    // [§ 8.5.3 Border style](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
    Dotted,
    Dashed,
    Solid,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,

    // [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
    Thin,
    Thick,

    // [§ 17.6 Borders](https://www.w3.org/TR/CSS2/tables.html#borders)
    Separate,
    Show,
    Hide,
    /// `-fs-table-paginate: paginate`
    Paginate,

    // [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
    #[strum(serialize = "xx-small")]
    #[serde(rename = "xx-small")]
    XxSmall,
    #[strum(serialize = "x-small")]
    #[serde(rename = "x-small")]
    XSmall,
    Small,
    Medium,
    Large,
    #[strum(serialize = "x-large")]
    #[serde(rename = "x-large")]
    XLarge,
    #[strum(serialize = "xx-large")]
    #[serde(rename = "xx-large")]
    XxLarge,
    Smaller,
    Larger,

    // [§ 15.7 Font style / variant / weight](https://www.w3.org/TR/CSS2/fonts.html)
    Italic,
    Oblique,
    SmallCaps,
    Bold,
    Bolder,
    Lighter,

    // [§ 16.2 'text-align'](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
    Center,
    Justify,

    // [§ 16.6 'white-space'](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
    Pre,
    Nowrap,
    PreWrap,
    PreLine,
    BreakWord,

    // [§ 16.3.1 'text-decoration'](https://www.w3.org/TR/CSS2/text.html#lining-striking-props)
    Underline,
    Overline,
    LineThrough,
    Blink,

    // [§ 16.5 'text-transform'](https://www.w3.org/TR/CSS2/text.html#caps-prop)
    Capitalize,
    Uppercase,
    Lowercase,

    // [§ 10.8.1 'vertical-align'](https://www.w3.org/TR/CSS2/visudet.html#propdef-vertical-align)
    Baseline,
    Sub,
    Super,
    Top,
    TextTop,
    Middle,
    Bottom,
    TextBottom,

    // [§ 13.3.1 Page break properties](https://www.w3.org/TR/CSS2/page.html#page-break-props)
    Always,
    Avoid,

    // [§ 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/)
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
    Space,
    Round,
    Contain,
    Cover,

    // [§ 9.10 'direction'](https://www.w3.org/TR/CSS2/visuren.html#direction)
    Ltr,
    Rtl,

    // [§ 12.5.1 Lists](https://www.w3.org/TR/CSS2/generate.html#list-style)
    Disc,
    Circle,
    Square,
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerGreek,
    LowerAlpha,
    LowerLatin,
    UpperAlpha,
    UpperLatin,
    Inside,
    Outside,

    // [§ 4.4 'box-sizing'](https://www.w3.org/TR/css-box-4/#box-sizing)
    ContentBox,
    BorderBox,
}

impl Ident {
    /// The CSS spelling of the keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip_through_css_spelling() {
        for ident in [
            Ident::XxSmall,
            Ident::XSmall,
            Ident::XLarge,
            Ident::TableHeaderGroup,
            Ident::RunIn,
            Ident::RepeatX,
            Ident::LineThrough,
            Ident::BorderBox,
        ] {
            assert_eq!(ident.as_str().parse::<Ident>().ok(), Some(ident));
        }
        assert_eq!(Ident::XxSmall.as_str(), "xx-small");
        assert_eq!(Ident::TableRowGroup.as_str(), "table-row-group");
    }

    #[test]
    fn test_keywords_parse_case_insensitively() {
        assert_eq!("INLINE-BLOCK".parse::<Ident>().ok(), Some(Ident::InlineBlock));
        assert!("not-a-keyword".parse::<Ident>().is_err());
    }
}
