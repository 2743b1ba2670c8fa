//! Integration tests for box classification predicates.

use folio_style::{Cascade, Declaration, NoCounters, Property, SpecifiedValue, StyleId, StyleTree};

/// Build a child of the root from `(property, keyword)` pairs.
fn styled(tree: &mut StyleTree, declarations: &[(Property, SpecifiedValue)]) -> StyleId {
    let declarations = declarations
        .iter()
        .map(|(property, value)| Declaration::new(*property, value.clone()))
        .collect();
    let cascade = Cascade::from_declarations(declarations).unwrap();
    tree.derive_child(StyleId::ROOT, &cascade, &mut NoCounters)
        .unwrap()
}

fn kw(keyword: &str) -> SpecifiedValue {
    SpecifiedValue::ident(keyword)
}

#[test]
fn test_initial_style_is_plain_inline() {
    let tree = StyleTree::css().unwrap();
    let root = tree.root();
    assert!(root.is_inline());
    assert!(root.is_laid_out_in_inline_context());
    assert!(!root.is_block_equivalent());
    assert!(!root.is_floated());
    assert!(!root.is_positioned_or_floated());
    assert!(root.is_visible());
    assert!(root.is_overflow_visible());
    assert!(root.is_auto_width());
    assert!(root.is_auto_height());
    assert!(root.is_max_width_none());
    assert!(root.is_max_height_none());
    assert!(root.is_direction_ltr());
    assert!(!root.is_border_box());
    assert!(!root.is_cleared());
    assert!(!root.has_background());
    assert!(!root.has_text_decoration());
    assert!(!root.establishes_bfc());
    assert!(!root.requires_layer());
}

#[test]
fn test_footnote_is_not_a_float() {
    let mut tree = StyleTree::css().unwrap();
    let footnote = styled(&mut tree, &[(Property::Float, kw("footnote"))]);
    let left = styled(&mut tree, &[(Property::Float, kw("left"))]);

    let footnote = tree.style(footnote);
    assert!(footnote.is_footnote());
    assert!(!footnote.is_floated());
    assert!(footnote.is_inline());

    let left = tree.style(left);
    assert!(left.is_floated());
    assert!(left.is_floated_left());
    assert!(!left.is_floated_right());
    assert!(!left.is_inline());
    assert!(left.is_block_equivalent());
    assert!(left.is_can_be_shrunk_to_fit());
    assert!(!left.is_need_auto_margin_resolution());
}

#[test]
fn test_running_elements() {
    let mut tree = StyleTree::css().unwrap();
    let running = styled(
        &mut tree,
        &[
            (Property::Display, kw("block")),
            (Property::Overflow, kw("hidden")),
            (
                Property::Position,
                SpecifiedValue::function("Running", vec![kw("header")]),
            ),
        ],
    );
    let running = tree.style(running);
    assert!(running.is_running());
    assert!(!running.is_absolute());
    assert!(!running.is_positioned_or_floated());
    assert!(running.is_laid_out_in_inline_context());
    assert!(!running.establishes_bfc());
    assert!(!running.requires_layer());
}

#[test]
fn test_block_formatting_contexts() {
    let mut tree = StyleTree::css().unwrap();
    let block = styled(&mut tree, &[(Property::Display, kw("block"))]);
    let hidden = styled(
        &mut tree,
        &[
            (Property::Display, kw("block")),
            (Property::Overflow, kw("hidden")),
        ],
    );
    let cell = styled(&mut tree, &[(Property::Display, kw("table-cell"))]);
    let inline_block = styled(&mut tree, &[(Property::Display, kw("inline-block"))]);
    let absolute = styled(&mut tree, &[(Property::Position, kw("absolute"))]);

    assert!(!tree.style(block).establishes_bfc());
    assert!(tree.style(block).is_may_collapse_margins_with_children());
    assert!(tree.style(hidden).establishes_bfc());
    assert!(!tree.style(hidden).is_may_collapse_margins_with_children());
    assert!(tree.style(cell).establishes_bfc());
    assert!(tree.style(inline_block).establishes_bfc());
    assert!(!tree.style(inline_block).is_may_collapse_margins_with_children());
    assert!(tree.style(absolute).establishes_bfc());
}

#[test]
fn test_layers_for_positioned_and_scrolling_boxes() {
    let mut tree = StyleTree::css().unwrap();
    let relative = styled(&mut tree, &[(Property::Position, kw("relative"))]);
    let scrolling_block = styled(
        &mut tree,
        &[
            (Property::Display, kw("block")),
            (Property::Overflow, kw("scroll")),
        ],
    );
    let scrolling_inline = styled(&mut tree, &[(Property::Overflow, kw("auto"))]);
    let hidden_block = styled(
        &mut tree,
        &[
            (Property::Display, kw("block")),
            (Property::Overflow, kw("hidden")),
        ],
    );

    assert!(tree.style(relative).requires_layer());
    assert!(tree.style(relative).is_positioned_or_floated());
    assert!(tree.style(scrolling_block).requires_layer());
    // Overflow does not apply to inline boxes.
    assert!(!tree.style(scrolling_inline).is_overflow_applies());
    assert!(!tree.style(scrolling_inline).requires_layer());
    assert!(!tree.style(hidden_block).requires_layer());
}

#[test]
fn test_display_classification() {
    let mut tree = StyleTree::css().unwrap();
    let display = |tree: &mut StyleTree, value: &str| styled(tree, &[(Property::Display, kw(value))]);

    let run_in = display(&mut tree, "run-in");
    let list_item = display(&mut tree, "list-item");
    let inline_table = display(&mut tree, "inline-table");
    let header = display(&mut tree, "table-header-group");
    let caption = display(&mut tree, "table-caption");
    let none = display(&mut tree, "none");
    let row = display(&mut tree, "table-row");

    assert!(tree.style(run_in).is_block_equivalent());
    assert!(!tree.style(run_in).is_laid_out_in_inline_context());
    assert!(tree.style(list_item).is_list_item());
    assert!(tree.style(list_item).is_block_equivalent());
    assert!(tree.style(inline_table).is_inline_table());
    assert!(tree.style(inline_table).is_block_equivalent());
    assert!(tree.style(inline_table).is_laid_out_in_inline_context());
    assert!(tree.style(header).is_table_row_group());
    assert!(!tree.style(header).is_block_equivalent());
    assert!(tree.style(caption).is_table_caption());
    assert!(tree.style(none).is_display_none());
    assert!(tree.style(row).is_table_row());
    assert!(!tree.style(row).is_table_row_group());
}

#[test]
fn test_collapse_borders_unless_paginated() {
    let mut tree = StyleTree::css().unwrap();
    let collapsed = styled(
        &mut tree,
        &[
            (Property::Display, kw("table")),
            (Property::BorderCollapse, kw("collapse")),
        ],
    );
    let paginated = styled(
        &mut tree,
        &[
            (Property::Display, kw("table")),
            (Property::BorderCollapse, kw("collapse")),
            (Property::FsTablePaginate, kw("paginate")),
        ],
    );

    assert!(tree.style(collapsed).is_table());
    assert!(tree.style(collapsed).is_collapse_borders());
    assert!(tree.style(paginated).is_paginate_table());
    assert!(!tree.style(paginated).is_collapse_borders());
}

#[test]
fn test_text_justify_is_off_for_preformatted_text() {
    let mut tree = StyleTree::css().unwrap();
    let justified = styled(&mut tree, &[(Property::TextAlign, kw("justify"))]);
    let pre = styled(
        &mut tree,
        &[
            (Property::TextAlign, kw("justify")),
            (Property::WhiteSpace, kw("pre")),
        ],
    );
    let pre_line = styled(
        &mut tree,
        &[
            (Property::TextAlign, kw("justify")),
            (Property::WhiteSpace, kw("pre-line")),
        ],
    );
    let pre_wrap = styled(
        &mut tree,
        &[
            (Property::TextAlign, kw("justify")),
            (Property::WhiteSpace, kw("pre-wrap")),
        ],
    );

    assert!(tree.style(justified).is_text_justify());
    assert!(!tree.style(pre).is_text_justify());
    assert!(!tree.style(pre_line).is_text_justify());
    assert!(tree.style(pre_wrap).is_text_justify());
}

#[test]
fn test_backgrounds() {
    let mut tree = StyleTree::css().unwrap();
    let colored = styled(&mut tree, &[(Property::BackgroundColor, kw("yellow"))]);
    let image = styled(
        &mut tree,
        &[(
            Property::BackgroundImage,
            SpecifiedValue::Url("paper.png".to_string()),
        )],
    );
    let transparent = styled(
        &mut tree,
        &[(Property::BackgroundColor, kw("transparent"))],
    );
    let fixed = styled(&mut tree, &[(Property::BackgroundAttachment, kw("fixed"))]);

    assert!(tree.style(colored).has_background());
    assert!(tree.style(image).has_background());
    assert!(!tree.style(transparent).has_background());
    assert!(tree.style(fixed).is_fixed_background());
}

#[test]
fn test_page_breaks() {
    let mut tree = StyleTree::css().unwrap();
    let before = styled(&mut tree, &[(Property::PageBreakBefore, kw("left"))]);
    let after = styled(&mut tree, &[(Property::PageBreakAfter, kw("always"))]);
    let avoid = styled(
        &mut tree,
        &[
            (Property::PageBreakBefore, kw("avoid")),
            (Property::PageBreakInside, kw("avoid")),
        ],
    );

    assert!(tree.style(before).is_force_page_break_before());
    assert!(!tree.style(before).is_force_page_break_after());
    assert!(tree.style(after).is_force_page_break_after());
    assert!(!tree.style(avoid).is_force_page_break_before());
    assert!(tree.style(avoid).is_avoid_page_break_inside());
}

#[test]
fn test_clearance() {
    let mut tree = StyleTree::css().unwrap();
    let both = styled(&mut tree, &[(Property::Clear, kw("both"))]);
    let right = styled(&mut tree, &[(Property::Clear, kw("right"))]);

    assert!(tree.style(both).is_clear_left());
    assert!(tree.style(both).is_clear_right());
    assert!(tree.style(both).is_cleared());
    assert!(!tree.style(right).is_clear_left());
    assert!(tree.style(right).is_clear_right());
}

#[test]
fn test_text_and_box_flags() {
    let mut tree = StyleTree::css().unwrap();
    let id = styled(
        &mut tree,
        &[
            (
                Property::TextDecoration,
                SpecifiedValue::List(vec![kw("underline"), kw("overline")]),
            ),
            (Property::WordWrap, kw("break-word")),
            (Property::Direction, kw("rtl")),
            (Property::BoxSizing, kw("border-box")),
            (Property::Visibility, kw("hidden")),
            (Property::Width, SpecifiedValue::px(100.0)),
        ],
    );
    let style = tree.style(id);
    assert!(style.has_text_decoration());
    assert!(style.is_word_wrap_break_word());
    assert!(!style.is_direction_ltr());
    assert!(style.is_border_box());
    assert!(!style.is_visible());
    assert!(!style.is_auto_width());
}
