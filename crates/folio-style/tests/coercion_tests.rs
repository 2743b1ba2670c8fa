//! Integration tests for the bundled CSS value coercion.

use folio_style::{
    Cascade, CoercionContext, ColorValue, CounterData, CssCoercion, Declaration, Ident,
    LengthUnit, LengthValue, NoCounters, Property, ResolvedValue, SpecifiedValue, StyleError,
    StyleId, StyleTree, ValueCoercion,
};

fn coerce(property: Property, raw: SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    CssCoercion.coerce(&CoercionContext::detached(), property, &raw)
}

fn kw(keyword: &str) -> SpecifiedValue {
    SpecifiedValue::ident(keyword)
}

fn pct(value: f32) -> ResolvedValue {
    ResolvedValue::Length(LengthValue::percent(value))
}

#[test]
fn test_colors() {
    assert_eq!(
        coerce(Property::Color, SpecifiedValue::Hash("0f0".to_string())).unwrap(),
        ResolvedValue::Color(ColorValue::rgb(0, 255, 0))
    );
    assert_eq!(
        coerce(Property::Color, kw("Teal")).unwrap(),
        ResolvedValue::Color(ColorValue::rgb(0, 128, 128))
    );
    assert_eq!(
        coerce(
            Property::BackgroundColor,
            SpecifiedValue::function(
                "rgb",
                vec![
                    SpecifiedValue::Number(255.0),
                    SpecifiedValue::Percentage(50.0),
                    SpecifiedValue::Number(300.0),
                ],
            ),
        )
        .unwrap(),
        ResolvedValue::Color(ColorValue::rgb(255, 128, 255))
    );
    assert!(matches!(
        coerce(Property::Color, kw("not-a-color")),
        Err(StyleError::InvalidValue {
            property: Property::Color,
            ..
        })
    ));
}

#[test]
fn test_lengths_and_keywords() {
    assert_eq!(
        coerce(Property::MarginTop, SpecifiedValue::dimension(1.5, "EM")).unwrap(),
        ResolvedValue::Length(LengthValue::new(1.5, LengthUnit::Em))
    );
    assert_eq!(
        coerce(Property::Width, kw("auto")).unwrap(),
        ResolvedValue::Ident(Ident::Auto)
    );
    assert_eq!(
        coerce(Property::PaddingLeft, SpecifiedValue::Number(0.0)).unwrap(),
        ResolvedValue::Length(LengthValue::px(0.0))
    );
    assert!(coerce(Property::PaddingLeft, SpecifiedValue::Number(4.0)).is_err());

    let error = coerce(Property::Width, SpecifiedValue::dimension(3.0, "parsecs")).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid value for 'width': unknown unit 'parsecs'"
    );
}

#[test]
fn test_border_width_keywords() {
    let width = |keyword| {
        coerce(Property::BorderTopWidth, kw(keyword))
            .unwrap()
            .as_length()
    };
    assert_eq!(width("thin"), Some(LengthValue::px(1.0)));
    assert_eq!(width("medium"), Some(LengthValue::px(3.0)));
    assert_eq!(width("thick"), Some(LengthValue::px(5.0)));
    assert!(coerce(Property::BorderTopWidth, kw("auto")).is_err());
}

#[test]
fn test_font_size_accepts_only_size_keywords() {
    assert_eq!(
        coerce(Property::FontSize, kw("x-large")).unwrap(),
        ResolvedValue::Ident(Ident::XLarge)
    );
    assert!(coerce(Property::FontSize, kw("bold")).is_err());
}

#[test]
fn test_font_weight_keywords() {
    assert_eq!(
        coerce(Property::FontWeight, kw("bold")).unwrap(),
        ResolvedValue::Number(700.0)
    );
    assert_eq!(
        coerce(Property::FontWeight, SpecifiedValue::Number(550.0)).unwrap(),
        ResolvedValue::Number(550.0)
    );
    assert!(coerce(Property::FontWeight, SpecifiedValue::Number(0.0)).is_err());
    // Without a parent, relative weights start from normal.
    assert_eq!(
        coerce(Property::FontWeight, kw("bolder")).unwrap(),
        ResolvedValue::Number(700.0)
    );
}

#[test]
fn test_relative_font_weight_uses_parent() {
    let mut tree = StyleTree::css().unwrap();
    let cascade = Cascade::from_declarations(vec![Declaration::new(
        Property::FontWeight,
        SpecifiedValue::Number(300.0),
    )])
    .unwrap();
    let light = tree
        .derive_child(StyleId::ROOT, &cascade, &mut NoCounters)
        .unwrap();
    let ctx = CoercionContext::new(Some(tree.style(light)));

    assert_eq!(
        CssCoercion
            .coerce(&ctx, Property::FontWeight, &kw("bolder"))
            .unwrap(),
        ResolvedValue::Number(400.0)
    );
    assert_eq!(
        CssCoercion
            .coerce(&ctx, Property::FontWeight, &kw("lighter"))
            .unwrap(),
        ResolvedValue::Number(100.0)
    );
}

#[test]
fn test_font_family_list() {
    assert_eq!(
        coerce(
            Property::FontFamily,
            SpecifiedValue::List(vec![
                SpecifiedValue::Str("Times New Roman".to_string()),
                kw("serif"),
            ]),
        )
        .unwrap(),
        ResolvedValue::Strings(vec!["Times New Roman".to_string(), "serif".to_string()])
    );
    assert!(coerce(Property::FontFamily, SpecifiedValue::Number(3.0)).is_err());
}

#[test]
fn test_counter_defaults() {
    let counters = |property, raw| match coerce(property, raw).unwrap() {
        ResolvedValue::Counters(counters) => counters,
        other => panic!("expected counters, got {other:?}"),
    };
    let counter = |name: &str, value| CounterData {
        name: name.to_string(),
        value,
    };

    assert_eq!(counters(Property::CounterReset, kw("none")), vec![]);
    assert_eq!(
        counters(
            Property::CounterReset,
            SpecifiedValue::List(vec![kw("chapter"), kw("section"), SpecifiedValue::Number(3.0)]),
        ),
        vec![counter("chapter", 0), counter("section", 3)]
    );
    assert_eq!(
        counters(Property::CounterIncrement, kw("page")),
        vec![counter("page", 1)]
    );
    assert!(coerce(Property::CounterIncrement, SpecifiedValue::Number(2.0)).is_err());
}

#[test]
fn test_background_position_keywords() {
    let position = |raw| match coerce(Property::BackgroundPosition, raw).unwrap() {
        ResolvedValue::List(mut layers) => layers.remove(0),
        other => panic!("expected layers, got {other:?}"),
    };
    let layer = |horizontal, vertical| ResolvedValue::List(vec![horizontal, vertical]);

    assert_eq!(
        position(SpecifiedValue::List(vec![SpecifiedValue::List(vec![
            kw("bottom"),
            kw("left"),
        ])])),
        layer(pct(0.0), pct(100.0))
    );
    assert_eq!(position(kw("top")), layer(pct(50.0), pct(0.0)));
    assert_eq!(position(kw("right")), layer(pct(100.0), pct(50.0)));
    assert_eq!(
        position(SpecifiedValue::List(vec![SpecifiedValue::List(vec![
            SpecifiedValue::px(10.0),
            kw("center"),
        ])])),
        layer(ResolvedValue::Length(LengthValue::px(10.0)), pct(50.0))
    );
    assert!(coerce(Property::BackgroundPosition, kw("middle")).is_err());
}

#[test]
fn test_background_size_defaults_height_to_auto() {
    assert_eq!(
        coerce(Property::BackgroundSize, SpecifiedValue::Percentage(50.0)).unwrap(),
        ResolvedValue::List(vec![ResolvedValue::List(vec![
            pct(50.0),
            ResolvedValue::Ident(Ident::Auto),
        ])])
    );
    assert_eq!(
        coerce(Property::BackgroundSize, kw("contain")).unwrap(),
        ResolvedValue::List(vec![ResolvedValue::Ident(Ident::Contain)])
    );
}

#[test]
fn test_functions_keep_arguments() {
    let running = coerce(
        Property::Position,
        SpecifiedValue::function("RUNNING", vec![kw("chapter-title")]),
    )
    .unwrap();
    let function = running.as_function().unwrap();
    assert_eq!(function.name, "running");
    assert_eq!(
        function.args,
        vec![ResolvedValue::Strings(vec!["chapter-title".to_string()])]
    );

    // Other functions are not positions.
    assert!(coerce(
        Property::Position,
        SpecifiedValue::function("element", vec![kw("x")])
    )
    .is_err());
}

#[test]
fn test_unknown_keyword_is_rejected() {
    let error = coerce(Property::Display, kw("grid-ish")).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid value for 'display': unknown keyword 'grid-ish'"
    );
    let error = coerce(Property::Display, SpecifiedValue::Number(1.0)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid value for 'display': expected a keyword, got a number"
    );
}
