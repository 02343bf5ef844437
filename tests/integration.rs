//! Integration tests for breakpoint-css.
//!
//! These exercise the public API from outside the crate: property bags in
//! their persisted JSON shapes go in, scoped CSS and editor field lists come
//! out.

use breakpoint_css::prelude::*;
use breakpoint_css::value::{BorderRadiusValue, BoxModelValue, ColorToken, Display, SpacingUnit};
use breakpoint_css::visibility::{has_flex_in_any_breakpoint, resolve};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn theme() -> Theme {
    Theme::from_value(json!({
        "colors": {
            "primary": { "100": "#d0e1f9", "500": "#13315c" },
            "white": "#ffffff",
            "semantic": { "danger": "#dc2626" }
        },
        "typography": { "fontSize": { "base": "1rem" } }
    }))
}

fn build(class: &str, props: Value) -> String {
    compile(
        &ClassName::new(class),
        &PropertyBag::from_value(props),
        &theme(),
        &CompileOptions::default(),
    )
}

// ---------------------------------------------------------------------------
// Responsive values
// ---------------------------------------------------------------------------

#[test]
fn test_cascade_never_looks_forward() {
    let value = ResponsiveValue::Responsive(BreakpointValues {
        mobile: 1,
        tablet: None,
        desktop: Some(3),
    });
    assert_eq!(*value.get_effective(Breakpoint::Mobile), 1);
    assert_eq!(*value.get_effective(Breakpoint::Tablet), 1);
    assert_eq!(*value.get_effective(Breakpoint::Desktop), 3);
}

#[test]
fn test_set_then_get_round_trips() {
    let start = ResponsiveValue::Bare("a".to_string());
    for &bp in Breakpoint::ALL {
        let next = start.set_at_breakpoint(bp, "b".to_string());
        assert_eq!(next.get_effective(bp), "b");
        assert_eq!(start, ResponsiveValue::Bare("a".to_string()));
    }
}

#[test]
fn test_scalar_promotion() {
    let promoted = ResponsiveValue::Bare(10).set_at_breakpoint(Breakpoint::Tablet, 20);
    assert_eq!(
        promoted,
        ResponsiveValue::Responsive(BreakpointValues {
            mobile: 10,
            tablet: Some(20),
            desktop: None,
        })
    );
    assert_eq!(
        ResponsiveValue::Bare(10).set_at_breakpoint(Breakpoint::Mobile, 5),
        ResponsiveValue::Responsive(BreakpointValues::new(5))
    );
}

#[test]
fn test_unknown_breakpoint_key_rejected() {
    let result = ResponsiveValue::Bare(1).set_at_key("widescreen", 2);
    assert!(matches!(result, Err(BreakpointError::Unknown(key)) if key == "widescreen"));
    assert!(ResponsiveValue::Bare(1).set_at_key("desktop", 2).is_ok());
}

#[test]
fn test_width_to_breakpoint() {
    assert_eq!(width_to_breakpoint(375), Breakpoint::Mobile);
    assert_eq!(width_to_breakpoint(768), Breakpoint::Tablet);
    assert_eq!(width_to_breakpoint(1440), Breakpoint::Desktop);
}

// ---------------------------------------------------------------------------
// Builder output
// ---------------------------------------------------------------------------

#[test]
fn test_responsive_display_example() {
    let css = build("box-1", json!({ "display": { "mobile": "block", "desktop": "flex" } }));
    let compact: String = css.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(
        compact,
        ".box-1{display:block;}@media(min-width:1024px){.box-1{display:flex;}}"
    );
}

#[test]
fn test_border_collapse() {
    let side = json!({ "width": "2", "style": "solid", "color": "#000000" });
    let css = build(
        "box",
        json!({ "border": { "top": side, "right": side, "bottom": side, "left": side } }),
    );
    assert_eq!(css.matches("border:").count(), 1);
    for longhand in ["border-top", "border-right", "border-bottom", "border-left"] {
        assert!(!css.contains(longhand), "unexpected {longhand} in {css}");
    }
}

#[test]
fn test_border_mixed_sides_use_longhands() {
    let solid = json!({ "width": "1", "style": "solid", "color": "#cccccc" });
    let none = json!({ "width": "0", "style": "none", "color": "#000000" });
    let css = build(
        "box",
        json!({ "border": { "top": solid, "right": none, "bottom": solid, "left": none } }),
    );
    assert_eq!(
        css,
        ".box { border-top: 1px solid #cccccc; border-bottom: 1px solid #cccccc; }"
    );
}

#[test]
fn test_radius_collapse() {
    let radius = BorderRadiusValue::uniform("8", SpacingUnit::Px);
    let decls: Vec<String> = radius.declarations().iter().map(ToString::to_string).collect();
    assert_eq!(decls, vec!["border-radius: 8px;"]);

    let zero = BorderRadiusValue::uniform("0", SpacingUnit::Px);
    assert!(zero.declarations().is_empty());
}

#[test]
fn test_padding_never_collapses() {
    let padding = BoxModelValue::uniform("10", SpacingUnit::Px);
    assert_eq!(padding.css_padding(), "10px 10px 10px 10px");

    let css = build("box", json!({ "padding": "10px" }));
    assert_eq!(css, ".box { padding: 10px 10px 10px 10px; }");
}

#[test]
fn test_legacy_shapes_normalize() {
    init_tracing();
    let css = build(
        "legacy",
        json!({
            "margin": "0 auto",
            "width": "50%",
            "opacity": "80",
            "zIndex": "high",
            "border": "1px solid #ccc",
            "color": "primary.500"
        }),
    );
    assert_eq!(
        css,
        ".legacy { z-index: auto; opacity: 0.8; width: 50%; margin: 0px auto 0px auto; \
         border: 1px solid #ccc; color: #13315c; }"
    );
}

#[test]
fn test_literal_values_stay_inside_the_class_block() {
    init_tracing();
    let css = build(
        "box-1",
        json!({
            "shadow": { "preset": "custom", "custom": "none; } html { visibility: hidden" },
            "backgroundColor": "#fff; } body { display: none",
            "backgroundImage": "url(x.png); } * { color: red",
            "backgroundSize": "cover } a {",
            "color": { "type": "custom", "value": "red /* rest" },
            "opacity": 50
        }),
    );
    assert_eq!(
        css,
        ".box-1 { opacity: 0.5; background-position: center; background-repeat: no-repeat; }"
    );

    let data_uri = build(
        "box-2",
        json!({ "backgroundImage": "data:image/png;base64,AAAA", "backgroundRepeat": "repeat-x" }),
    );
    assert!(data_uri.contains("url(\"data:image/png;base64,AAAA\")"), "{data_uri}");
    assert_eq!(data_uri.matches('{').count(), 1);
    assert_eq!(data_uri.matches('}').count(), 1);
}

#[test]
fn test_unit_suffixed_sides_in_stored_objects() {
    let side = json!({ "width": "2px", "style": "solid", "color": "#000000" });
    let css = build(
        "box-1",
        json!({
            "width": { "value": "50%" },
            "padding": { "top": "10px", "right": "10px", "bottom": "10px", "left": "10px" },
            "border": { "top": side, "right": side, "bottom": side, "left": side },
            "borderRadius": {
                "topLeft": "8px", "topRight": "8px", "bottomRight": "8px", "bottomLeft": "8px"
            }
        }),
    );
    assert_eq!(
        css,
        ".box-1 { width: 50%; padding: 10px 10px 10px 10px; border: 2px solid #000000; \
         border-radius: 8px; }"
    );
}

#[test]
fn test_build_is_idempotent() {
    let props = json!({
        "display": { "mobile": "block", "tablet": "grid", "desktop": "flex" },
        "gridColumns": { "mobile": 2, "desktop": 4 },
        "justifyContent": "center",
        "shadow": "md",
        "backgroundImage": { "url": "/bg.png" }
    });
    assert_eq!(build("card", props.clone()), build("card", props));
}

#[test]
fn test_component_snapshot() {
    let css = build(
        &ClassName::for_component("card", "42").to_string(),
        json!({
            "display": { "mobile": "block", "tablet": "flex" },
            "flexDirection": { "mobile": "column", "tablet": "row" },
            "padding": "16px",
            "borderRadius": "8px",
            "backgroundColor": { "type": "theme", "value": "primary.500" },
            "color": "#ffffff"
        }),
    );
    insta::assert_snapshot!(css, @r"
    .card-42 { display: block; flex-direction: column; padding: 16px 16px 16px 16px; border-radius: 8px; background-color: #13315c; color: #ffffff; }
    @media (min-width: 768px) { .card-42 { display: flex; flex-direction: row; } }
    ");
}

#[test]
fn test_class_names_sanitized() {
    assert_eq!(ClassName::for_component("hero", "a b/c").as_str(), "hero-a-b-c");
    assert_eq!(ClassName::new("1col").as_str(), "c-1col");
    let css = build("weird name!", json!({ "display": "none" }));
    assert_eq!(css, ".weird-name- { display: none; }");
}

#[test]
fn test_compile_options_from_json() {
    let options = CompileOptions::from_json(r##"{ "colorFallback": "#000000" }"##).unwrap();
    let css = compile(
        &ClassName::new("x"),
        &PropertyBag::from_value(json!({ "color": { "type": "theme", "value": "missing.1" } })),
        &theme(),
        &options,
    );
    assert_eq!(css, ".x { color: #000000; }");
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[test]
fn test_theme_resolution() {
    let theme = theme();
    assert_eq!(theme.resolve("colors.primary.500", "#000000"), "#13315c");
    assert_eq!(theme.resolve("colors.missing.999", "#000000"), "#000000");
    assert_eq!(
        ColorToken::theme("semantic.danger").resolve(&theme, ""),
        "#dc2626"
    );
}

#[test]
fn test_color_choices() {
    let choices = theme().color_choices();
    let tokens: Vec<&str> = choices.palette.iter().map(|c| c.token.as_str()).collect();
    assert_eq!(
        tokens,
        vec!["colors.primary.100", "colors.primary.500", "colors.white"]
    );
    assert_eq!(choices.semantic.len(), 1);
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[test]
fn test_cross_breakpoint_visibility() {
    let display = ResponsiveValue::Responsive(BreakpointValues {
        mobile: Display::Block,
        tablet: None,
        desktop: Some(Display::Flex),
    });
    assert!(has_flex_in_any_breakpoint(&display));

    let props = PropertyBag::new().with_value("display", &display);
    let fields = layout_fields().visible_fields(&props);
    assert!(fields.contains(&"flexDirection"));
    assert!(fields.contains(&"justifyContent"));
    assert!(!fields.contains(&"gridColumns"));
}

#[test]
fn test_custom_field_table() {
    let props = PropertyBag::from_value(json!({ "position": { "mobile": "static", "desktop": "absolute" } }));
    let groups = [
        FieldGroup::new(
            Condition::KeywordInAnyBreakpoint {
                key: "position",
                keywords: &["absolute", "fixed"],
            },
            &["top", "left", "zIndex"],
        ),
        FieldGroup::new(Condition::Present("shadow"), &["shadowColor"]),
    ];
    assert_eq!(
        resolve(&["position", "zIndex"], &groups, &props),
        vec!["position", "zIndex", "top", "left"]
    );
}
