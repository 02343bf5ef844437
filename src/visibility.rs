//! Field visibility: which property editors apply to a component.
//!
//! Visibility is a declarative table of `{ condition, fields }` groups,
//! evaluated against the component's property bag. Layout conditions look at
//! every breakpoint's effective value, so a field stays visible while editing
//! mobile if a larger breakpoint needs it.

use crate::bag::{keys, PropertyBag};
use crate::responsive::ResponsiveValue;
use crate::value::{BackgroundImage, Display, Position};

/// When a field group is shown.
#[derive(Debug, Clone)]
pub enum Condition<'a> {
    Always,
    /// `display` is `flex` / `inline-flex` at any breakpoint.
    FlexInAnyBreakpoint,
    /// `display` is `grid` / `inline-grid` at any breakpoint.
    GridInAnyBreakpoint,
    /// `position` is anything but `static` at any breakpoint.
    PositionedInAnyBreakpoint,
    /// The property is set (non-null).
    Present(&'a str),
    /// The property's effective keyword at any breakpoint is one of `keywords`
    /// (compared case-insensitively).
    KeywordInAnyBreakpoint {
        key: &'a str,
        keywords: &'a [&'a str],
    },
    /// The image property has a source at any breakpoint.
    ImageInAnyBreakpoint(&'a str),
    Not(Box<Condition<'a>>),
    All(Vec<Condition<'a>>),
    Any(Vec<Condition<'a>>),
}

impl Condition<'_> {
    pub fn evaluate(&self, props: &PropertyBag) -> bool {
        match self {
            Condition::Always => true,
            Condition::FlexInAnyBreakpoint => props.has_flex_in_any_breakpoint(),
            Condition::GridInAnyBreakpoint => props.has_grid_in_any_breakpoint(),
            Condition::PositionedInAnyBreakpoint => props
                .get::<Position>(keys::POSITION)
                .is_some_and(|position| is_positioned_in_any_breakpoint(&position)),
            Condition::Present(key) => props.contains(key),
            Condition::KeywordInAnyBreakpoint { key, keywords } => props
                .get::<String>(key)
                .is_some_and(|value| {
                    value.any_effective(|current| {
                        let current = current.trim();
                        keywords.iter().any(|k| current.eq_ignore_ascii_case(k))
                    })
                }),
            Condition::Not(inner) => !inner.evaluate(props),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(props)),
            Condition::ImageInAnyBreakpoint(key) => props
                .get::<BackgroundImage>(key)
                .is_some_and(|image| image.any_effective(|i| !i.is_empty())),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(props)),
        }
    }
}

/// A set of fields shown together when `condition` holds.
#[derive(Debug, Clone)]
pub struct FieldGroup<'a> {
    pub condition: Condition<'a>,
    pub fields: &'a [&'a str],
}

impl<'a> FieldGroup<'a> {
    pub fn new(condition: Condition<'a>, fields: &'a [&'a str]) -> Self {
        Self { condition, fields }
    }
}

/// Base fields plus conditional groups.
#[derive(Debug, Clone)]
pub struct FieldTable<'a> {
    pub base: &'a [&'a str],
    pub groups: Vec<FieldGroup<'a>>,
}

impl<'a> FieldTable<'a> {
    pub fn new(base: &'a [&'a str], groups: Vec<FieldGroup<'a>>) -> Self {
        Self { base, groups }
    }

    /// Visible fields for `props`. See [`resolve`].
    pub fn visible_fields(&self, props: &PropertyBag) -> Vec<&'a str> {
        resolve(self.base, &self.groups, props)
    }
}

/// Base fields, then each group's fields whose condition holds.
///
/// Order is preserved and a field listed twice appears once, at its first
/// position.
pub fn resolve<'a>(base: &[&'a str], groups: &[FieldGroup<'a>], props: &PropertyBag) -> Vec<&'a str> {
    let mut visible: Vec<&'a str> = Vec::new();
    let mut add = |fields: &[&'a str]| {
        for &field in fields {
            if !visible.contains(&field) {
                visible.push(field);
            }
        }
    };

    add(base);
    for group in groups {
        if group.condition.evaluate(props) {
            add(group.fields);
        }
    }
    visible
}

/// Returns `true` if `display` is `flex` / `inline-flex` at any breakpoint.
pub fn has_flex_in_any_breakpoint(display: &ResponsiveValue<Display>) -> bool {
    display.any_effective(|d| d.is_flex())
}

/// Returns `true` if `display` is `grid` / `inline-grid` at any breakpoint.
pub fn has_grid_in_any_breakpoint(display: &ResponsiveValue<Display>) -> bool {
    display.any_effective(|d| d.is_grid())
}

const LAYOUT_BASE: &[&str] = &[
    keys::DISPLAY,
    keys::POSITION,
    keys::OPACITY,
    keys::OVERFLOW,
    keys::WIDTH,
    keys::HEIGHT,
    keys::MIN_WIDTH,
    keys::MAX_WIDTH,
    keys::MIN_HEIGHT,
    keys::MAX_HEIGHT,
    keys::PADDING,
    keys::MARGIN,
    keys::BORDER,
    keys::BORDER_RADIUS,
    keys::SHADOW,
    keys::BACKGROUND_COLOR,
    keys::BACKGROUND_IMAGE,
];

const FLEX_FIELDS: &[&str] = &[
    keys::FLEX_DIRECTION,
    keys::JUSTIFY_CONTENT,
    keys::ALIGN_ITEMS,
    keys::FLEX_WRAP,
    keys::GAP,
];

const GRID_FIELDS: &[&str] = &[keys::GRID_COLUMNS, keys::GAP, keys::ALIGN_ITEMS];

const POSITIONED_FIELDS: &[&str] = &[keys::Z_INDEX];

const BACKGROUND_IMAGE_FIELDS: &[&str] = &[
    keys::BACKGROUND_SIZE,
    keys::BACKGROUND_POSITION,
    keys::BACKGROUND_REPEAT,
];

/// The layout editor's field table.
pub fn layout_fields() -> FieldTable<'static> {
    FieldTable::new(
        LAYOUT_BASE,
        vec![
            FieldGroup::new(Condition::FlexInAnyBreakpoint, FLEX_FIELDS),
            FieldGroup::new(Condition::GridInAnyBreakpoint, GRID_FIELDS),
            FieldGroup::new(Condition::PositionedInAnyBreakpoint, POSITIONED_FIELDS),
            FieldGroup::new(
                Condition::ImageInAnyBreakpoint(keys::BACKGROUND_IMAGE),
                BACKGROUND_IMAGE_FIELDS,
            ),
        ],
    )
}

/// Returns `true` if the effective position is non-static at any breakpoint.
pub fn is_positioned_in_any_breakpoint(position: &ResponsiveValue<Position>) -> bool {
    position.any_effective(|p| *p != Position::Static)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::responsive::BreakpointValues;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> PropertyBag {
        PropertyBag::from_value(value)
    }

    // ── Display helpers ──────────────────────────────────────────────

    #[test]
    fn flex_at_desktop_only() {
        let display = ResponsiveValue::Responsive(BreakpointValues {
            mobile: Display::Block,
            tablet: None,
            desktop: Some(Display::Flex),
        });
        assert!(has_flex_in_any_breakpoint(&display));
        assert!(!has_grid_in_any_breakpoint(&display));
        assert!(!display.get_effective(Breakpoint::Mobile).is_flex());
    }

    #[test]
    fn bare_display() {
        assert!(has_grid_in_any_breakpoint(&ResponsiveValue::Bare(Display::InlineGrid)));
        assert!(!has_flex_in_any_breakpoint(&ResponsiveValue::Bare(Display::None)));
    }

    // ── resolve ──────────────────────────────────────────────────────

    #[test]
    fn flex_fields_visible_from_any_breakpoint() {
        let props = bag(json!({ "display": { "mobile": "block", "desktop": "flex" } }));
        let fields = layout_fields().visible_fields(&props);
        for field in FLEX_FIELDS {
            assert!(fields.contains(field), "missing {field}");
        }
        assert!(!fields.contains(&keys::GRID_COLUMNS));
    }

    #[test]
    fn shared_fields_appear_once() {
        let props = bag(json!({ "display": { "mobile": "flex", "tablet": "grid" } }));
        let fields = layout_fields().visible_fields(&props);
        assert_eq!(fields.iter().filter(|f| **f == keys::GAP).count(), 1);
        assert_eq!(fields.iter().filter(|f| **f == keys::ALIGN_ITEMS).count(), 1);
        assert!(fields.contains(&keys::GRID_COLUMNS));
    }

    #[test]
    fn base_only_for_block() {
        let props = bag(json!({ "display": "block" }));
        assert_eq!(layout_fields().visible_fields(&props), LAYOUT_BASE.to_vec());
    }

    #[test]
    fn positioned_shows_z_index() {
        let fields = layout_fields();
        let static_props = bag(json!({ "position": "static" }));
        assert!(!fields.visible_fields(&static_props).contains(&keys::Z_INDEX));

        let sticky_later = bag(json!({ "position": { "mobile": "static", "tablet": "Sticky" } }));
        assert!(fields.visible_fields(&sticky_later).contains(&keys::Z_INDEX));

        let unknown = bag(json!({ "position": "floating" }));
        assert!(!fields.visible_fields(&unknown).contains(&keys::Z_INDEX));
    }

    #[test]
    fn background_image_group() {
        let fields = layout_fields();
        let with_image = bag(json!({ "backgroundImage": "/hero.png" }));
        assert!(fields.visible_fields(&with_image).contains(&keys::BACKGROUND_SIZE));
        let blank = bag(json!({ "backgroundImage": "" }));
        assert!(!fields.visible_fields(&blank).contains(&keys::BACKGROUND_SIZE));

        let media_at_desktop = bag(json!({
            "backgroundImage": { "mobile": "", "desktop": { "url": "/wide.png" } }
        }));
        assert!(fields.visible_fields(&media_at_desktop).contains(&keys::BACKGROUND_REPEAT));
    }

    #[test]
    fn combinators() {
        let props = bag(json!({ "gap": "4px" }));
        let groups = [
            FieldGroup::new(
                Condition::All(vec![
                    Condition::Present(keys::GAP),
                    Condition::Not(Box::new(Condition::FlexInAnyBreakpoint)),
                ]),
                &["gapWarning"],
            ),
            FieldGroup::new(
                Condition::Any(vec![Condition::GridInAnyBreakpoint, Condition::Always]),
                &["a", "gapWarning"],
            ),
        ];
        assert_eq!(resolve(&["a"], &groups, &props), vec!["a", "gapWarning"]);
    }

    #[test]
    fn positioned_helper() {
        let position = ResponsiveValue::Bare(Position::Static).set_at_breakpoint(Breakpoint::Desktop, Position::Fixed);
        assert!(is_positioned_in_any_breakpoint(&position));
        assert!(!is_positioned_in_any_breakpoint(&ResponsiveValue::Bare(Position::Static)));
    }
}
