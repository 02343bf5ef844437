//! Responsive value → per-breakpoint declarations.

use crate::css::model::{ClassName, Declaration, StyleSheet};
use crate::responsive::ResponsiveValue;

/// Push one property's declarations into `sheet`.
///
/// A bare value yields one base declaration. A responsive value yields a
/// declaration for every explicitly set breakpoint. Entries whose formatted
/// value is empty are dropped. Values are not compared across breakpoints, so
/// a tablet entry equal to mobile is still emitted.
pub fn push_responsive<T>(
    sheet: &mut StyleSheet,
    property: &str,
    value: &ResponsiveValue<T>,
    mut formatter: impl FnMut(&T) -> String,
) {
    for (breakpoint, entry) in value.explicit_entries() {
        sheet.push(breakpoint, Declaration::new(property, formatter(entry)));
    }
}

/// Like [`push_responsive`] for values that format to several declarations
/// (border and radius shorthands).
pub fn push_responsive_declarations<T>(
    sheet: &mut StyleSheet,
    value: &ResponsiveValue<T>,
    mut formatter: impl FnMut(&T) -> Vec<Declaration>,
) {
    for (breakpoint, entry) in value.explicit_entries() {
        sheet.extend(breakpoint, formatter(entry));
    }
}

/// Render a single property as CSS scoped to `class_name`.
///
/// Returns `""` if every entry formats empty.
pub fn generate<T>(
    class_name: &ClassName,
    property: &str,
    value: &ResponsiveValue<T>,
    formatter: impl FnMut(&T) -> String,
) -> String {
    let mut sheet = StyleSheet::new(class_name.clone());
    push_responsive(&mut sheet, property, value, formatter);
    sheet.to_css()
}
