//! Responsive values: one value per breakpoint with mobile-first fallback.
//!
//! A [`ResponsiveValue`] is either a bare value (applies everywhere) or an
//! object with a mandatory `mobile` entry and optional `tablet` / `desktop`
//! overrides. The effective value at a breakpoint is the nearest defined
//! entry at or below it:
//!
//! ```text
//! desktop = desktop ?? tablet ?? mobile
//! tablet  = tablet ?? mobile
//! mobile  = mobile
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::breakpoint::{Breakpoint, BreakpointError};
use crate::value::Normalize;

/// Per-breakpoint entries of a responsive value. `mobile` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakpointValues<T> {
    pub mobile: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<T>,
}

impl<T> BreakpointValues<T> {
    /// Create an object-form value with only the base entry.
    pub fn new(mobile: T) -> Self {
        Self {
            mobile,
            tablet: None,
            desktop: None,
        }
    }

    /// The explicitly defined entry at `breakpoint`, without cascading.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Mobile => Some(&self.mobile),
            Breakpoint::Tablet => self.tablet.as_ref(),
            Breakpoint::Desktop => self.desktop.as_ref(),
        }
    }
}

/// A style value that is either bare or specified per breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// Legacy/simple form: the same value at every breakpoint.
    Bare(T),
    /// Object form with a mandatory `mobile` entry.
    Responsive(BreakpointValues<T>),
}

impl<T> ResponsiveValue<T> {
    /// Effective value at `breakpoint` after mobile-first fallback.
    pub fn get_effective(&self, breakpoint: Breakpoint) -> &T {
        match self {
            ResponsiveValue::Bare(value) => value,
            ResponsiveValue::Responsive(values) => breakpoint
                .cascade()
                .iter()
                .rev()
                .find_map(|bp| values.get(*bp))
                .unwrap_or(&values.mobile),
        }
    }

    /// Returns `true` if `predicate` holds for the effective value at any breakpoint.
    pub fn any_effective(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        Breakpoint::ALL
            .iter()
            .any(|bp| predicate(self.get_effective(*bp)))
    }

    /// Returns `true` if this value is in object form.
    pub fn is_responsive(&self) -> bool {
        matches!(self, ResponsiveValue::Responsive(_))
    }

    /// Explicit entries in breakpoint order: one for a bare value, up to
    /// three for an object-form value.
    pub fn explicit_entries(&self) -> Vec<(Breakpoint, &T)> {
        match self {
            ResponsiveValue::Bare(value) => vec![(Breakpoint::Mobile, value)],
            ResponsiveValue::Responsive(values) => Breakpoint::ALL
                .iter()
                .filter_map(|bp| values.get(*bp).map(|v| (*bp, v)))
                .collect(),
        }
    }

    /// Apply `f` to every stored entry, preserving the shape.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ResponsiveValue<U> {
        match self {
            ResponsiveValue::Bare(value) => ResponsiveValue::Bare(f(value)),
            ResponsiveValue::Responsive(values) => ResponsiveValue::Responsive(BreakpointValues {
                mobile: f(&values.mobile),
                tablet: values.tablet.as_ref().map(&mut f),
                desktop: values.desktop.as_ref().map(&mut f),
            }),
        }
    }
}

impl<T: Clone> ResponsiveValue<T> {
    /// Return a copy with `value` stored at `breakpoint`. Never mutates `self`.
    ///
    /// A bare value is promoted to object form, keeping the old value as the
    /// `mobile` entry. Setting `mobile` on a bare value yields `{ mobile: value }`.
    pub fn set_at_breakpoint(&self, breakpoint: Breakpoint, value: T) -> Self {
        let mut values = match self {
            ResponsiveValue::Bare(_) if breakpoint == Breakpoint::Mobile => {
                return ResponsiveValue::Responsive(BreakpointValues::new(value));
            }
            ResponsiveValue::Bare(old) => BreakpointValues::new(old.clone()),
            ResponsiveValue::Responsive(values) => values.clone(),
        };
        match breakpoint {
            Breakpoint::Mobile => values.mobile = value,
            Breakpoint::Tablet => values.tablet = Some(value),
            Breakpoint::Desktop => values.desktop = Some(value),
        }
        ResponsiveValue::Responsive(values)
    }

    /// Like [`set_at_breakpoint`](Self::set_at_breakpoint), keyed by the
    /// breakpoint's string name. Unknown keys are rejected.
    pub fn set_at_key(&self, key: &str, value: T) -> Result<Self, BreakpointError> {
        let breakpoint = key.parse::<Breakpoint>()?;
        Ok(self.set_at_breakpoint(breakpoint, value))
    }
}

impl<T: Default> Default for ResponsiveValue<T> {
    fn default() -> Self {
        ResponsiveValue::Bare(T::default())
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Bare(value)
    }
}

/// Returns `true` if `raw` is an object carrying at least one breakpoint key.
pub fn is_responsive_object(raw: &Value) -> bool {
    raw.as_object().is_some_and(|map| {
        Breakpoint::ALL
            .iter()
            .any(|bp| map.contains_key(bp.key()))
    })
}

impl<T: Normalize> Normalize for ResponsiveValue<T> {
    fn normalize(raw: &Value) -> Self {
        match raw {
            Value::Object(map) if is_responsive_object(raw) => {
                ResponsiveValue::Responsive(normalize_entries(map))
            }
            other => ResponsiveValue::Bare(T::normalize(other)),
        }
    }
}

fn normalize_entries<T: Normalize>(map: &Map<String, Value>) -> BreakpointValues<T> {
    for key in map.keys() {
        if key.parse::<Breakpoint>().is_err() {
            tracing::warn!(key = %key, "dropping unknown breakpoint key from responsive value");
        }
    }

    let entry = |bp: Breakpoint| map.get(bp.key()).filter(|v| !v.is_null());
    let mobile = match entry(Breakpoint::Mobile) {
        Some(raw) => T::normalize(raw),
        None => {
            tracing::debug!("responsive value without mobile entry, using default");
            T::normalize(&Value::Null)
        }
    };

    BreakpointValues {
        mobile,
        tablet: entry(Breakpoint::Tablet).map(T::normalize),
        desktop: entry(Breakpoint::Desktop).map(T::normalize),
    }
}
