//! Breakpoint model: the ordered viewport tiers and the mobile-first cascade.
//!
//! There are exactly three breakpoints, ordered ascending by minimum width:
//!
//! ```text
//! mobile   0px     (implicit, the base rule)
//! tablet   768px   @media (min-width: 768px)
//! desktop  1024px  @media (min-width: 1024px)
//! ```

use std::fmt;
use std::str::FromStr;

/// Errors raised at the breakpoint boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreakpointError {
    #[error("unknown breakpoint '{0}': expected mobile, tablet or desktop")]
    Unknown(String),
}

/// A viewport tier used for responsive cascading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Breakpoint {
    /// Base tier. Rules for it are emitted without a media query.
    #[default]
    Mobile,
    /// Viewports at least 768px wide.
    Tablet,
    /// Viewports at least 1024px wide.
    Desktop,
}

impl Breakpoint {
    /// All breakpoints in ascending width order.
    pub const ALL: &'static [Breakpoint] =
        &[Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    /// The key used in responsive objects and the authoring UI.
    pub fn key(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    /// Minimum viewport width in pixels at which this tier applies.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Mobile => 0,
            Breakpoint::Tablet => 768,
            Breakpoint::Desktop => 1024,
        }
    }

    /// Position of this tier in [`Breakpoint::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The media query condition for this tier, or `None` for the base tier.
    pub fn media_query(self) -> Option<String> {
        match self {
            Breakpoint::Mobile => None,
            other => Some(format!("(min-width: {}px)", other.min_width())),
        }
    }

    /// Every tier at or below this one, lowest first.
    ///
    /// These are the tiers whose values may cascade into this one.
    pub fn cascade(self) -> &'static [Breakpoint] {
        &Self::ALL[..=self.index()]
    }
}

/// Map a viewport width in pixels to the tier that applies at it.
pub fn width_to_breakpoint(width: u32) -> Breakpoint {
    Breakpoint::ALL
        .iter()
        .rev()
        .copied()
        .find(|bp| width >= bp.min_width())
        .unwrap_or_default()
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Breakpoint {
    type Err = BreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Breakpoint::Mobile),
            "tablet" => Ok(Breakpoint::Tablet),
            "desktop" => Ok(Breakpoint::Desktop),
            other => Err(BreakpointError::Unknown(other.to_string())),
        }
    }
}

impl serde::Serialize for Breakpoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> serde::Deserialize<'de> for Breakpoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = <String as serde::Deserialize>::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
