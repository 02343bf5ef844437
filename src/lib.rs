//! # breakpoint-css
//!
//! A responsive style compiler for visual page builders.
//!
//! Components carry a bag of style properties, each either a bare value or a
//! per-breakpoint object (`{ mobile, tablet?, desktop? }`). This crate
//! normalizes those values, resolves theme tokens, and compiles the bag into
//! CSS scoped to one class, with `@media (min-width: …)` blocks for the larger
//! breakpoints. A separate resolver decides which property editors to show.
//!
//! ## Core Systems
//!
//! - **[`breakpoint`]** - Ordered breakpoints, thresholds, media queries
//! - **[`responsive`]** - Responsive values: cascade, immutable per-breakpoint edits
//! - **[`value`]** - Compound value types with normalizers and CSS formatters
//! - **[`theme`]** - Dotted-path token resolution and color picker choices
//! - **[`bag`]** - Property bag with typed, normalizing accessors
//! - **[`css`]** - Output model, responsive generator, layout builder
//! - **[`visibility`]** - Declarative field-visibility table
//! - **[`config`]** - Compile options (fallbacks, preset tables)
//!
//! ```
//! use breakpoint_css::prelude::*;
//! use serde_json::json;
//!
//! let props = PropertyBag::from_value(json!({
//!     "display": { "mobile": "block", "desktop": "flex" }
//! }));
//! let css = compile(
//!     &ClassName::for_component("box", "1"),
//!     &props,
//!     &Theme::new(),
//!     &CompileOptions::default(),
//! );
//! assert_eq!(
//!     css,
//!     ".box-1 { display: block; }\n@media (min-width: 1024px) { .box-1 { display: flex; } }"
//! );
//! ```

// Foundation
pub mod breakpoint;
pub mod responsive;
pub mod value;

// Inputs
pub mod bag;
pub mod config;
pub mod theme;

// Compilation
pub mod css;
pub mod visibility;

/// Commonly used types.
pub mod prelude {
    pub use crate::bag::PropertyBag;
    pub use crate::breakpoint::{width_to_breakpoint, Breakpoint, BreakpointError};
    pub use crate::config::{CompileOptions, ConfigError};
    pub use crate::css::builder::{compile, LayoutBuilder};
    pub use crate::css::generate::generate;
    pub use crate::css::model::{ClassName, Declaration, StyleSheet};
    pub use crate::responsive::{BreakpointValues, ResponsiveValue};
    pub use crate::theme::{Theme, ThemeError};
    pub use crate::value::Normalize;
    pub use crate::visibility::{layout_fields, Condition, FieldGroup, FieldTable};
}
