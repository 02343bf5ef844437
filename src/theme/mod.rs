//! Theme tokens: dotted-path resolution and color picker choices.

pub mod table;
pub mod palette;

pub use palette::{ColorChoice, ColorChoices};
pub use table::{Theme, ThemeError};
