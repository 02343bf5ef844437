//! CSS output: declaration model, responsive generator, layout builder.

pub mod model;
pub mod generate;
pub mod builder;
