pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod estimate;
pub mod git;
pub mod glyph;
pub mod intensity;
pub mod layout;
pub mod model;
pub mod paint;
pub mod plan;
pub mod util;
