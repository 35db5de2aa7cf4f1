//! Shared CLI argument types

mod common;
mod global;

pub use common::{KeySource, OutputFormat};
pub use global::GlobalOptions;
