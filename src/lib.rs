// src/lib.rs - Library interface shared by the demo binaries

pub mod bookshelf;
pub mod constants;
pub mod error;
pub mod font_config;
pub mod graph;
pub mod plot_framework;

pub use error::{DemoError, DemoResult};

// Crate version reported by the command-line tools.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
