//! Report adapters - human-readable output for the CLI.

mod text;

pub use text::{render_consistency, render_ranking};
