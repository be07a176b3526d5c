//! Builders to construct scheduler components from configuration.

pub mod terminal_builder;

pub use terminal_builder::{build_action, build_scheduler, build_terminal, load_manifest};
