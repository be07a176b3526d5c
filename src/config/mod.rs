//! Configuration models for the terminal and passenger manifests.

pub mod manifest;
pub mod terminal;

pub use manifest::{Manifest, PassengerSpec};
pub use terminal::{PriorityPolicy, TerminalConfig};
