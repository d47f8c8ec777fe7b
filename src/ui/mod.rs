//! Presentation helpers shared by the library widget and the CLI

pub mod theme;
pub mod widgets;
