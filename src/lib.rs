//! aether - core of a minimal IDE shell
//!
//! Modules:
//! - kernel: headless state (directory tree, icons, commands, store) and the
//!   file/settings services it talks to
//! - app: the `Shell` that runs kernel effects against a `UiHost`

pub mod app;
pub mod kernel;
