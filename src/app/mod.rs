//! Application layer: ties the kernel to its collaborators.

mod headless;
mod shell;

pub use headless::HeadlessHost;
pub use shell::Shell;
