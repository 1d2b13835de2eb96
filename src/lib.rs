// Library exports for testing and potential library use
//
// The binary in `main.rs` only wires these modules together: resolve the
// character, build a `Session`, optionally run the preview window, then
// write the text report.

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod canvas;
pub mod character;
pub mod cli;
pub mod debug;
pub mod geometry;
pub mod layout;
pub mod names;
pub mod paint;
pub mod report;
pub mod session;
pub mod view_state;

// Re-export the member crates under short names
pub use fc_char_config as config;
pub use fc_char_fonts as fonts;
