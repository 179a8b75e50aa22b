/*
[INPUT]:  Public API exports for todo-list-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point shared by the binary and tests
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod session;

// Re-export main types for convenience
pub use config::{AppConfig, StartupMode};
pub use session::{Session, StartOutcome};
