// MindBridge Data - MindBridge AI application data document
//
// This is the library crate containing the document model, the literal data
// catalog and the JSON emitter. The binary crate (main.rs) runs them once.

pub mod catalog;
pub mod emitter;
pub mod logging;
pub mod models;
pub mod settings;

// Re-export commonly used types for convenience
pub use catalog::assemble;
pub use emitter::{
    EmitError, emit_to_stdout, emit_to_writer, emit_with_settings, read_document, render_json,
    run, run_with_writer, serialize_and_write,
};
pub use models::RootDocument;
pub use settings::{EmitterSettings, LoggingSettings};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
