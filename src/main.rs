//! MindBridge Data - emits the MindBridge AI application data document
//!
//! Main entry point for the command-line program.
//!
//! # Execution Flow
//!
//! 1. Initialize logging (stderr only by default)
//! 2. Assemble the data document from literal values
//! 3. Write it as 2-space indented JSON to `flask_mental_wellness_app_data.json`
//! 4. Print a banner, a separator line and the same JSON to stdout
//!
//! Takes no arguments and reads no environment variables. A failed write
//! exits with a non-zero status and the error on stderr.

use anyhow::Result;
use mindbridge_data::{APP_NAME, EmitterSettings, VERSION};

fn main() -> Result<()> {
    let settings = EmitterSettings::default();

    // Hold the guard so buffered file logs are flushed on exit
    let _log_guard = mindbridge_data::logging::setup_logging(&settings.logging)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // On failure anyhow reports the error chain on stderr and exits with status 1
    let document = mindbridge_data::run(&settings)?;

    tracing::info!(
        "Emitted {} to {}",
        document.app_info.name,
        settings.output_path
    );

    Ok(())
}
