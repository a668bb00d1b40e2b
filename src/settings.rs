use camino::Utf8PathBuf;

/// Fixed relative path of the emitted document
pub const DEFAULT_OUTPUT_FILE: &str = "flask_mental_wellness_app_data.json";

/// Banner printed to stdout ahead of the document
pub const DEFAULT_BANNER: &str = "Flask Mental Wellness App Data Structure Created";

/// Width of the `=` separator line under the banner
pub const DEFAULT_SEPARATOR_WIDTH: usize = 50;

/// Settings for a single emitter run.
///
/// There is no settings file, CLI or environment lookup. `main` uses
/// [`EmitterSettings::default`]; tests override fields such as `output_path`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterSettings {
    pub output_path: Utf8PathBuf,
    pub banner: String,
    pub separator_width: usize,
    pub logging: LoggingSettings,
}

/// Logging configuration consumed by [`crate::logging::setup_logging`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory for rotating log files. `None` disables file logging so the
    /// JSON document stays the only file written.
    pub log_dir: Option<Utf8PathBuf>,
    pub log_prefix: String,
    pub debug_mode: bool,
    /// Console output always goes to stderr; stdout carries the document.
    pub console_output: bool,
}

impl Default for EmitterSettings {
    fn default() -> Self {
        Self {
            output_path: Utf8PathBuf::from(DEFAULT_OUTPUT_FILE),
            banner: DEFAULT_BANNER.to_string(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_prefix: "mindbridge-data".to_string(),
            debug_mode: false,
            console_output: true,
        }
    }
}

impl EmitterSettings {
    /// Default settings writing to a different output path
    pub fn with_output_path<P: Into<Utf8PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// The separator line printed under the banner
    pub fn separator(&self) -> String {
        "=".repeat(self.separator_width)
    }
}

impl LoggingSettings {
    /// Level used when building the env filter
    pub fn level(&self) -> &'static str {
        if self.debug_mode { "debug" } else { "warn" }
    }
}
