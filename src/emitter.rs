use crate::catalog::assemble;
use crate::models::RootDocument;
use crate::settings::EmitterSettings;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File};
use std::io::{self, Write};
use thiserror::Error;

/// Errors that can occur while emitting the data document
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Render the document as 2-space indented JSON.
///
/// Both the file and stdout paths use this rendering, so their contents match
/// byte for byte. No trailing newline.
pub fn render_json(doc: &RootDocument) -> Result<String, EmitError> {
    serde_json::to_string_pretty(doc).map_err(EmitError::Serialize)
}

/// Write the document as indented JSON to `path`, creating or truncating it.
///
/// Write failures are returned to the caller as [`EmitError::Write`]; there is
/// no retry.
pub fn serialize_and_write<P: AsRef<Utf8Path>>(
    doc: &RootDocument,
    path: P,
) -> Result<(), EmitError> {
    let path = path.as_ref();
    let json = render_json(doc)?;

    let write_err = |source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    };

    // The handle is closed when it goes out of scope, on success or error
    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::info!(path = %path, bytes = json.len(), "Wrote data document");
    Ok(())
}

/// Write banner, separator and document to `writer`
pub fn emit_to_writer_with<W: Write>(
    doc: &RootDocument,
    writer: &mut W,
    banner: &str,
    separator: &str,
) -> Result<(), EmitError> {
    let json = render_json(doc)?;

    writeln!(writer, "{}", banner)?;
    writeln!(writer, "{}", separator)?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;

    Ok(())
}

/// Write the banner and separator configured in `settings`, then the document
pub fn emit_with_settings<W: Write>(
    doc: &RootDocument,
    writer: &mut W,
    settings: &EmitterSettings,
) -> Result<(), EmitError> {
    emit_to_writer_with(doc, writer, &settings.banner, &settings.separator())
}

/// Write the default banner, separator and document to `writer`
pub fn emit_to_writer<W: Write>(doc: &RootDocument, writer: &mut W) -> Result<(), EmitError> {
    emit_with_settings(doc, writer, &EmitterSettings::default())
}

/// Print the default banner, separator and document to standard output
pub fn emit_to_stdout(doc: &RootDocument) -> Result<(), EmitError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit_to_writer(doc, &mut handle)
}

/// Read a previously written document back from `path`.
pub fn read_document<P: AsRef<Utf8Path>>(path: P) -> Result<RootDocument, EmitError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| EmitError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| EmitError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Assemble the document, write it to the configured path, then print it to
/// standard output.
pub fn run(settings: &EmitterSettings) -> anyhow::Result<RootDocument> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(settings, &mut handle)
}

/// Assemble the document, write it to the configured path, then print it to
/// `writer`.
///
/// The steps run strictly in that order; a file write failure stops the run
/// before anything is printed.
pub fn run_with_writer<W: Write>(
    settings: &EmitterSettings,
    writer: &mut W,
) -> anyhow::Result<RootDocument> {
    let document = assemble();
    tracing::info!("Assembled data document for {}", document.app_info.name);

    serialize_and_write(&document, &settings.output_path)
        .with_context(|| format!("Failed to save data document to {}", settings.output_path))?;

    emit_with_settings(&document, writer, settings).context("Failed to print data document")?;

    Ok(document)
}
