//! Run the sort: acquire, classify, render, persist.

use std::fmt::Write as _;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::SortConfig;
use crate::files::{self, ChangelogFiles};
use crate::render::{Header, render};
use crate::sort::{SortedDocument, classify};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Report {
    /// Where the sorted changelog was written
    pub output: PathBuf,

    /// What went into it
    pub document: SortedDocument,
}

/// Sort the configured changelog and write the result, stamped with the
/// current local time.
pub fn execute(config: &SortConfig) -> Result<Report, Error> {
    let generated_at = timestamp(&config.timestamp_format)?;
    execute_at(config, &generated_at)
}

/// Like [`execute`], with the "Generated at" text supplied by the caller.
pub fn execute_at(config: &SortConfig, generated_at: &str) -> Result<Report, Error> {
    let files = ChangelogFiles::from_config(config);
    let (document, lines) = sort_changelog(config, &files, generated_at)?;

    let output = files.write_output(&config.version, &lines)?;
    tracing::info!(path = %output.display(), "changelog generated");

    Ok(Report { output, document })
}

/// Read, classify and render without writing anything.
///
/// Fails with [`Error::InputNotFound`] or [`Error::EmptyResult`] when there is
/// nothing to sort.
pub fn sort_changelog(
    config: &SortConfig,
    files: &ChangelogFiles,
    generated_at: &str,
) -> Result<(SortedDocument, Vec<String>), Error> {
    let version = config.version.as_str();
    let path = files.input_path(version);

    let Some(raw) = files.read_input(version)? else {
        tracing::warn!(
            version,
            path = %path.display(),
            "did not find changelog for version"
        );
        return Err(Error::InputNotFound {
            version: version.to_string(),
            path,
        });
    };
    tracing::info!(version, path = %path.display(), "found changelog to sort");

    let document = classify(&raw);
    if document.is_empty() {
        tracing::warn!(path = %path.display(), "changelog has no entries");
        return Err(Error::EmptyResult { path });
    }
    for (category, entries) in document.sections() {
        tracing::info!("sorted {} {}", entries.len(), category.title().to_lowercase());
    }

    let header = Header {
        product: &config.product,
        version,
        generated_at,
    };
    let lines = render(&document, &header, config.separator_width);
    Ok((document, lines))
}

/// Current local time in the given strftime format.
pub fn timestamp(format: &str) -> Result<String, Error> {
    let mut out = String::new();
    write!(out, "{}", chrono::Local::now().format(format)).map_err(|_| Error::Timestamp {
        format: format.to_string(),
    })?;
    Ok(out)
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors that end a run. No output file exists after any of them except
/// where a write failed part-way.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no changelog for version {version} at '{}'", path.display())]
    InputNotFound { version: String, path: PathBuf },

    #[error("changelog '{}' has no entries", path.display())]
    EmptyResult { path: PathBuf },

    #[error(transparent)]
    Files(#[from] files::Error),

    #[error("invalid timestamp format '{format}'")]
    Timestamp { format: String },
}
