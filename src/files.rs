//! Reading the raw changelog and writing the sorted one.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::SortConfig;

/// Placeholder replaced by the version in file name patterns.
pub const VERSION_PLACEHOLDER: &str = "{version}";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Where changelogs are read from and written to.
#[derive(Debug, Clone)]
pub struct ChangelogFiles {
    input_dir: PathBuf,
    output_dir: PathBuf,
    input_pattern: String,
    output_pattern: String,
}

impl ChangelogFiles {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        input_pattern: impl Into<String>,
        output_pattern: impl Into<String>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            input_pattern: input_pattern.into(),
            output_pattern: output_pattern.into(),
        }
    }

    pub fn from_config(config: &SortConfig) -> Self {
        Self::new(
            &config.input_dir,
            &config.output_dir,
            &config.input_pattern,
            &config.output_pattern,
        )
    }

    /// Path of the raw changelog for `version`.
    pub fn input_path(&self, version: &str) -> PathBuf {
        self.input_dir.join(expand(&self.input_pattern, version))
    }

    /// Path of the sorted changelog for `version`.
    pub fn output_path(&self, version: &str) -> PathBuf {
        self.output_dir.join(expand(&self.output_pattern, version))
    }

    /// Read the raw changelog for `version` line by line.
    ///
    /// Returns `Ok(None)` if there is no such file. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn read_input(&self, version: &str) -> Result<Option<Vec<String>>, Error> {
        let path = self.input_path(version);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Read { path, source: e }),
        };

        let content = String::from_utf8_lossy(&bytes);
        Ok(Some(content.lines().map(str::to_string).collect()))
    }

    /// Replace the sorted changelog for `version` with `lines`.
    ///
    /// Any existing file is removed first. Each line is written followed by
    /// the platform line terminator. Returns the path written.
    pub fn write_output(&self, version: &str, lines: &[String]) -> Result<PathBuf, Error> {
        let path = self.output_path(version);

        if remove_existing(&path)? {
            tracing::info!(path = %path.display(), "removing existing sorted changelog");
        }

        let file = File::create(&path).map_err(|e| Error::Create {
            path: path.clone(),
            source: e,
        })?;
        write_lines(BufWriter::new(file), lines).map_err(|e| Error::Write {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }
}

/// Write each line followed by [`LINE_ENDING`].
pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()
}

fn expand(pattern: &str, version: &str) -> String {
    pattern.replace(VERSION_PLACEHOLDER, version)
}

/// Returns whether a file was there to remove.
fn remove_existing(path: &Path) -> Result<bool, Error> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Remove {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Errors from changelog file operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read changelog '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove existing changelog '{}'", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
