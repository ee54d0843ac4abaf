//! changesort: sort a versioned plain-text changelog by kind of change.
//!
//! Each non-blank line of the raw changelog is classified by its leading
//! marker (`+` addition, `-` removal, `%` change, `$` fix, anything else
//! other), sorted within its category, and written out as a titled document
//! with one section per category.
//!
//! # Architecture
//!
//! - **Category**: the five kinds of entry and their markers
//! - **Sort**: classify lines into a [`SortedDocument`]
//! - **Render**: lay the document out as output lines
//! - **Files**: read the raw changelog, replace the sorted one
//! - **Config**: TOML settings with defaults
//! - **Execute**: the whole run, start to finish

mod category;
mod config;
mod execute;
mod files;
mod render;
mod sort;
mod template;

pub use category::Category;
pub use config::{DEFAULT_CONFIG_FILE, Error as ConfigError, SortConfig};
pub use execute::{Error, Report, execute, execute_at, sort_changelog, timestamp};
pub use files::{ChangelogFiles, Error as FilesError, write_lines};
pub use render::{DEFAULT_SEPARATOR_WIDTH, Header, render};
pub use sort::{SortedDocument, classify, classify_line, unescape_entities};
pub use template::config_template;
