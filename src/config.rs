//! Split configuration, constants, and validation.

use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};

/// Fixed prefix for batch file names so downstream tooling can identify
/// split artifacts.
pub const FILE_PREFIX: &str = "nifi_xmlsplitter";

/// Fixed suffix for batch file names.
pub const FILE_SUFFIX: &str = "tmp.xml";

/// Separator written after the header and before the footer of every batch.
pub const LINE_SEPARATOR: &str = "\n";

/// Default nesting depth at which to split (the root's children).
pub const DEFAULT_SPLIT_DEPTH: usize = 1;

/// Default number of depth-level elements per batch.
pub const DEFAULT_SPLIT_COUNT: usize = 10;

/// Configuration for one split operation.
///
/// A depth of 1 splits the root's children, a depth of 2 the root's
/// grandchildren, and so forth. `header` and `footer` are opaque strings
/// inserted verbatim at batch boundaries — usually matching parent opening
/// and closing tags; the splitter does not validate that their
/// concatenation with batch content is well-formed.
///
/// # Examples
/// ```
/// use xml_splitter::SplitConfig;
///
/// let config = SplitConfig::new(1, 10)
///     .unwrap()
///     .with_header("<root>")
///     .with_footer("</root>");
/// assert_eq!(config.split_depth, 1);
///
/// assert!(SplitConfig::new(0, 10).is_err());
/// assert!(SplitConfig::new(1, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Nesting depth at which to split (root's children = 1).
    pub split_depth: usize,

    /// Number of depth-level elements per output batch.
    pub split_count: usize,

    /// Optional text prepended to every batch, followed by a line separator.
    pub header: Option<String>,

    /// Optional text appended to every batch, preceded by a line separator.
    pub footer: Option<String>,

    /// Optional directory for batch files. Falls back to the platform
    /// temp dir when unset or nonexistent.
    pub work_dir: Option<PathBuf>,
}

impl SplitConfig {
    /// Create a configuration, rejecting non-positive depth or count.
    pub fn new(split_depth: usize, split_count: usize) -> Result<Self> {
        if split_depth == 0 {
            return Err(SplitterError::InvalidDepth(split_depth));
        }
        if split_count == 0 {
            return Err(SplitterError::InvalidCount(split_count));
        }
        Ok(Self {
            split_depth,
            split_count,
            header: None,
            footer: None,
            work_dir: None,
        })
    }

    /// Set the header text.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer text.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the working directory for batch files.
    #[must_use]
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Resolve the directory batch files are created in.
    ///
    /// Returns the configured work dir if it exists, otherwise the
    /// platform default temp location.
    #[must_use]
    pub fn resolve_work_dir(&self) -> PathBuf {
        match &self.work_dir {
            Some(dir) if dir.is_dir() => dir.clone(),
            Some(dir) => {
                tracing::warn!(
                    dir = %dir.display(),
                    "configured work dir does not exist, falling back to the temp dir"
                );
                std::env::temp_dir()
            }
            None => std::env::temp_dir(),
        }
    }
}

/// Check whether a file name follows the split-artifact naming convention.
///
/// # Examples
/// ```
/// use xml_splitter::config::is_split_artifact;
/// use std::path::Path;
///
/// assert!(is_split_artifact(Path::new("/tmp/nifi_xmlsplitterAb3ftmp.xml")));
/// assert!(!is_split_artifact(Path::new("/tmp/other.xml")));
/// ```
#[must_use]
pub fn is_split_artifact(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(FILE_PREFIX) && n.ends_with(FILE_SUFFIX))
}
