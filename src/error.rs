//! Error types for the splitter.
//!
//! One `SplitterError` enum covers the three failure classes: malformed
//! input (the parser cannot continue), IO failures on a batch file, and
//! configuration rejected before the pass starts.

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The input byte stream is not well-formed XML.
    #[error("malformed XML input: {0}")]
    MalformedInput(#[from] quick_xml::Error),

    /// The input ended while an element subtree was still being copied.
    #[error("unexpected end of input inside <{tag}> subtree")]
    UnexpectedEof { tag: String },

    /// The input ended with elements still open outside any copied subtree.
    #[error("unexpected end of input: {open} element(s) still open")]
    TruncatedDocument { open: usize },

    /// A batch file could not be created, written, flushed, or closed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Split depth must be at least 1 (the root's children).
    #[error("invalid split depth: {0}. Depth must be a positive integer")]
    InvalidDepth(usize),

    /// Split count must be at least 1 element per batch.
    #[error("invalid split count: {0}. Count must be a positive integer")]
    InvalidCount(usize),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_depth_display() {
        let err = SplitterError::InvalidDepth(0);
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains("Depth"));
    }

    #[test]
    fn test_unexpected_eof_display() {
        let err = SplitterError::UnexpectedEof {
            tag: "item".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input inside <item> subtree"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SplitterError::from(io);
        assert!(matches!(err, SplitterError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
