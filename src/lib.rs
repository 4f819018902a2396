//! xml-splitter - Split large XML files into chunks by element count.
//!
//! This crate streams an XML document once, groups the sibling elements at
//! a configurable nesting depth into fixed-size batches, and writes each
//! batch to its own uniquely named file — optionally wrapped in
//! caller-supplied header/footer text so every chunk stands alone as a
//! well-formed document. The input is never materialized in memory, which
//! keeps multi-gigabyte documents splittable.
//!
//! # Example
//!
//! ```
//! use xml_splitter::SplitConfig;
//!
//! // Depth and count must both be positive
//! assert!(SplitConfig::new(1, 10).is_ok());
//! assert!(SplitConfig::new(0, 10).is_err());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Split configuration, naming constants, and validation
//! - [`error`]: Error types and Result alias
//! - [`splitter`]: Depth-bounded streaming split pass
//! - `subtree` (internal): Whole-subtree copying with same-name depth matching
//! - `batch` (internal): Output file lifecycle
//! - [`fragment`]: Grouping metadata stamped onto produced chunks
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod fragment;
pub mod splitter;

mod batch;
mod subtree;

// Re-export commonly used items
pub use config::SplitConfig;
pub use error::{Result, SplitterError};
pub use fragment::{stamp_fragments, Fragment};
pub use splitter::Splitter;
