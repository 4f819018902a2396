//! Depth-bounded streaming splitter.
//!
//! Drives a single forward pass over the parse events of one XML document,
//! groups the elements found at the configured depth into fixed-size
//! batches, and writes each batch to its own file. The whole document is
//! never held in memory; a matched element's subtree streams straight from
//! the reader into the current batch file.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::batch::Batch;
use crate::config::SplitConfig;
use crate::error::{Result, SplitterError};
use crate::subtree::copy_subtree;

/// Streaming splitter over one XML document.
///
/// Construct with the input stream and a validated [`SplitConfig`], then
/// call [`split`](Splitter::split) exactly once. The call consumes the
/// splitter; the input stream is a single forward pass and is not
/// restartable.
pub struct Splitter<R: BufRead> {
    reader: Reader<R>,
    config: SplitConfig,
}

impl<R: BufRead> Splitter<R> {
    /// Create a splitter over `input`.
    pub fn new(input: R, config: SplitConfig) -> Self {
        Self {
            reader: Reader::from_reader(input),
            config,
        }
    }

    /// Run the split pass and return the produced batch files in order.
    ///
    /// Creation order is the returned order; each path is handed to the
    /// caller, never deleted by the splitter. On error, batches already
    /// finalized remain on disk and the currently open one may be left
    /// incomplete — callers must treat partial-failure output as untrusted.
    pub fn split(mut self) -> Result<Vec<PathBuf>> {
        let out_dir = self.config.resolve_work_dir();
        let target_depth = self.config.split_depth as i64;

        let mut produced: Vec<PathBuf> = Vec::new();
        let mut current: Option<Batch> = None;
        // -1 before the first start tag; the document root is depth 0.
        let mut depth: i64 = -1;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(start) => {
                    depth += 1;
                    if depth == 0 {
                        log_root_namespaces(&start);
                    }
                    tracing::trace!(depth, "start element");

                    if depth == target_depth {
                        let batch = open_or_current(
                            &mut current,
                            produced.len(),
                            &out_dir,
                            self.config.header.as_deref(),
                        )?;
                        batch.record_element();
                        copy_subtree(&mut self.reader, &start, batch.xml_writer())?;
                        // The copier consumed the matching end tag, so the
                        // main loop must not see it as a depth decrement.
                        depth -= 1;

                        self.close_if_full(&mut current, &mut produced)?;
                    }
                }
                Event::Empty(element) => {
                    // A self-closing element is a complete subtree in one
                    // event; depth is unchanged by it.
                    if depth + 1 == target_depth {
                        let batch = open_or_current(
                            &mut current,
                            produced.len(),
                            &out_dir,
                            self.config.header.as_deref(),
                        )?;
                        batch.record_element();
                        batch.xml_writer().write_event(Event::Empty(element))?;

                        self.close_if_full(&mut current, &mut produced)?;
                    }
                }
                Event::End(_) => {
                    // Only reachable for elements above the target depth;
                    // target-depth elements are consumed by the copier.
                    depth -= 1;
                    tracing::trace!(depth, "end element");
                }
                Event::Eof => break,
                // Declarations, text, comments, and PIs outside any copied
                // subtree are not part of a batch.
                _ => {}
            }
        }

        if depth != -1 {
            return Err(SplitterError::TruncatedDocument {
                open: usize::try_from(depth + 1).unwrap_or(0),
            });
        }

        // Trailing partial batch at end-of-document.
        if let Some(batch) = current.take() {
            produced.push(batch.finalize(self.config.footer.as_deref())?);
        }

        tracing::debug!(batches = produced.len(), "split complete");
        Ok(produced)
    }

    /// Finalize the current batch if it reached the configured size.
    fn close_if_full(
        &self,
        current: &mut Option<Batch>,
        produced: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let full = current
            .as_ref()
            .is_some_and(|b| b.element_count() >= self.config.split_count);
        if full {
            if let Some(batch) = current.take() {
                produced.push(batch.finalize(self.config.footer.as_deref())?);
            }
        }
        Ok(())
    }
}

/// Return the open batch, creating a fresh one when none is open.
fn open_or_current<'a>(
    current: &'a mut Option<Batch>,
    next_index: usize,
    out_dir: &Path,
    header: Option<&str>,
) -> Result<&'a mut Batch> {
    match current {
        Some(batch) => Ok(batch),
        None => Ok(current.insert(Batch::create(next_index, out_dir, header)?)),
    }
}

/// Log namespace declarations found on the root element.
///
/// Declarations are inspected for diagnostics only; they are never copied
/// into per-batch header or footer text.
fn log_root_namespaces(start: &BytesStart<'_>) {
    for attr in start.attributes().filter_map(|a| a.ok()) {
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            tracing::debug!(
                prefix = %String::from_utf8_lossy(key),
                uri = %String::from_utf8_lossy(&attr.value),
                "root namespace declaration"
            );
        }
    }
}
