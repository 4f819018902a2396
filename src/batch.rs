//! Output batch lifecycle: create, write, finalize.
//!
//! Each batch exclusively owns one uniquely named file from creation to
//! finalization. `finalize` consumes the batch, so a batch dropped on an
//! error path closes its file without claiming success.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use tempfile::Builder;

use crate::config::{FILE_PREFIX, FILE_SUFFIX, LINE_SEPARATOR};
use crate::error::Result;

/// An in-progress output batch backed by a uniquely named file.
pub(crate) struct Batch {
    index: usize,
    path: PathBuf,
    writer: Writer<BufWriter<File>>,
    element_count: usize,
}

impl Batch {
    /// Create a fresh batch file in `dir` and write the header if configured.
    ///
    /// The file name follows the `nifi_xmlsplitter*tmp.xml` convention and
    /// is kept on disk after the handle closes.
    pub(crate) fn create(index: usize, dir: &Path, header: Option<&str>) -> Result<Self> {
        let tmp = Builder::new()
            .prefix(FILE_PREFIX)
            .suffix(FILE_SUFFIX)
            .tempfile_in(dir)?;
        let (file, path) = tmp.keep().map_err(|e| e.error)?;

        let mut sink = BufWriter::new(file);
        if let Some(header) = header {
            sink.write_all(header.as_bytes())?;
            sink.write_all(LINE_SEPARATOR.as_bytes())?;
        }

        tracing::debug!(index, path = %path.display(), "opened batch file");
        Ok(Self {
            index,
            path,
            writer: Writer::new(sink),
            element_count: 0,
        })
    }

    /// The XML event sink for this batch.
    pub(crate) fn xml_writer(&mut self) -> &mut Writer<BufWriter<File>> {
        &mut self.writer
    }

    /// Record one element placed in this batch.
    pub(crate) fn record_element(&mut self) {
        self.element_count += 1;
    }

    pub(crate) fn element_count(&self) -> usize {
        self.element_count
    }

    /// Append the footer if configured, flush, close the file, and return
    /// its path. Close failures surface as IO errors.
    pub(crate) fn finalize(self, footer: Option<&str>) -> Result<PathBuf> {
        let mut sink = self.writer.into_inner();
        if let Some(footer) = footer {
            sink.write_all(LINE_SEPARATOR.as_bytes())?;
            sink.write_all(footer.as_bytes())?;
        }
        sink.flush()?;
        drop(sink.into_inner().map_err(|e| e.into_error())?);

        tracing::debug!(
            index = self.index,
            elements = self.element_count,
            path = %self.path.display(),
            "closed batch file"
        );
        Ok(self.path)
    }
}
