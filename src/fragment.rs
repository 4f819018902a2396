//! Grouping metadata for produced batch files.
//!
//! The splitter core only returns an ordered list of paths. The host side
//! stamps each one with a shared group identifier, its zero-based ordinal,
//! and the total fragment count — the count is only knowable after the
//! whole pass has finished, which is why stamping happens here and not in
//! the split loop.

use std::path::PathBuf;

use uuid::Uuid;

/// One produced batch file plus its grouping metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Identifier shared by all fragments produced from one input document.
    pub group_id: String,

    /// Zero-based position of this fragment within the group.
    pub index: usize,

    /// Total number of fragments in the group.
    pub count: usize,

    /// Location of the batch file.
    pub path: PathBuf,
}

/// Stamp an ordered list of batch files with grouping metadata.
///
/// Generates one random UUID per call; every fragment of the list carries
/// it as `group_id`.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use xml_splitter::stamp_fragments;
///
/// let fragments = stamp_fragments(vec![
///     PathBuf::from("/tmp/a.xml"),
///     PathBuf::from("/tmp/b.xml"),
/// ]);
/// assert_eq!(fragments.len(), 2);
/// assert_eq!(fragments[0].group_id, fragments[1].group_id);
/// assert_eq!(fragments[1].index, 1);
/// assert_eq!(fragments[1].count, 2);
/// ```
#[must_use]
pub fn stamp_fragments(paths: Vec<PathBuf>) -> Vec<Fragment> {
    let group_id = Uuid::new_v4().to_string();
    let count = paths.len();
    paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| Fragment {
            group_id: group_id.clone(),
            index,
            count,
            path,
        })
        .collect()
}
