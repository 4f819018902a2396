//! Whole-subtree copying from the event stream into a batch sink.

use std::io::{BufRead, Write};

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Result, SplitterError};

/// Copy a complete element subtree verbatim.
///
/// The reader must be positioned immediately after having produced the
/// `start` event. Writes the start tag, every descendant event, and the
/// matching end tag to `writer`, then returns with the reader positioned
/// just past that end tag.
///
/// Matching uses a same-qualified-name counter, not first-end-tag pairing:
/// a recursive element (say `<node>` containing `<node>` children) must
/// only terminate the copy at the outer element's own end tag. Self-closing
/// same-name descendants open and close in one event and leave the counter
/// untouched. Differently named elements may be interleaved at any level,
/// which is why this counter is separate from the splitter's document
/// depth counter.
pub(crate) fn copy_subtree<R: BufRead, W: Write>(
    reader: &mut Reader<R>,
    start: &BytesStart<'_>,
    writer: &mut Writer<W>,
) -> Result<()> {
    let name = start.name().as_ref().to_vec();
    writer.write_event(Event::Start(start.clone()))?;

    let mut open = 1usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if e.name().as_ref() == name.as_slice() {
                    open += 1;
                }
                writer.write_event(Event::Start(e))?;
            }
            Event::End(e) => {
                let matches_name = e.name().as_ref() == name.as_slice();
                writer.write_event(Event::End(e))?;
                if matches_name {
                    open -= 1;
                    if open == 0 {
                        return Ok(());
                    }
                }
            }
            Event::Eof => {
                return Err(SplitterError::UnexpectedEof {
                    tag: String::from_utf8_lossy(&name).into_owned(),
                });
            }
            // Text, CDATA, comments, PIs, and self-closing elements pass
            // through unchanged.
            event => writer.write_event(event)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Drive the reader to the first start event, copy that subtree into a
    /// buffer, and return (copied bytes, next event after the copy).
    fn copy_first_subtree(xml: &str) -> (String, String) {
        let mut reader = Reader::from_reader(xml.as_bytes());
        let mut out = Writer::new(Vec::new());

        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(start) => {
                    copy_subtree(&mut reader, &start, &mut out).unwrap();
                    break;
                }
                Event::Eof => panic!("no start element in {xml}"),
                _ => {}
            }
        }

        let copied = String::from_utf8(out.into_inner()).unwrap();
        let mut next_buf = Vec::new();
        let next = format!("{:?}", reader.read_event_into(&mut next_buf).unwrap());
        (copied, next)
    }

    #[test]
    fn test_copies_simple_subtree_verbatim() {
        let (copied, _) = copy_first_subtree(r#"<item id="1">hello &amp; bye</item>"#);
        assert_eq!(copied, r#"<item id="1">hello &amp; bye</item>"#);
    }

    #[test]
    fn test_stops_at_matching_end_not_first_end() {
        let xml = "<node><node><node/></node>tail</node><node>sibling</node>";
        let (copied, next) = copy_first_subtree(xml);
        assert_eq!(copied, "<node><node><node/></node>tail</node>");
        // Reader must be positioned at the sibling, not past it.
        assert!(next.contains("node"), "next event was {next}");
    }

    #[test]
    fn test_interleaved_other_elements() {
        let xml = "<a><b><a>inner</a></b><c/></a>";
        let (copied, _) = copy_first_subtree(xml);
        assert_eq!(copied, xml);
    }

    #[test]
    fn test_preserves_comments_and_cdata() {
        let xml = "<item><!-- note --><![CDATA[1 < 2]]></item>";
        let (copied, _) = copy_first_subtree(xml);
        assert_eq!(copied, xml);
    }

    #[test]
    fn test_truncated_subtree_is_an_error() {
        let xml = "<item><child>";
        let mut reader = Reader::from_reader(xml.as_bytes());
        let mut out = Writer::new(Vec::new());

        let mut buf = Vec::new();
        let start = match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(start) => start.into_owned(),
            other => panic!("unexpected event {other:?}"),
        };

        let err = copy_subtree(&mut reader, &start, &mut out).unwrap_err();
        assert!(matches!(
            err,
            SplitterError::UnexpectedEof { .. } | SplitterError::MalformedInput(_)
        ));
    }
}
