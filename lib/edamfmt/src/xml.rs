//! Pretty-printing of the RDF/XML serialization.

use crate::error::SerializeError;
use quick_xml::Reader;
use quick_xml::events::Event;

const INDENT: &[u8] = b"  ";

/// Re-indents an XML document, two spaces per nesting level.
///
/// Elements with pure character content stay on a single line and their
/// content is copied verbatim, escapes included, so the pretty document
/// describes exactly the same graph as its input.
pub fn prettify(source: &str) -> Result<String, SerializeError> {
    let mut reader = Reader::from_str(source);
    let mut events = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            event => events.push(event),
        }
    }

    let mut out = Vec::with_capacity(source.len() + source.len() / 8);
    let mut depth = 0usize;
    let mut index = 0;
    while index < events.len() {
        match &events[index] {
            Event::Start(start) => {
                if let Some(length) = inline_content_length(&events[index..]) {
                    push_indent(&mut out, depth);
                    out.push(b'<');
                    out.extend_from_slice(start);
                    out.push(b'>');
                    for event in &events[index + 1..index + 1 + length] {
                        push_content(&mut out, event);
                    }
                    out.extend_from_slice(b"</");
                    out.extend_from_slice(start.name().as_ref());
                    out.extend_from_slice(b">\n");
                    index += length + 2; // content plus the end tag
                    continue;
                }
                push_indent(&mut out, depth);
                out.push(b'<');
                out.extend_from_slice(start);
                out.extend_from_slice(b">\n");
                depth += 1;
            }
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                push_indent(&mut out, depth);
                out.extend_from_slice(b"</");
                out.extend_from_slice(end);
                out.extend_from_slice(b">\n");
            }
            Event::Empty(element) => {
                push_indent(&mut out, depth);
                out.push(b'<');
                out.extend_from_slice(element);
                out.extend_from_slice(b"/>\n");
            }
            Event::Text(text) => {
                // whitespace-only text between elements is source formatting
                if !text.iter().all(|b| b.is_ascii_whitespace()) {
                    push_indent(&mut out, depth);
                    out.extend_from_slice(text);
                    out.push(b'\n');
                }
            }
            Event::CData(_) | Event::GeneralRef(_) => {
                push_indent(&mut out, depth);
                push_content(&mut out, &events[index]);
                out.push(b'\n');
            }
            Event::Comment(comment) => {
                push_indent(&mut out, depth);
                out.extend_from_slice(b"<!--");
                out.extend_from_slice(comment);
                out.extend_from_slice(b"-->\n");
            }
            Event::Decl(decl) => {
                out.extend_from_slice(b"<?");
                out.extend_from_slice(decl);
                out.extend_from_slice(b"?>\n");
            }
            Event::PI(pi) => {
                push_indent(&mut out, depth);
                out.extend_from_slice(b"<?");
                out.extend_from_slice(pi);
                out.extend_from_slice(b"?>\n");
            }
            Event::DocType(doctype) => {
                out.extend_from_slice(b"<!DOCTYPE ");
                out.extend_from_slice(doctype);
                out.extend_from_slice(b">\n");
            }
            Event::Eof => break,
        }
        index += 1;
    }
    Ok(String::from_utf8(out)?)
}

/// Number of character-content events directly following a start tag, if the
/// element contains no child element.
fn inline_content_length(events: &[Event<'_>]) -> Option<usize> {
    for (offset, event) in events.iter().enumerate().skip(1) {
        match event {
            Event::Text(_) | Event::CData(_) | Event::GeneralRef(_) => {}
            Event::End(_) => return Some(offset - 1),
            _ => return None,
        }
    }
    None
}

fn push_content(out: &mut Vec<u8>, event: &Event<'_>) {
    match event {
        Event::Text(text) => out.extend_from_slice(text),
        Event::CData(data) => {
            out.extend_from_slice(b"<![CDATA[");
            out.extend_from_slice(data);
            out.extend_from_slice(b"]]>");
        }
        Event::GeneralRef(reference) => {
            out.push(b'&');
            out.extend_from_slice(reference);
            out.push(b';');
        }
        _ => {}
    }
}

fn push_indent(out: &mut Vec<u8>, depth: usize) {
    for _ in 0..depth {
        out.extend_from_slice(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements_are_indented() -> Result<(), SerializeError> {
        assert_eq!(
            prettify("<a><b><c>text</c><d/></b></a>")?,
            "<a>\n  <b>\n    <c>text</c>\n    <d/>\n  </b>\n</a>\n"
        );
        Ok(())
    }

    #[test]
    fn existing_formatting_is_rewritten() -> Result<(), SerializeError> {
        assert_eq!(
            prettify("<a>\n\t\t<b>x</b>\n</a>")?,
            "<a>\n  <b>x</b>\n</a>\n"
        );
        Ok(())
    }

    #[test]
    fn character_content_is_copied_verbatim() -> Result<(), SerializeError> {
        let pretty = prettify("<a><b>  spaced \n text &amp; more</b><c></c></a>")?;
        assert!(pretty.contains(">  spaced \n text &amp; more</b>"));
        assert!(pretty.contains("<c></c>"));
        Ok(())
    }

    #[test]
    fn declaration_and_comments_are_kept() -> Result<(), SerializeError> {
        assert_eq!(
            prettify("<?xml version=\"1.0\" encoding=\"UTF-8\"?><a><!-- note --><b/></a>")?,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n  <!-- note -->\n  <b/>\n</a>\n"
        );
        Ok(())
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(prettify("<a><b></a>").is_err());
    }
}
