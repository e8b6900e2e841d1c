//! Paragraph reader shared by the Word adapters.
//!
//! Reads `word/document.xml` out of an OOXML package and collects paragraph
//! text. Only runs (`w:r`) belonging to the paragraph itself, or to a hyperlink
//! inside it, contribute text, so text boxes and other nested content are skipped.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Which paragraphs of the document body to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParagraphScope {
    /// Direct children of `w:body` only.
    Body,
    /// Every paragraph, including the ones inside tables.
    All,
}

pub(super) fn read_document_part(data: &[u8]) -> Result<String, String> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|e| format!("not a valid OOXML package: {e}"))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| format!("missing {DOCUMENT_PART}: {e}"))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| format!("failed to read {DOCUMENT_PART}: {e}"))?;
    Ok(xml)
}

pub(super) fn read_paragraphs(data: &[u8], scope: ParagraphScope) -> Result<Vec<String>, String> {
    let xml = read_document_part(data)?;
    parse_paragraphs(&xml, scope)
}

pub(super) fn parse_paragraphs(xml: &str, scope: ParagraphScope) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<(usize, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && current.is_none() && paragraph_in_scope(&stack, scope) {
                    current = Some((stack.len(), String::new()));
                }
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                if let Some((depth, text)) = current.as_mut() {
                    if in_paragraph_run(&stack, *depth) {
                        match e.local_name().as_ref() {
                            b"tab" => text.push('\t'),
                            b"br" | b"cr" => text.push('\n'),
                            _ => {}
                        }
                    }
                } else if e.local_name().as_ref() == b"p" && paragraph_in_scope(&stack, scope) {
                    paragraphs.push(String::new());
                }
            }
            Ok(Event::Text(t)) => {
                if let Some((depth, text)) = current.as_mut() {
                    if stack.last().is_some_and(|n| n == b"t")
                        && in_paragraph_run(&stack[..stack.len() - 1], *depth)
                    {
                        let unescaped = t
                            .unescape()
                            .map_err(|e| format!("invalid text in {DOCUMENT_PART}: {e}"))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
                if current.as_ref().is_some_and(|(depth, _)| *depth == stack.len()) {
                    if let Some((_, text)) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                ));
            }
        }
    }

    Ok(paragraphs)
}

fn paragraph_in_scope(stack: &[Vec<u8>], scope: ParagraphScope) -> bool {
    match scope {
        ParagraphScope::Body => stack.last().is_some_and(|n| n == b"body"),
        ParagraphScope::All => stack.iter().any(|n| n == b"body"),
    }
}

/// True when the innermost open element is a run owned by the paragraph opened at `depth`.
fn in_paragraph_run(stack: &[Vec<u8>], depth: usize) -> bool {
    let Some(last) = stack.last() else {
        return false;
    };
    if last != b"r" {
        return false;
    }
    match stack.len() - 1 - depth {
        1 => true,
        2 => stack[depth + 1] == b"hyperlink",
        _ => false,
    }
}
