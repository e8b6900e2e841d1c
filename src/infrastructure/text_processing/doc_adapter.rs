//! Legacy Word (`.doc`) extraction.
//!
//! Two kinds of payload arrive under the `.doc` suffix: real Word 97-2003
//! binaries stored in an OLE compound file, and OOXML packages that were
//! renamed. Binaries are decoded by walking the piece table in the CLX
//! structure; packages are read as raw text, one blank line after every
//! paragraph.

use std::io::{Cursor, Read};

use async_trait::async_trait;
use encoding_rs::WINDOWS_1252;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedFile};

use super::blocking::run_parser;
use super::ooxml::{ParagraphScope, read_paragraphs};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const CFB_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const WORD_IDENT: u16 = 0xA5EC;
const FIB_FLAGS_OFFSET: usize = 0x0A;
const FIB_CCP_TEXT_OFFSET: usize = 0x4C;
const FIB_FC_CLX_OFFSET: usize = 0x1A2;
const FIB_LCB_CLX_OFFSET: usize = 0x1A6;
const FLAG_WHICH_TABLE: u16 = 0x0200;
const FLAG_ENCRYPTED: u16 = 0x0100;

const CLX_PRC: u8 = 0x01;
const CLX_PCDT: u8 = 0x02;
const PCD_SIZE: usize = 8;
const FC_COMPRESSED: u32 = 0x4000_0000;

const FIELD_BEGIN: char = '\u{13}';
const FIELD_SEPARATOR: char = '\u{14}';
const FIELD_END: char = '\u{15}';

pub struct DocAdapter;

impl DocAdapter {
    fn extract(data: Vec<u8>) -> Result<String, String> {
        if data.starts_with(ZIP_MAGIC) {
            let paragraphs = read_paragraphs(&data, ParagraphScope::All)?;
            return Ok(paragraphs
                .into_iter()
                .map(|p| p + "\n\n")
                .collect::<String>());
        }

        if !data.starts_with(CFB_MAGIC) {
            return Err("not a Word document".to_string());
        }

        extract_binary(data)
    }
}

fn extract_binary(data: Vec<u8>) -> Result<String, String> {
    let mut compound = cfb::CompoundFile::open(Cursor::new(data))
        .map_err(|e| format!("failed to open compound file: {e}"))?;

    let word_document = read_stream(&mut compound, "/WordDocument")?;

    if read_u16(&word_document, 0)? != WORD_IDENT {
        return Err("WordDocument stream has an unknown identifier".to_string());
    }
    let flags = read_u16(&word_document, FIB_FLAGS_OFFSET)?;
    if flags & FLAG_ENCRYPTED != 0 {
        return Err("document is encrypted".to_string());
    }

    let text_chars = usize::try_from(read_u32(&word_document, FIB_CCP_TEXT_OFFSET)? as i32)
        .map_err(|_| "negative text length in file header".to_string())?;
    let fc_clx = read_u32(&word_document, FIB_FC_CLX_OFFSET)? as usize;
    let lcb_clx = read_u32(&word_document, FIB_LCB_CLX_OFFSET)? as usize;

    let table_name = if flags & FLAG_WHICH_TABLE != 0 {
        "/1Table"
    } else {
        "/0Table"
    };
    let table = read_stream(&mut compound, table_name)?;
    let clx = table
        .get(fc_clx..fc_clx + lcb_clx)
        .ok_or_else(|| "piece table lies outside the table stream".to_string())?;

    let raw = read_pieces(&word_document, find_piece_table(clx)?, text_chars)?;
    Ok(normalize_word_text(&raw))
}

fn read_stream<F: Read + std::io::Seek>(
    compound: &mut cfb::CompoundFile<F>,
    path: &str,
) -> Result<Vec<u8>, String> {
    let mut stream = compound
        .open_stream(path)
        .map_err(|e| format!("missing {path} stream: {e}"))?;
    let mut buffer = Vec::new();
    stream
        .read_to_end(&mut buffer)
        .map_err(|e| format!("failed to read {path} stream: {e}"))?;
    Ok(buffer)
}

/// Skips property records and returns the body of the piece table.
fn find_piece_table(clx: &[u8]) -> Result<&[u8], String> {
    let mut pos = 0;
    while pos < clx.len() {
        match clx[pos] {
            CLX_PRC => {
                let size = read_u16(clx, pos + 1)? as usize;
                pos += 3 + size;
            }
            CLX_PCDT => {
                let size = read_u32(clx, pos + 1)? as usize;
                return clx
                    .get(pos + 5..pos + 5 + size)
                    .ok_or_else(|| "truncated piece table".to_string());
            }
            other => return Err(format!("unexpected CLX entry 0x{other:02X}")),
        }
    }
    Err("piece table not found".to_string())
}

fn read_pieces(word_document: &[u8], plc_pcd: &[u8], text_chars: usize) -> Result<String, String> {
    if plc_pcd.len() < 4 {
        return Err("empty piece table".to_string());
    }
    let pieces = (plc_pcd.len() - 4) / (4 + PCD_SIZE);
    let descriptors_at = (pieces + 1) * 4;

    let mut text = String::new();
    let mut remaining = text_chars;
    for i in 0..pieces {
        if remaining == 0 {
            break;
        }
        let cp_start = read_u32(plc_pcd, i * 4)? as usize;
        let cp_end = read_u32(plc_pcd, (i + 1) * 4)? as usize;
        let count = cp_end.saturating_sub(cp_start).min(remaining);
        let fc = read_u32(plc_pcd, descriptors_at + i * PCD_SIZE + 2)?;

        if fc & FC_COMPRESSED != 0 {
            let offset = ((fc & !FC_COMPRESSED) / 2) as usize;
            let bytes = word_document
                .get(offset..offset + count)
                .ok_or_else(|| "text piece lies outside the document stream".to_string())?;
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            text.push_str(&decoded);
        } else {
            let offset = fc as usize;
            let bytes = word_document
                .get(offset..offset + count * 2)
                .ok_or_else(|| "text piece lies outside the document stream".to_string())?;
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            text.push_str(&String::from_utf16_lossy(&units));
        }
        remaining -= count;
    }

    Ok(text)
}

/// Maps Word control characters to plain text and keeps only field results.
pub fn normalize_word_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    // One entry per open field: true while inside its instruction part.
    let mut fields: Vec<bool> = Vec::new();

    for c in raw.chars() {
        match c {
            FIELD_BEGIN => fields.push(true),
            FIELD_SEPARATOR => {
                if let Some(in_instruction) = fields.last_mut() {
                    *in_instruction = false;
                }
            }
            FIELD_END => {
                fields.pop();
            }
            _ if fields.iter().any(|in_instruction| *in_instruction) => {}
            '\r' | '\u{0B}' | '\u{0C}' => out.push('\n'),
            '\u{07}' => out.push('\t'),
            '\t' | '\n' => out.push(c),
            _ if c.is_control() => {}
            _ => out.push(c),
        }
    }

    out
}

fn read_u16(buf: &[u8], at: usize) -> Result<u16, String> {
    buf.get(at..at + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .ok_or_else(|| format!("unexpected end of data at offset {at}"))
}

fn read_u32(buf: &[u8], at: usize) -> Result<u32, String> {
    buf.get(at..at + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| format!("unexpected end of data at offset {at}"))
}

#[async_trait]
impl FileLoader for DocAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        if file.format() != DocumentFormat::Doc {
            return Err(FileLoaderError::UnsupportedFormat(file.filename.clone()));
        }

        let data = file.content.clone();
        let text = run_parser(&file.filename, move || Self::extract(data)).await?;

        tracing::info!(chars = text.chars().count(), "Extracted text from DOC");
        Ok(text)
    }
}
