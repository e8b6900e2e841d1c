use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const SHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub fn zip_package(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in parts {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn paragraph(text: &str) -> String {
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, text)
}

pub fn table_with_cell(text: &str) -> String {
    format!("<w:tbl><w:tr><w:tc>{}</w:tc></w:tr></w:tbl>", paragraph(text))
}

/// A Word package whose body holds `body_xml`.
pub fn docx_bytes(body_xml: &str) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{WORD_NS}"><w:body>{body_xml}<w:sectPr/></w:body></w:document>"#
    );
    zip_package(&[
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#
                .to_string(),
        ),
        ("word/document.xml", document),
    ])
}

pub fn inline_cell(reference: &str, text: &str) -> String {
    format!(r#"<c r="{reference}" t="inlineStr"><is><t>{text}</t></is></c>"#)
}

pub fn number_cell(reference: &str, value: &str) -> String {
    format!(r#"<c r="{reference}"><v>{value}</v></c>"#)
}

/// Rows are `(row number, cells xml)`.
pub fn sheet_xml(rows: &[(u32, String)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(number, cells)| format!(r#"<row r="{number}">{cells}</row>"#))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{SHEET_NS}"><sheetData>{rows}</sheetData></worksheet>"#
    )
}

pub fn styled_number_cell(reference: &str, style_index: u32, value: &str) -> String {
    format!(r#"<c r="{reference}" s="{style_index}"><v>{value}</v></c>"#)
}

/// Cell formats: index 0 is the default, index 1 uses the built-in short date format (14).
pub fn date_styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><styleSheet xmlns="{SHEET_NS}"><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#
    )
}

/// A workbook with one worksheet per `(name, sheet xml)` entry.
pub fn xlsx_bytes(sheets: &[(&str, String)]) -> Vec<u8> {
    xlsx_package(sheets, None)
}

pub fn xlsx_bytes_with_styles(sheets: &[(&str, String)], styles_xml: String) -> Vec<u8> {
    xlsx_package(sheets, Some(styles_xml))
}

fn xlsx_package(sheets: &[(&str, String)], styles_xml: Option<String>) -> Vec<u8> {
    let sheet_entries: String = sheets
        .iter()
        .enumerate()
        .map(|(i, (name, _))| {
            format!(
                r#"<sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#,
                id = i + 1
            )
        })
        .collect();
    let relationships: String = (1..=sheets.len())
        .map(|id| {
            format!(
                r#"<Relationship Id="rId{id}" Type="{REL_NS}/worksheet" Target="worksheets/sheet{id}.xml"/>"#
            )
        })
        .collect();
    let mut overrides: String = (1..=sheets.len())
        .map(|id| {
            format!(
                r#"<Override PartName="/xl/worksheets/sheet{id}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
            )
        })
        .collect();
    if styles_xml.is_some() {
        overrides.push_str(r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#);
    }

    let mut parts = vec![
        (
            "[Content_Types].xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>{overrides}</Types>"#
            ),
        ),
        (
            "_rels/.rels",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
            ),
        ),
        (
            "xl/workbook.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="{SHEET_NS}" xmlns:r="{REL_NS}"><sheets>{sheet_entries}</sheets></workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{relationships}</Relationships>"#
            ),
        ),
    ];

    let sheet_paths: Vec<String> = (1..=sheets.len())
        .map(|id| format!("xl/worksheets/sheet{id}.xml"))
        .collect();
    for (path, (_, xml)) in sheet_paths.iter().zip(sheets) {
        parts.push((path.as_str(), xml.clone()));
    }
    if let Some(styles) = styles_xml {
        parts.push(("xl/styles.xml", styles));
    }

    zip_package(&parts)
}

/// A minimal Word 97 binary: one compressed piece holding `text`.
pub fn word97_bytes(text: &str) -> Vec<u8> {
    const TEXT_OFFSET: usize = 0x400;

    let text_bytes = text.as_bytes();
    let mut word_document = vec![0u8; TEXT_OFFSET + text_bytes.len()];
    word_document[0..2].copy_from_slice(&0xA5ECu16.to_le_bytes());
    word_document[0x0A..0x0C].copy_from_slice(&0x0200u16.to_le_bytes());
    word_document[0x4C..0x50].copy_from_slice(&(text_bytes.len() as u32).to_le_bytes());
    word_document[TEXT_OFFSET..].copy_from_slice(text_bytes);

    let fc = ((TEXT_OFFSET as u32) * 2) | 0x4000_0000;
    let mut plc_pcd = Vec::new();
    plc_pcd.extend_from_slice(&0u32.to_le_bytes());
    plc_pcd.extend_from_slice(&(text_bytes.len() as u32).to_le_bytes());
    plc_pcd.extend_from_slice(&0u16.to_le_bytes());
    plc_pcd.extend_from_slice(&fc.to_le_bytes());
    plc_pcd.extend_from_slice(&0u16.to_le_bytes());

    let mut clx = vec![0x02];
    clx.extend_from_slice(&(plc_pcd.len() as u32).to_le_bytes());
    clx.extend_from_slice(&plc_pcd);

    word_document[0x1A2..0x1A6].copy_from_slice(&0u32.to_le_bytes());
    word_document[0x1A6..0x1AA].copy_from_slice(&(clx.len() as u32).to_le_bytes());

    let mut compound = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();
    {
        let mut stream = compound.create_stream("/WordDocument").unwrap();
        stream.write_all(&word_document).unwrap();
    }
    {
        let mut stream = compound.create_stream("/1Table").unwrap();
        stream.write_all(&clx).unwrap();
    }
    compound.flush().unwrap();
    compound.into_inner().into_inner()
}

/// A PDF with one page per entry of `pages`, with a correct cross-reference table.
pub fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
    let pages: Vec<Option<&str>> = pages.iter().copied().map(Some).collect();
    pdf_bytes_with_blank_pages(&pages)
}

/// Like [`pdf_bytes`], but a `None` entry is a page without a content stream.
pub fn pdf_bytes_with_blank_pages(pages: &[Option<&str>]) -> Vec<u8> {
    // 1: catalog, 2: pages, 3: font, then each page followed by its content stream if any.
    let mut page_ids = Vec::with_capacity(pages.len());
    let mut next_id = 4;
    for page in pages {
        page_ids.push(next_id);
        next_id += if page.is_some() { 2 } else { 1 };
    }

    let mut objects: Vec<String> = Vec::new();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());
    for (page, page_id) in pages.iter().zip(&page_ids) {
        let resources = "/MediaBox [0 0 612 792] /Resources << /Font << /F1 3 0 R >> >>";
        match page {
            Some(text) => {
                let content_id = page_id + 1;
                objects.push(format!(
                    "<< /Type /Page /Parent 2 0 R {resources} /Contents {content_id} 0 R >>"
                ));
                let stream = format!("BT /F1 24 Tf 72 700 Td ({text}) Tj ET");
                objects.push(format!(
                    "<< /Length {} >>\nstream\n{}\nendstream",
                    stream.len(),
                    stream
                ));
            }
            None => objects.push(format!("<< /Type /Page /Parent 2 0 R {resources} >>")),
        }
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_at = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}
