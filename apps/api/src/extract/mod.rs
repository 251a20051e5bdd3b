//! Text extraction from uploaded resume files (PDF, DOCX, plain text).
//!
//! The extracted plain-text string is the only artifact carried forward;
//! raw bytes live only for the duration of one extraction call.

mod docx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}. Please upload PDF, DOCX, or TXT files")]
    Unsupported(String),

    #[error("error reading {kind} file: {reason}")]
    Failed { kind: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Resolves the document format from the declared MIME type first, then the
/// filename extension. An unrecognized MIME type (e.g. octet-stream from a
/// generic upload widget) falls through to the extension check.
pub fn resolve_format(
    content_type: Option<&str>,
    filename: Option<&str>,
) -> Result<DocumentFormat, ExtractError> {
    match content_type {
        Some("application/pdf") => return Ok(DocumentFormat::Pdf),
        Some(DOCX_MIME) => return Ok(DocumentFormat::Docx),
        Some("text/plain") => return Ok(DocumentFormat::PlainText),
        _ => {}
    }

    let name = filename.map(|f| f.to_lowercase()).unwrap_or_default();
    if name.ends_with(".pdf") {
        Ok(DocumentFormat::Pdf)
    } else if name.ends_with(".docx") {
        Ok(DocumentFormat::Docx)
    } else if name.ends_with(".txt") {
        Ok(DocumentFormat::PlainText)
    } else {
        Err(ExtractError::Unsupported(format!(
            "{} ({})",
            content_type.unwrap_or("unknown content type"),
            filename.unwrap_or("no filename"),
        )))
    }
}

/// Extracts plain text from the file bytes.
///
/// Decode and parse failures surface as typed errors; they are never
/// silently converted to empty text.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => extract_pdf(bytes),
        DocumentFormat::Docx => docx::extract_docx_text(bytes),
        DocumentFormat::PlainText => String::from_utf8(bytes.to_vec()).map_err(|e| {
            ExtractError::Failed {
                kind: "text",
                reason: e.to_string(),
            }
        }),
    }
}

/// All pages in document order; a page with no extractable text simply
/// contributes nothing.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Failed {
        kind: "PDF",
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_hint_takes_precedence_over_extension() {
        let format = resolve_format(Some("application/pdf"), Some("resume.txt")).unwrap();
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_extension_used_when_mime_is_generic() {
        let format = resolve_format(Some("application/octet-stream"), Some("Resume.DOCX")).unwrap();
        assert_eq!(format, DocumentFormat::Docx);
    }

    #[test]
    fn test_extension_used_when_mime_missing() {
        let format = resolve_format(None, Some("resume.pdf")).unwrap();
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = resolve_format(None, Some("resume.odt")).unwrap_err();
        assert!(matches!(err, ExtractError::Unsupported(_)));
    }

    #[test]
    fn test_no_hints_is_rejected() {
        assert!(resolve_format(None, None).is_err());
    }

    #[test]
    fn test_plain_text_round_trips_verbatim() {
        let input = "Jane Doe\njane@example.com\n• Built things";
        let text = extract_text(input.as_bytes(), DocumentFormat::PlainText).unwrap();
        assert_eq!(text, input);
    }

    #[test]
    fn test_invalid_utf8_is_a_typed_failure() {
        let err = extract_text(&[0xff, 0xfe, 0x00], DocumentFormat::PlainText).unwrap_err();
        assert!(matches!(err, ExtractError::Failed { kind: "text", .. }));
    }

    #[test]
    fn test_corrupt_pdf_is_a_typed_failure() {
        let err = extract_text(b"not a pdf at all", DocumentFormat::Pdf).unwrap_err();
        assert!(matches!(err, ExtractError::Failed { kind: "PDF", .. }));
    }
}
