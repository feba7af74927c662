//! Text extraction from uploaded documents.
//!
//! MIME detection inspects byte content, never the filename extension.
//! Each format runs an ordered strategy chain: PDF tries a layout-aware
//! extractor before a basic parser, plain text tries four encodings in
//! sequence. Exhausting a chain is a typed, caller-visible error.

use tracing::{info, warn};

use crate::error::ExtractError;
use crate::models::ExtractionResult;
use crate::strategy::{describe_failures, first_success};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_TXT: &str = "text/plain";
pub const MIME_HTML: &str = "text/html";
pub const MIME_RTF: &str = "application/rtf";

/// MIME types accepted by the extractor.
pub const SUPPORTED_TYPES: &[&str] = &[MIME_PDF, MIME_TXT, MIME_DOCX, MIME_DOC, MIME_HTML, MIME_RTF];

/// Detect the MIME type from byte content, with signature fallback when
/// sniffing recognizes nothing.
pub fn detect_mime(data: &[u8]) -> String {
    if let Some(kind) = infer::get(data) {
        let mime = kind.mime_type();
        // Sniffers report docx uploads with unusual internal layout as bare
        // zip containers; treat those as docx-family.
        if mime == "application/zip" {
            return MIME_DOCX.to_string();
        }
        return mime.to_string();
    }
    // Sniffing found no known signature: basic magic-byte checks, else text.
    if data.starts_with(b"%PDF") {
        MIME_PDF.to_string()
    } else if data.starts_with(b"PK") {
        MIME_DOCX.to_string()
    } else {
        MIME_TXT.to_string()
    }
}

/// Extract plain text from a document.
///
/// Returns non-empty text (at least 5 chars after trimming) or a typed error;
/// callers never need to re-validate for emptiness beyond that. Size limits
/// are the caller's responsibility.
pub fn extract(data: &[u8], filename: &str) -> Result<ExtractionResult, ExtractError> {
    if data.is_empty() {
        return Err(ExtractError::EmptyFile);
    }

    let mime_type = detect_mime(data);
    info!("Detected type {} for {}", mime_type, filename);

    if !SUPPORTED_TYPES.contains(&mime_type.as_str()) {
        return Err(ExtractError::UnsupportedType(mime_type));
    }

    let text = match mime_type.as_str() {
        MIME_PDF => extract_pdf(data)?,
        MIME_DOCX | MIME_DOC => extract_docx(data)?,
        MIME_TXT => extract_txt(data)?,
        // Allow-listed but no extraction strategy implemented for them.
        other => {
            return Err(ExtractError::ExtractionFailed {
                format: other.to_string(),
                reason: "no extraction strategy implemented".to_string(),
            })
        }
    };

    let cleaned = clean_extracted_text(&text);
    if cleaned.trim().chars().count() < 5 {
        return Err(ExtractError::EmptyExtraction);
    }

    Ok(ExtractionResult {
        text: cleaned,
        mime_type,
        source_filename: filename.to_string(),
    })
}

/// PDF extraction: layout-aware extractor first, basic parser second.
fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    let layout_aware = |bytes: &[u8]| -> Result<String, String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())?;
        if text.trim().is_empty() {
            return Err("no text content".to_string());
        }
        Ok(text)
    };

    let basic_parser = |bytes: &[u8]| -> Result<String, String> {
        let doc = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        let text = doc.extract_text(&pages).map_err(|e| e.to_string())?;
        if text.trim().is_empty() {
            return Err("no text content".to_string());
        }
        Ok(text)
    };

    match first_success(
        data,
        &[
            ("pdf-extract", &layout_aware),
            ("lopdf", &basic_parser),
        ],
    ) {
        Ok((strategy, text)) => {
            info!("PDF text extracted via {}", strategy);
            Ok(text)
        }
        Err(failures) => Err(ExtractError::ExtractionFailed {
            format: "pdf".to_string(),
            reason: describe_failures(&failures),
        }),
    }
}

/// DOCX extraction: walk the document body collecting run text per paragraph.
fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data).map_err(|e| ExtractError::ExtractionFailed {
        format: "docx".to_string(),
        reason: e.to_string(),
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let para_text: String = para
                .children
                .iter()
                .filter_map(|pc| {
                    if let docx_rs::ParagraphChild::Run(run) = pc {
                        Some(
                            run.children
                                .iter()
                                .filter_map(|rc| {
                                    if let docx_rs::RunChild::Text(t) = rc {
                                        Some(t.text.clone())
                                    } else {
                                        None
                                    }
                                })
                                .collect::<Vec<_>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("");

            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    if paragraphs.is_empty() {
        warn!("DOCX contained no extractable text");
        return Err(ExtractError::ExtractionFailed {
            format: "docx".to_string(),
            reason: "document contains no text".to_string(),
        });
    }

    Ok(paragraphs.join("\n"))
}

/// Plain-text extraction: ordered encoding ladder, first decode that yields
/// non-empty trimmed text wins.
fn extract_txt(data: &[u8]) -> Result<String, ExtractError> {
    let non_empty = |text: String| -> Result<String, String> {
        if text.trim().is_empty() {
            Err("decoded to empty text".to_string())
        } else {
            Ok(text)
        }
    };

    let utf8 = |bytes: &[u8]| -> Result<String, String> {
        let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
        non_empty(text.to_string())
    };

    let latin1 = |bytes: &[u8]| -> Result<String, String> {
        non_empty(encoding_rs::mem::decode_latin1(bytes).into_owned())
    };

    let cp1252 = |bytes: &[u8]| -> Result<String, String> {
        let text = encoding_rs::WINDOWS_1252
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| "invalid cp1252 byte sequence".to_string())?;
        non_empty(text.into_owned())
    };

    let iso_8859_1 = |bytes: &[u8]| -> Result<String, String> {
        non_empty(encoding_rs::mem::decode_latin1(bytes).into_owned())
    };

    match first_success(
        data,
        &[
            ("utf-8", &utf8),
            ("latin-1", &latin1),
            ("cp1252", &cp1252),
            ("iso-8859-1", &iso_8859_1),
        ],
    ) {
        Ok((encoding, text)) => {
            info!("Text decoded as {}", encoding);
            Ok(text)
        }
        Err(failures) => Err(ExtractError::ExtractionFailed {
            format: "txt".to_string(),
            reason: describe_failures(&failures),
        }),
    }
}

/// Collapse extracted text: trim lines, drop empties.
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
