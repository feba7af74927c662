//! Text Extraction Tests
//!
//! Encoding ladder round-trips, content-based detection and the PDF strategy
//! chain, exercised through the public `extract` entry point.

use crate::error::ExtractError;
use crate::text_extract::{extract, MIME_PDF, MIME_TXT};

mod encoding_ladder {
    use super::*;

    const SAMPLE: &str = "Segue o relatório de orçamento do projeto, prazo até sexta.";

    fn latin1_bytes(text: &str) -> Vec<u8> {
        // Every char in the samples fits in one latin-1 byte.
        text.chars().map(|c| c as u32 as u8).collect()
    }

    #[test]
    fn test_utf8_round_trip() {
        let result = extract(SAMPLE.as_bytes(), "email.txt").unwrap();
        assert_eq!(result.mime_type, MIME_TXT);
        assert_eq!(result.text, SAMPLE);
    }

    #[test]
    fn test_latin1_round_trip() {
        let bytes = latin1_bytes(SAMPLE);
        // Accented chars make this invalid utf-8, so the first tier must fail.
        assert!(std::str::from_utf8(&bytes).is_err());

        let result = extract(&bytes, "legado.txt").unwrap();
        assert_eq!(result.text, SAMPLE);
    }

    #[test]
    fn test_windows1252_bytes_still_decode() {
        // 0x93/0x94 are cp1252 curly quotes and invalid utf-8; the ladder
        // still produces usable text for the surrounding words.
        let mut bytes = vec![0x93];
        bytes.extend_from_slice(b"reuniao urgente do projeto");
        bytes.push(0x94);

        let result = extract(&bytes, "win.txt").unwrap();
        assert!(result.text.contains("reuniao urgente do projeto"));
    }

    #[test]
    fn test_ladder_never_loses_ascii() {
        let ascii = "Favor enviar o contrato assinado ate segunda-feira.";
        for filename in ["a.txt", "b.eml", "c"] {
            let result = extract(ascii.as_bytes(), filename).unwrap();
            assert_eq!(result.text, ascii);
            assert_eq!(result.source_filename, filename);
        }
    }
}

mod detection_and_errors {
    use super::*;

    #[test]
    fn test_zero_byte_upload_fails_before_detection() {
        // Empty input is rejected outright; the pdf-looking filename is never
        // consulted.
        for filename in ["vazio.pdf", "vazio.docx", "vazio.txt"] {
            let result = extract(&[], filename);
            assert!(
                matches!(result, Err(ExtractError::EmptyFile)),
                "expected EmptyFile for {}",
                filename
            );
        }
    }

    #[test]
    fn test_detection_ignores_filename_extension() {
        // PDF bytes under a .txt name are still treated as PDF.
        let result = extract(b"%PDF-1.4 not really a pdf", "disfarce.txt");
        match result {
            Err(ExtractError::ExtractionFailed { format, .. }) => assert_eq!(format, "pdf"),
            other => panic!("Expected pdf ExtractionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_pdf_chain_reports_strategies_in_order() {
        let result = extract(b"%PDF-1.7 corrompido", "quebrado.pdf");
        match result {
            Err(ExtractError::ExtractionFailed { format, reason }) => {
                assert_eq!(format, "pdf");
                let first = reason.find("pdf-extract").expect("pdf-extract missing");
                let second = reason.find("lopdf").expect("lopdf missing");
                assert!(
                    first < second,
                    "layout-aware strategy must be tried first: {}",
                    reason
                );
            }
            other => panic!("Expected pdf ExtractionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_pdf_mime_is_stable() {
        assert_eq!(crate::text_extract::detect_mime(b"%PDF-1.4"), MIME_PDF);
    }
}

mod docx_round_trip {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_generated_docx_extracts_paragraphs() {
        let docx = docx_rs::Docx::new()
            .add_paragraph(
                docx_rs::Paragraph::new()
                    .add_run(docx_rs::Run::new().add_text("Reunião de alinhamento do projeto.")),
            )
            .add_paragraph(
                docx_rs::Paragraph::new()
                    .add_run(docx_rs::Run::new().add_text("Prazo de entrega: sexta-feira.")),
            );

        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("pack docx");
        let bytes = buf.into_inner();

        let result = extract(&bytes, "pauta.docx").unwrap();
        assert!(result.text.contains("Reunião de alinhamento do projeto."));
        assert!(result.text.contains("Prazo de entrega: sexta-feira."));
    }
}
