// DOCX text extraction via the docx-rs crate.
//
// A DOCX body is a sequence of paragraphs; each paragraph is a sequence of
// runs holding the actual text. Paragraph texts are joined with single
// spaces, and empty paragraphs stay in the join — the trailing trim happens
// once at the dispatch level.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

use super::ExtractError;

/// Extract the paragraph text of a DOCX payload.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            paragraphs.push(paragraph_text(paragraph));
        }
    }

    debug!(paragraphs = paragraphs.len(), "Extracted DOCX text");
    Ok(paragraphs.join(" "))
}

/// Collect the text of every run in a paragraph.
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = extract(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
