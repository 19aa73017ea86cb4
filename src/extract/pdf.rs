// PDF text extraction via the pdf-extract crate.
//
// pdf-extract walks the page tree and concatenates per-page text itself;
// pages without extractable text contribute nothing, which is exactly the
// behavior we want (scanned-image pages are skipped, not errors).

use tracing::debug;

use super::ExtractError;

/// Extract the text of every page in a PDF payload.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    debug!(chars = text.len(), "Extracted PDF text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = extract(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
