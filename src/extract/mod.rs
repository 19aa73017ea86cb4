// Text extraction — turns an uploaded byte payload into plain text.
//
// Dispatch is by file extension, checked against a small whitelist before
// any parsing is attempted. Every failure here is a client-facing error:
// a malformed document or an undecodable payload is the uploader's problem,
// not a server fault.

use thiserror::Error;

pub mod docx;
pub mod pdf;

/// The document formats the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Determine the document kind from a filename's extension.
    /// Returns None for anything outside the whitelist, including
    /// filenames with no extension at all.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }
}

/// Errors produced while extracting text from an upload.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not parse PDF document: {0}")]
    Pdf(String),
    #[error("Could not parse DOCX document: {0}")]
    Docx(String),
    #[error("File is not valid UTF-8 text")]
    InvalidUtf8,
}

/// Extract plain text from a document payload.
///
/// The result is trimmed of leading and trailing whitespace. An empty
/// string is a valid result meaning nothing could be extracted — callers
/// decide how to surface that.
pub fn extract_text(data: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
    let text = match kind {
        DocumentKind::Pdf => pdf::extract(data)?,
        DocumentKind::Docx => docx::extract(data)?,
        DocumentKind::Txt => std::str::from_utf8(data)
            .map_err(|_| ExtractError::InvalidUtf8)?
            .to_string(),
    };
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_whitelisted_extensions() {
        assert_eq!(DocumentKind::from_filename("a.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_filename("report.docx"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_filename("notes.txt"), Some(DocumentKind::Txt));
    }

    #[test]
    fn kind_is_case_insensitive() {
        assert_eq!(
            DocumentKind::from_filename("REPORT.PDF"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn kind_rejects_everything_else() {
        assert_eq!(DocumentKind::from_filename("data.csv"), None);
        assert_eq!(DocumentKind::from_filename("archive.tar.gz"), None);
        assert_eq!(DocumentKind::from_filename("no_extension"), None);
        assert_eq!(DocumentKind::from_filename(""), None);
    }

    #[test]
    fn txt_extraction_trims() {
        let text = extract_text(b"  hello world \n", DocumentKind::Txt).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn txt_extraction_rejects_invalid_utf8() {
        let err = extract_text(&[0xff, 0xfe, 0x00], DocumentKind::Txt).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUtf8));
    }
}
