//! PDF text extraction for uploaded resumes.

use crate::errors::AppError;

/// Extracts plain text from PDF bytes. Empty extractions are rejected so
/// image-only scans fail loudly instead of producing empty prompts.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Pdf(format!("could not extract text from PDF: {e}")))?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Pdf(
            "PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(extract_text(b"not a pdf"), Err(AppError::Pdf(_))));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(extract_text(b""), Err(AppError::Pdf(_))));
    }
}
