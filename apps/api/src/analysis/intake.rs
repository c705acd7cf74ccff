//! Resume intake: turns an uploaded resume file into plain text.

use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    PlainText,
    Pdf,
    Other,
}

impl ResumeFormat {
    /// Detected from the file extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".txt") {
            ResumeFormat::PlainText
        } else if lower.ends_with(".pdf") {
            ResumeFormat::Pdf
        } else {
            ResumeFormat::Other
        }
    }
}

/// Extracts text from an uploaded resume.
///
/// `.txt` must be UTF-8, `.pdf` goes through PDF text extraction, anything
/// else is decoded lossily.
pub fn extract_resume_text(filename: &str, content: &[u8]) -> Result<String, AppError> {
    let format = ResumeFormat::from_filename(filename);
    debug!("Extracting {format:?} resume '{filename}' ({} bytes)", content.len());

    match format {
        ResumeFormat::PlainText => String::from_utf8(content.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity(format!("'{filename}' is not valid UTF-8 text"))
        }),
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(content).map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not read PDF '{filename}': {e:?}"))
        }),
        ResumeFormat::Other => Ok(String::from_utf8_lossy(content).into_owned()),
    }
}
