use bytes::Bytes;
use serde::Serialize;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

/// MIME types accepted for resume uploads.
pub const RESUME_MIME_TYPES: &[&str] = &[PDF_MIME, DOCX_MIME];

/// A file selected by the user, either a resume or a job description document.
///
/// The MIME type is whatever the client declared for the part; no sniffing happens here.
/// Files are identified by name and never mutated after selection.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size: usize,
    pub mime_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            name: name.into(),
            size: data.len(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Size in kilobytes with one decimal, e.g. `"12.5 KB"`.
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }

    /// The MIME type with any parameters (`; charset=...`) stripped and lowercased.
    pub fn essence(&self) -> String {
        self.mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    pub fn is_resume_type(&self) -> bool {
        RESUME_MIME_TYPES.contains(&self.essence().as_str())
    }
}

/// Display-facing description of an uploaded file. Contents are never echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub name: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size_label: String,
}

impl From<&UploadedFile> for FileSummary {
    fn from(file: &UploadedFile) -> Self {
        Self {
            name: file.name.clone(),
            size: file.size,
            mime_type: file.mime_type.clone(),
            size_label: file.size_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label_one_decimal() {
        let file = UploadedFile::new("cv.pdf", PDF_MIME, Bytes::from(vec![0u8; 1536]));
        assert_eq!(file.size, 1536);
        assert_eq!(file.size_label(), "1.5 KB");
    }

    #[test]
    fn test_essence_strips_parameters() {
        let file = UploadedFile::new("jd.txt", "Text/Plain; charset=utf-8", Bytes::new());
        assert_eq!(file.essence(), "text/plain");
    }

    #[test]
    fn test_resume_types() {
        assert!(UploadedFile::new("a.pdf", PDF_MIME, Bytes::new()).is_resume_type());
        assert!(UploadedFile::new("a.docx", DOCX_MIME, Bytes::new()).is_resume_type());
        assert!(!UploadedFile::new("a.doc", "application/msword", Bytes::new()).is_resume_type());
        assert!(!UploadedFile::new("a.txt", TEXT_MIME, Bytes::new()).is_resume_type());
    }
}
