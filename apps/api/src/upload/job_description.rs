use crate::models::notice::Notice;
use crate::models::upload::{UploadedFile, DOCX_MIME, PDF_MIME, TEXT_MIME};
use crate::upload::files::invalid_type_notice;

/// Result of loading a job description document.
#[derive(Debug, Clone, PartialEq)]
pub enum JobDescriptionUpdate {
    /// Plain text: replaces the job description.
    Text { text: String, notice: Notice },
    /// PDF/DOCX: kept as a selected job file; the text is left alone.
    Selected { file: UploadedFile, notice: Notice },
    /// Anything else: nothing changes.
    Rejected { notice: Notice },
}

impl JobDescriptionUpdate {
    pub fn notice(&self) -> &Notice {
        match self {
            JobDescriptionUpdate::Text { notice, .. }
            | JobDescriptionUpdate::Selected { notice, .. }
            | JobDescriptionUpdate::Rejected { notice } => notice,
        }
    }
}

/// Interprets an uploaded job description file. Only text files are read locally.
pub fn load_job_description_file(file: UploadedFile) -> JobDescriptionUpdate {
    match file.essence().as_str() {
        TEXT_MIME => {
            let text = String::from_utf8_lossy(&file.data).into_owned();
            JobDescriptionUpdate::Text {
                text,
                notice: Notice::info(
                    "Job description uploaded",
                    format!("Extracted content from: {}", file.name),
                ),
            }
        }
        PDF_MIME | DOCX_MIME => {
            let notice = Notice::info(
                "Job description file selected",
                format!("{} selected. Paste its text to screen against it.", file.name),
            );
            JobDescriptionUpdate::Selected { file, notice }
        }
        _ => JobDescriptionUpdate::Rejected {
            notice: Notice::destructive(
                invalid_type_notice().title,
                "Job descriptions must be TXT, PDF or DOCX files.",
            ),
        },
    }
}
