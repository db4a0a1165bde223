use crate::models::notice::Notice;
use crate::models::upload::UploadedFile;

#[derive(Debug, Clone)]
pub struct AddFilesOutcome {
    pub files: Vec<UploadedFile>,
    /// Set when at least one incoming file had an unsupported type.
    pub notice: Option<Notice>,
    pub accepted: usize,
    pub rejected: usize,
}

pub fn invalid_type_notice() -> Notice {
    Notice::destructive("Invalid file type", "Only PDF and DOCX files are supported.")
}

/// Appends the PDF/DOCX files from `incoming` whose names are not already present.
///
/// Unsupported types are dropped with a single notice for the whole batch; the valid
/// files in the same batch are still accepted. `existing` is never modified.
pub fn add_files(existing: &[UploadedFile], incoming: Vec<UploadedFile>) -> AddFilesOutcome {
    let (valid, invalid): (Vec<_>, Vec<_>) =
        incoming.into_iter().partition(|file| file.is_resume_type());

    let notice = (!invalid.is_empty()).then(invalid_type_notice);

    let mut files = existing.to_vec();
    let mut accepted = 0;
    for file in valid {
        if files.iter().any(|f| f.name == file.name) {
            continue;
        }
        files.push(file);
        accepted += 1;
    }

    AddFilesOutcome {
        files,
        notice,
        accepted,
        rejected: invalid.len(),
    }
}

/// Returns the list without the file named `name` (exact match).
pub fn remove_file(existing: &[UploadedFile], name: &str) -> Vec<UploadedFile> {
    existing.iter().filter(|f| f.name != name).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::upload::{DOCX_MIME, PDF_MIME};
    use bytes::Bytes;

    fn file(name: &str, mime: &str) -> UploadedFile {
        UploadedFile::new(name, mime, Bytes::from(name.as_bytes().to_vec()))
    }

    fn names(files: &[UploadedFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_accepts_pdf_and_docx_in_order() {
        let existing = vec![file("a.pdf", PDF_MIME)];
        let outcome = add_files(&existing, vec![file("b.docx", DOCX_MIME), file("c.pdf", PDF_MIME)]);
        assert_eq!(names(&outcome.files), vec!["a.pdf", "b.docx", "c.pdf"]);
        assert_eq!(outcome.accepted, 2);
        assert!(outcome.notice.is_none());
        // input untouched
        assert_eq!(existing.len(), 1);
    }

    #[test]
    fn test_duplicate_name_does_not_grow_list() {
        let existing = vec![file("a.pdf", PDF_MIME)];
        let outcome = add_files(&existing, vec![file("a.pdf", PDF_MIME)]);
        assert_eq!(outcome.files.len(), 1);
        assert_eq!(outcome.accepted, 0);
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_duplicates_within_one_batch_are_collapsed() {
        let outcome = add_files(&[], vec![file("a.pdf", PDF_MIME), file("a.pdf", PDF_MIME)]);
        assert_eq!(names(&outcome.files), vec!["a.pdf"]);
    }

    #[test]
    fn test_unsupported_type_leaves_list_unchanged_with_one_notice() {
        let existing = vec![file("a.pdf", PDF_MIME)];
        let outcome = add_files(
            &existing,
            vec![file("notes.txt", "text/plain"), file("photo.png", "image/png")],
        );
        assert_eq!(outcome.files, existing);
        assert_eq!(outcome.rejected, 2);
        assert_eq!(outcome.notice, Some(invalid_type_notice()));
    }

    #[test]
    fn test_mixed_batch_keeps_valid_files() {
        let outcome = add_files(&[], vec![file("x.exe", "application/octet-stream"), file("cv.pdf", PDF_MIME)]);
        assert_eq!(names(&outcome.files), vec!["cv.pdf"]);
        assert_eq!(outcome.rejected, 1);
        assert!(outcome.notice.is_some());
    }

    #[test]
    fn test_remove_exact_name_only() {
        let existing = vec![file("a.pdf", PDF_MIME), file("A.pdf", PDF_MIME)];
        let updated = remove_file(&existing, "a.pdf");
        assert_eq!(names(&updated), vec!["A.pdf"]);
        assert_eq!(existing.len(), 2);
        assert_eq!(remove_file(&existing, "missing.pdf").len(), 2);
    }
}
