//! "Run Prototype": pretend to analyse the uploaded files.
//!
//! The only failures are the readiness checks done before the wait; the
//! processing step itself is a stub that always succeeds.

use crate::domain::a003_uploaded_file::UploadedFile;
use crate::shared::simulation::Delay;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunPrototypeError {
    #[error("Please upload some files before running the prototype.")]
    NoFiles,
    #[error("Please wait until every file has finished uploading.")]
    UploadInProgress,
}

impl RunPrototypeError {
    /// Notification title
    pub fn title(&self) -> &'static str {
        match self {
            RunPrototypeError::NoFiles => "No files uploaded",
            RunPrototypeError::UploadInProgress => "Upload in progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub files_analyzed: usize,
    pub total_bytes: u64,
}

impl ProcessingReport {
    pub const TITLE: &'static str = "Processing Complete";
    pub const DESCRIPTION: &'static str = "Your files have been analyzed successfully!";
}

/// Synchronous gate of the run button
pub fn check_ready(files: &[UploadedFile]) -> Result<(), RunPrototypeError> {
    if files.is_empty() {
        return Err(RunPrototypeError::NoFiles);
    }
    if files.iter().any(UploadedFile::is_uploading) {
        return Err(RunPrototypeError::UploadInProgress);
    }
    Ok(())
}

pub async fn run_prototype<D: Delay>(
    delay: &D,
    processing_ms: u32,
    files: &[UploadedFile],
) -> Result<ProcessingReport, RunPrototypeError> {
    check_ready(files)?;

    log::info!("processing {} uploaded file(s)", files.len());
    delay.wait(processing_ms).await;

    Ok(ProcessingReport {
        files_analyzed: files.len(),
        total_bytes: files.iter().map(|f| f.size).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_uploaded_file::{FileMeta, UploadQueue};
    use crate::shared::simulation::testing::RecordingDelay;
    use futures::executor::block_on;

    fn finished_queue() -> UploadQueue {
        let mut queue = UploadQueue::new();
        let ids = queue.enqueue(vec![
            FileMeta::new("plan.pdf", 1000, "application/pdf"),
            FileMeta::new("team.csv", 24, "text/csv"),
        ]);
        for id in ids {
            queue.advance(id, 100.0);
        }
        queue
    }

    #[test]
    fn test_no_files_fails_without_waiting() {
        let delay = RecordingDelay::default();
        let result = block_on(run_prototype(&delay, 3000, &[]));
        assert_eq!(result, Err(RunPrototypeError::NoFiles));
        assert!(delay.waits().is_empty());
        assert_eq!(RunPrototypeError::NoFiles.title(), "No files uploaded");
    }

    #[test]
    fn test_blocked_while_uploading() {
        let mut queue = finished_queue();
        queue.enqueue(vec![FileMeta::new("late.docx", 10, "")]);
        assert_eq!(check_ready(queue.files()), Err(RunPrototypeError::UploadInProgress));
    }

    #[test]
    fn test_success_after_processing_delay() {
        let delay = RecordingDelay::default();
        let queue = finished_queue();
        let report = block_on(run_prototype(&delay, 3000, queue.files())).unwrap();
        assert_eq!(report.files_analyzed, 2);
        assert_eq!(report.total_bytes, 1024);
        assert_eq!(delay.waits(), [3000]);
    }
}
