pub mod aggregate;
pub mod format;
pub mod queue;

pub use aggregate::{FileMeta, UploadId, UploadStatus, UploadedFile};
pub use format::{format_file_size, FileKind, ACCEPTED_EXTENSIONS};
pub use queue::{run_upload_ticker, upload_step, TickOutcome, UploadQueue};
