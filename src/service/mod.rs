//! RecordService: orchestration seam between handlers and the repository.

mod records;
pub use records::{RecordService, Records};
