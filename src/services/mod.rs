pub mod report;
pub mod scanner;
pub mod walker;

pub use report::{format_text_line, write_text, ReportContext, ReportRow, ReportService};
pub use scanner::{hex_tokens, scan_line, LineMatch, Scanner};
pub use walker::{collect_files, WalkResult};
