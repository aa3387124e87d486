//! Filesystem boundary: tree walking, bounded file reading, and report
//! writers.

pub mod output;
pub mod reader;
pub mod walker;

pub use output::{create_writer, ReportFormat, ReportWriter};
pub use reader::{read_source, MAX_FILE_SIZE_BYTES};
pub use walker::SourceTree;
