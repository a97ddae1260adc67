pub mod cli;
pub mod config;
pub mod export;
pub mod extract;
pub mod logging;
pub mod network;
pub mod record;

// Re-export main types for library usage
pub use export::{delimited_rows, write_delimited, write_delimited_file, write_json, write_json_file, ExportError};
pub use extract::extract_record;
pub use network::{FetchError, FetchResult, HttpClient};
pub use record::ExtractedRecord;
