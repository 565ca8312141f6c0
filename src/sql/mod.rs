//! Fixed SQL statements kept outside the code, looked up by name.

mod named;
pub use named::NamedQueries;

/// Record statements, relative to the working directory like `config/`.
pub const RECORD_QUERY_FILE: &str = "queries/records.sql";

/// Parameter-free listing behind `raw_query`.
pub const LIST_RECORDS_RAW: &str = "list_records_raw";
