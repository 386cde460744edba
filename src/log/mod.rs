//! Benchmark log parsing: line shapes, the record store, and the
//! line-by-line parser that fills it.

pub mod line;
pub mod parse;
pub mod record;

pub use parse::parse_log_file;
pub use record::{DEFAULT_SECTION, Record, RecordStore};
