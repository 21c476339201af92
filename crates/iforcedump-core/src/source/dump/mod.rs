//! Text dump source implementation.
//!
//! Dumps are exported from USB capture tools as one packet per line:
//! a relative timestamp, a tab, then the payload as a hex string. Lines
//! that do not follow that shape (headers, footers, odd-length payloads)
//! are skipped; only I/O failures surface as errors.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{DumpFileSource, SourceStats};
