//! Zip extraction with path sanitization.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Entry path resolution (zip-slip prevention)
//! - `extract.rs` - Entry-by-entry extraction to disk
//! - `error.rs` - Error types, including partial results

pub use error::{Error, Interrupted, Result};
pub use extract::{unzip, unzip_reader};
pub use sanitize::resolve_entry_path;

mod error;
mod extract;
mod sanitize;
