//! Cleanup of temporary files and folders.
//!
//! Failures are returned as values. Callers that want a failed cleanup to
//! terminate the process opt in through [`FailurePolicy::Abort`] or
//! [`exit_on_failure`].
//!
//! [`ScratchDir`] and [`ScratchFile`] tie a temporary resource to a scope:
//! the resource is released on `close()` or, failing that, on drop.

mod cleanup;
mod error;
mod scratch;
#[cfg(test)]
mod test_util;

pub use cleanup::{FailurePolicy, cleanup, cleanup_folder, exit_on_failure};
pub use error::{Error, Result};
pub use scratch::{ScratchDir, ScratchFile};
