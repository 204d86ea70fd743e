//! Independent utility helpers.
//!
//! - [`env`] - Environment lookup with fallback
//! - [`fs`] - Temporary file and folder cleanup
//! - [`archive`] - Zip extraction with zip-slip protection
//! - [`fetch`] - JSON-oriented HTTP GET/POST

pub use satchel_archive as archive;
pub use satchel_fetch as fetch;
pub use satchel_fs as fs;
pub use satchel_platform::env;

pub use satchel_archive::unzip;
pub use satchel_fetch::{get, post};
pub use satchel_fs::{cleanup, cleanup_folder};
pub use satchel_platform::get_env;
