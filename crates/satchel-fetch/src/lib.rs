//! Blocking HTTP GET/POST helpers with JSON defaults.
//!
//! # Architecture
//!
//! - [`ClientSetting`] - Client configuration (proxies, timeout, user agent)
//! - [`HttpClient`] - Reusable client issuing the requests
//! - [`get`] / [`post`] - One-shot helpers on a fresh client
//!
//! No retries and no authentication: callers add their own headers.

mod client;
mod error;
mod headers;
mod setting;

pub use client::{HttpClient, get, post};
pub use error::{Error, Result};
pub use headers::Headers;
pub use setting::{ClientSetting, PROXY_ENV, TIMEOUT_ENV, USER_AGENT_ENV};

pub use reqwest::StatusCode;
pub use reqwest::blocking::Response;
