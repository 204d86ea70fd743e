use std::collections::HashMap;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::{Error, Result};

/// Caller-supplied request headers: name to values, in emission order.
pub type Headers = HashMap<String, Vec<String>>;

const JSON: &str = "application/json";

/// Defaults for `method`, overlaid with `extra`.
///
/// A name in `extra` replaces every default value under the same
/// (case-insensitive) name. An empty value list drops the header from the
/// map; for `Accept` the client then sends reqwest's own `*/*`. Two keys in
/// `extra` that differ only in case replace each other in unspecified
/// order.
pub(crate) fn request_headers(method: &Method, extra: &Headers) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON));
    if *method == Method::POST {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
    }

    for (name, values) in extra {
        let header = HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
            Error::InvalidHeaderName {
                name: name.clone(),
                source,
            }
        })?;

        headers.remove(&header);
        for value in values {
            let value =
                HeaderValue::from_str(value).map_err(|source| Error::InvalidHeaderValue {
                    name: name.clone(),
                    source,
                })?;
            headers.append(header.clone(), value);
        }
    }

    Ok(headers)
}
