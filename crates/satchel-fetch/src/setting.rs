use std::time::Duration;

use reqwest::Proxy;
use reqwest::Url;
use reqwest::blocking::Client;
use satchel_platform::{get_env_parsed, lookup_env};

use crate::client::HttpClient;
use crate::error::{Error, Result};

pub const TIMEOUT_ENV: &str = "SATCHEL_HTTP_TIMEOUT_SECS";
pub const PROXY_ENV: &str = "SATCHEL_HTTP_PROXY";
pub const USER_AGENT_ENV: &str = "SATCHEL_HTTP_USER_AGENT";

/// Client configuration. Anything left unset keeps reqwest's default.
#[derive(Clone, Debug, Default)]
pub struct ClientSetting {
    pub proxies: Vec<Url>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl ClientSetting {
    /// Settings read from `SATCHEL_HTTP_*` environment variables.
    ///
    /// A timeout of `0` or an unparsable proxy URL is ignored.
    pub fn from_env() -> Self {
        let mut setting = Self::default();

        let secs: u64 = get_env_parsed(TIMEOUT_ENV, 0);
        if secs > 0 {
            setting.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup_env(PROXY_ENV) {
            match Url::parse(&raw) {
                Ok(url) => setting.proxies.push(url),
                Err(e) => tracing::warn!(proxy = %raw, error = %e, "ignoring invalid proxy URL"),
            }
        }

        setting.user_agent = lookup_env(USER_AGENT_ENV);
        setting
    }

    pub fn proxy(mut self, url: Url) -> Self {
        self.proxies.push(url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut cb = Client::builder();

        for url in self.proxies {
            let proxy = Proxy::all(url.clone()).map_err(|source| Error::Proxy {
                url: url.to_string(),
                source,
            })?;
            cb = cb.proxy(proxy);
        }

        if let Some(timeout) = self.timeout {
            cb = cb.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            cb = cb.user_agent(user_agent);
        }

        let client = cb.build().map_err(Error::ClientBuild)?;
        Ok(HttpClient::from_client(client))
    }
}
