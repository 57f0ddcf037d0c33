//! Remote endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The monitoring API and the identity provider are separate services. Their
//! base URLs are baked in at compile time (`EYEONDESK_API_BASE`,
//! `EYEONDESK_AUTH_BASE`) because the WASM bundle has no process environment
//! to read at runtime. `App` provides one `ClientConfig` through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

/// API base used when `EYEONDESK_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Identity provider base used when `EYEONDESK_AUTH_BASE` is not set.
pub const DEFAULT_AUTH_BASE: &str = "http://localhost:8000/auth";

/// Base URLs for every remote service the UI talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub auth_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_AUTH_BASE)
    }
}

impl ClientConfig {
    /// Build a config, dropping trailing slashes so endpoint joins stay clean.
    pub fn new(api_base: &str, auth_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_owned(),
            auth_base: auth_base.trim_end_matches('/').to_owned(),
        }
    }

    /// Resolve the config from build-time environment, falling back to defaults.
    pub fn from_build_env() -> Self {
        Self::new(
            non_empty(option_env!("EYEONDESK_API_BASE")).unwrap_or(DEFAULT_API_BASE),
            non_empty(option_env!("EYEONDESK_AUTH_BASE")).unwrap_or(DEFAULT_AUTH_BASE),
        )
    }

    pub fn coordinates_url(&self) -> String {
        format!("{}/coordinates", self.api_base)
    }

    pub fn video_stream_url(&self) -> String {
        format!("{}/video-stream", self.api_base)
    }

    pub fn status_stream_url(&self) -> String {
        format!("{}/space-status/stream", self.api_base)
    }

    pub fn session_url(&self) -> String {
        format!("{}/session", self.auth_base)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.auth_base)
    }

    /// Provider sign-in page that sends the user back to `return_to` afterwards.
    ///
    /// # Errors
    ///
    /// Fails when `auth_base` is not an absolute URL.
    pub fn sign_in_url(&self, return_to: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.auth_base)?;
        let path = format!("{}/login", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url.query_pairs_mut().clear().append_pair("redirect", return_to);
        Ok(url)
    }
}

/// Browser console log level, from `EYEONDESK_LOG` at build time.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("EYEONDESK_LOG"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|v| !v.trim().is_empty())
}
