//! Backend API location.
//!
//! A WASM bundle has no process environment at runtime, so the base URL is
//! fixed at build time: `DOCTOR_PORTAL_API_BASE_URL` when set while compiling,
//! otherwise the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Where the REST endpoints live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Config baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::new(resolve_base_url(option_env!("DOCTOR_PORTAL_API_BASE_URL")))
    }

    /// Absolute URL for an API `path` such as `/api/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn resolve_base_url(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE_URL,
    }
}
