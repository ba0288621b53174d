/// Address of the account API used when `SHAPES_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8001/api/v1";

/// Build time configuration of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base url of the account API, without a trailing slash
    pub api_url: &'static str,
}

impl ClientConfig {
    /// Read the configuration baked in at compile time. The browser has no process environment so
    /// `SHAPES_API_URL` is resolved when the client is built.
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("SHAPES_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(api_url: &'static str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/'),
        }
    }

    /// Full url of an API `path` such as `/login`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
