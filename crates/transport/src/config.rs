/// Where the chat service is deployed.
const DEFAULT_BASE_URL: &str = "https://personal-website-chatbot.fly.dev";

/// Configuration for [`RemoteChat`](crate::RemoteChat).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    /// Creates a configuration pointing at a custom host.
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended
    /// blindly.
    #[inline]
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        let mut base_url = base_url.into();
        base_url.truncate(base_url.trim_end_matches('/').len());
        Self { base_url }
    }

    /// Returns the service base URL, without a trailing slash.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ServiceConfig {
    /// Points at the deployed service.
    #[inline]
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
