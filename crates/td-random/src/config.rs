//! Configuration for a random source.

use crate::url::DEFAULT_BASE_URL;

/// Configuration for a [`RandomSource`](crate::RandomSource).
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Service root, without a trailing path.
    pub base_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Seed for the local generator; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether `request` goes to the service first.
    pub online: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("truedice/{}", env!("CARGO_PKG_VERSION")),
            seed: None,
            online: true,
        }
    }
}

impl SourceConfig {
    /// Set the service root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Seed the local generator for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use only the local generator.
    pub fn offline(mut self) -> Self {
        self.online = false;
        self
    }
}
