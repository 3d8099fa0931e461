//! Configuration for a creation session.

/// Invalid answers tolerated per prompt before giving up.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Configuration for a creation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationConfig {
    /// RNG seed for reproducible stat rolls; `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Invalid answers allowed per prompt; `None` never gives up.
    pub max_retries: Option<u32>,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_retries: Some(DEFAULT_MAX_RETRIES),
        }
    }
}

impl CreationConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the retry budget per prompt.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Re-ask forever instead of giving up.
    pub fn unbounded_retries(mut self) -> Self {
        self.max_retries = None;
        self
    }
}
