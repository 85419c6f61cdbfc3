use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "https://www.mbpay.world";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Clone, Deserialize)]
pub struct MbpayConfig {
    pub base_url: String,
    pub app_id: String,
    pub app_secret: String,
    pub timeout_ms: u64,
}

impl MbpayConfig {
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Reads `MBPAY_BASE_URL`, `MBPAY_APP_ID`, `MBPAY_APP_SECRET` and `MBPAY_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_ms", DEFAULT_TIMEOUT_MS as i64)?
            .add_source(config::Environment::with_prefix("MBPAY"))
            .build()?;

        config.try_deserialize()
    }

    /// Base URL without a trailing slash, ready for `format!("{}{}", base, path)`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

// Keeps the secret out of log output.
impl std::fmt::Debug for MbpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbpayConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_secret", &"***")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

pub type SharedConfig = Arc<MbpayConfig>;
