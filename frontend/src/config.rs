use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::OnceLock, time::Duration};
use thiserror::Error;

pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub debounce_ms: u32,
    pub log_level: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("debounce delay must be greater than zero")]
    ZeroDelay,
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

impl LoginConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        self.log_level()?;
        Ok(self)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

static CONFIG: OnceLock<LoginConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<Result<LoginConfig, ConfigError>> {
    // Optional global object: window.__LOGIN_ENV = { debounce_ms: 500, log_level: "debug" }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__LOGIN_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    Some(LoginConfig::from_json(&raw))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<Result<LoginConfig, ConfigError>> {
    None
}

/// Resolves the runtime config once and caches it. Invalid overrides fall
/// back to defaults; the returned error lets the caller report it once
/// logging is up.
pub fn init() -> (LoginConfig, Option<ConfigError>) {
    if let Some(cached) = CONFIG.get() {
        return (cached.clone(), None);
    }
    let (config, error) = match snapshot_from_globals() {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (LoginConfig::default(), Some(err)),
        None => (LoginConfig::default(), None),
    };
    (CONFIG.get_or_init(|| config).clone(), error)
}

pub fn current() -> LoginConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
