use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_APP_NAME: &str = "YouTube Shorts Analyzer";

lazy_static! {
    pub static ref ENV_CONFIG: EnvConfig = EnvConfig::from_window();
    pub static ref BACKEND_URL: String = ENV_CONFIG.backend_url.clone();
}

/// Deployment settings the hosting page injects as `window.ENV_CONFIG`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub backend_url: String,
    pub app_name: String,
    pub debug: bool,
}

impl EnvConfig {
    pub fn from_window() -> Self {
        Self::from_lookup(window_env_var)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        EnvConfig {
            backend_url,
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            debug: lookup("DEBUG_MODE")
                .map(|flag| matches!(flag.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),
        }
    }
}

fn window_env_var(key: &str) -> Option<String> {
    let env_config = js_sys::Reflect::get(&window()?.into(), &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined, using built-in defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into())
        .ok()
        .and_then(|value| value.as_string());
    if value.is_none() {
        log::warn!("ENV_CONFIG has no string value for '{key}'");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        EnvConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert!(!config.debug);
    }

    #[test]
    fn normalizes_injected_values() {
        let config = config_from(&[
            ("BACKEND_URL", " https://api.example.test/ "),
            ("APP_NAME", "Shorts"),
            ("DEBUG_MODE", "TRUE"),
        ]);
        assert_eq!(config.backend_url, "https://api.example.test");
        assert_eq!(config.app_name, "Shorts");
        assert!(config.debug);

        assert_eq!(config_from(&[("BACKEND_URL", "/")]).backend_url, DEFAULT_BACKEND_URL);
        assert!(!config_from(&[("DEBUG_MODE", "yes please")]).debug);
    }
}
