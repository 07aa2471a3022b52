//! Build-time configuration for the directory endpoints with an optional
//! runtime override. The runtime config is read from `window.USERDIR_CONFIG`
//! (if present) so static deployments can point at another backend without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Public user collection served by JSONPlaceholder.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
/// Greeting route served next to the frontend.
pub const DEFAULT_GREETING_PATH: &str = "/api/hello";
/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub users_url: String,
    pub api_base_url: String,
    pub greeting_path: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env() -> Self {
        let users_url = option_env!("USERDIR_USERS_URL")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_USERS_URL.to_string());
        let api_base_url = option_env!("USERDIR_API_BASE_URL").unwrap_or("");
        let greeting_path = option_env!("USERDIR_GREETING_PATH")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_GREETING_PATH.to_string());
        let log_level = option_env!("USERDIR_LOG")
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            users_url,
            api_base_url: api_base_url.trim().to_string(),
            greeting_path,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            api_base_url: String::new(),
            greeting_path: DEFAULT_GREETING_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    users_url: Option<String>,
    api_base_url: Option<String>,
    greeting_path: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.users_url {
        config.users_url = value;
    }
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.greeting_path {
        config.greeting_path = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USERDIR_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        users_url: read_runtime_value(&object, "users_url"),
        api_base_url: read_runtime_value(&object, "api_base_url"),
        greeting_path: read_runtime_value(&object, "greeting_path"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_GREETING_PATH, DEFAULT_USERS_URL, RuntimeConfig,
        apply_runtime_overrides, normalize_runtime_value,
    };

    fn base_config() -> AppConfig {
        AppConfig {
            users_url: "https://users.default/users".to_string(),
            api_base_url: "https://api.default".to_string(),
            greeting_path: "/api/hello".to_string(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://example.test/users "),
            Some("https://example.test/users".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            users_url: normalize_runtime_value(""),
            api_base_url: normalize_runtime_value("  "),
            greeting_path: normalize_runtime_value(""),
            log_level: normalize_runtime_value(" "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, base_config());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            users_url: normalize_runtime_value("https://users.override/list"),
            api_base_url: normalize_runtime_value("https://api.override"),
            greeting_path: normalize_runtime_value("/v1/hello"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.users_url, "https://users.override/list");
        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.greeting_path, "/v1/hello");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn default_points_at_public_users_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.users_url, DEFAULT_USERS_URL);
        assert_eq!(config.greeting_path, DEFAULT_GREETING_PATH);
        assert!(config.api_base_url.is_empty());
    }

    #[test]
    fn load_without_runtime_config_keeps_build_values() {
        assert_eq!(AppConfig::load(), AppConfig::from_build_env());
    }
}
