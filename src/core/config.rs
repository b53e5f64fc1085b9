//! Application configuration from environment variables.
//!
//! The backend base URL comes from `SERVER_ENDPOINT`. The server reads it at
//! runtime (after `dotenvy::dotenv()`), falling back to the value baked in at
//! build time, and publishes the result to the page as
//! `window.AUTH_CONFIG` (see [`Config::to_script`]). The browser bundle reads
//! that object back in [`Config::load`], so the runtime value wins there too.
//! Configuration values are public; do not store secrets here.

/// Environment variable holding the backend base URL
pub const SERVER_ENDPOINT_VAR: &str = "SERVER_ENDPOINT";

/// Global the server-rendered page uses to hand configuration to the browser
pub const RUNTIME_CONFIG_KEY: &str = "AUTH_CONFIG";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Backend API base URL, e.g. `https://api.example.com`.
    /// `None` means requests go to the same origin.
    pub server_endpoint: Option<String>,
}

impl Config {
    /// Configuration baked into the binary at compile time
    pub fn build_time() -> Self {
        Self {
            server_endpoint: normalize(option_env!("SERVER_ENDPOINT")),
        }
    }

    /// Load configuration from environment variables, falling back to
    /// the build-time value for anything unset.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        let runtime = normalize(std::env::var(SERVER_ENDPOINT_VAR).ok().as_deref());
        Self {
            server_endpoint: runtime.or_else(|| Self::build_time().server_endpoint),
        }
    }

    /// Configuration for the current target. In the browser this is what the
    /// server published on the page, or the build-time value without it.
    pub fn load() -> Self {
        if cfg!(target_arch = "wasm32") {
            runtime_config().unwrap_or_else(Self::build_time)
        } else {
            Self::from_env()
        }
    }

    /// Check if a backend endpoint is configured
    pub fn has_server_endpoint(&self) -> bool {
        self.server_endpoint.is_some()
    }

    /// Base URL with any trailing slash removed, `""` for same-origin
    pub fn base_url(&self) -> &str {
        self.server_endpoint
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or("")
    }

    /// Full URL for an API path such as `/api/sessions`
    pub fn api_url(&self, path: &str) -> String {
        let base = self.base_url();
        let path = path.trim();

        if base.is_empty() {
            format!("/{}", path.trim_start_matches('/'))
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }

    /// Inline script assigning this config to `window.AUTH_CONFIG`
    pub fn to_script(&self) -> String {
        let endpoint = serde_json::to_string(&self.server_endpoint)
            .unwrap_or_else(|_| "null".to_string())
            // keep the value from closing the surrounding <script>
            .replace('<', "\\u003c");
        format!("window.{RUNTIME_CONFIG_KEY}={{\"server_endpoint\":{endpoint}}};")
    }
}

/// Treat blank values as unset
fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<Config> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let endpoint = Reflect::get(&config, &JsValue::from_str("server_endpoint"))
        .ok()?
        .as_string();

    Some(Config {
        server_endpoint: normalize(endpoint.as_deref()),
    })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<Config> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_endpoint(endpoint: &str) -> Config {
        Config {
            server_endpoint: Some(endpoint.to_string()),
        }
    }

    #[test]
    fn test_api_url_joins_base_and_path() {
        let config = with_endpoint("http://localhost:1337");
        assert_eq!(
            config.api_url("/api/sessions"),
            "http://localhost:1337/api/sessions"
        );
    }

    #[test]
    fn test_api_url_ignores_trailing_slash() {
        let config = with_endpoint("http://localhost:1337/");
        assert_eq!(
            config.api_url("/api/users"),
            "http://localhost:1337/api/users"
        );
        assert_eq!(config.api_url("api/users"), "http://localhost:1337/api/users");
    }

    #[test]
    fn test_api_url_keeps_base_path_prefix() {
        let config = with_endpoint("https://example.com/backend");
        assert_eq!(
            config.api_url("/api/users"),
            "https://example.com/backend/api/users"
        );
    }

    #[test]
    fn test_api_url_without_endpoint_is_relative() {
        let config = Config::default();
        assert!(!config.has_server_endpoint());
        assert_eq!(config.base_url(), "");
        assert_eq!(config.api_url("/api/sessions"), "/api/sessions");
        assert_eq!(config.api_url("api/sessions"), "/api/sessions");
    }

    #[test]
    fn test_normalize_blank_values() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   ")), None);
        assert_eq!(
            normalize(Some(" http://api.local ")),
            Some("http://api.local".to_string())
        );
    }

    #[test]
    fn test_script_publishes_endpoint() {
        let script = with_endpoint("http://api.local:1337").to_script();
        assert_eq!(
            script,
            r#"window.AUTH_CONFIG={"server_endpoint":"http://api.local:1337"};"#
        );
    }

    #[test]
    fn test_script_publishes_missing_endpoint_as_null() {
        assert_eq!(
            Config::default().to_script(),
            r#"window.AUTH_CONFIG={"server_endpoint":null};"#
        );
    }

    #[test]
    fn test_script_cannot_close_script_tag() {
        let script = with_endpoint("http://x/</script><script>alert(1)").to_script();
        assert!(!script.contains("</script>"));
        assert!(script.contains("\\u003c/script>"));
    }

    #[test]
    fn test_load_on_server_reads_environment() {
        // Outside the browser, load() and from_env() agree
        assert_eq!(Config::load(), Config::from_env());
    }

    #[test]
    fn test_config_clone() {
        let config = with_endpoint("http://localhost:1337");
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
