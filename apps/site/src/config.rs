use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
const API_PREFIX: &str = "api";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn log_level(self) -> tracing::Level {
        match self {
            Self::Dev => tracing::Level::DEBUG,
            Self::Prod => tracing::Level::INFO,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub profile: AppProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            profile: AppProfile::Dev,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = read_env("FUNDWISE_BACKEND_URL").filter(|url| !url.trim().is_empty()) {
            config.backend_url = url.trim().to_string();
        }

        config.profile = AppProfile::from_env(read_env("FUNDWISE_PROFILE"));

        config
    }

    /// Base of every backend route, e.g. `https://host/api`.
    pub fn api_base_url(&self) -> String {
        format!("{}/{}", self.backend_url.trim_end_matches('/'), API_PREFIX)
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "FUNDWISE_BACKEND_URL" => option_env!("FUNDWISE_BACKEND_URL"),
        "FUNDWISE_PROFILE" => option_env!("FUNDWISE_PROFILE"),
        _ => None,
    }
}

/// Loads `.env` into the process env. Returns the problem to report once logging is up;
/// a missing file is not one.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> Option<String> {
    dotenv_issue(dotenvy::dotenv().map(|_| ()))
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn dotenv_issue(result: Result<(), dotenvy::Error>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(dotenvy::Error::Io(ref io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
            None
        }
        Err(err) => Some(err.to_string()),
    }
}
