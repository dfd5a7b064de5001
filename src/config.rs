use std::env;

/// Console configuration, read from the environment (a `.env` file is
/// honored when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL including the `/api` prefix, no trailing slash.
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let base_url = match env::var("TZTS_API_URL") {
            Ok(url) => url.trim_end_matches('/').to_string(),
            Err(_) => {
                log::warn!("No TZTS_API_URL set, using http://127.0.0.1:8000/api");
                "http://127.0.0.1:8000/api".to_string()
            }
        };

        AppConfig {
            base_url,
            username: env::var("TZTS_USERNAME").ok(),
            password: env::var("TZTS_PASSWORD").ok(),
        }
    }
}
