use std::env;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads the HTTP bind address from `APP_HOST`/`APP_PORT`, defaulting to
    /// 127.0.0.1:5000 when unset or unparsable.
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5000);
        AppConfig { host, port }
    }
}
