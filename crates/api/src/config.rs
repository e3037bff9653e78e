/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// Requests that carry no `Origin` header bypass this list entirely.
    pub cors_origins: Vec<String>,
    /// Path to the seed dataset read once at startup (default:
    /// `data/movies.json`).
    pub seed_path: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                                          |
    /// |------------------------|------------------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                                         |
    /// | `PORT`                 | `3000`                                                            |
    /// | `CORS_ORIGINS`         | `http://localhost:8080,http://localhost:3000,https://movies.com`  |
    /// | `SEED_PATH`            | `data/movies.json`                                                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:8080,http://localhost:3000,https://movies.com".into()
            })
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let seed_path = std::env::var("SEED_PATH").unwrap_or_else(|_| "data/movies.json".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            seed_path,
            request_timeout_secs,
        }
    }

    /// Whether the given `Origin` header value is on the allow-list.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.cors_origins.iter().any(|allowed| allowed == origin)
    }
}
