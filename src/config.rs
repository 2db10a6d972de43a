use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub environment: Environment,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: String,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Production requires TLS to the store.
    pub fn requires_tls(self) -> bool {
        self == Environment::Production
    }

    /// Development listens on localhost only.
    fn default_host(self) -> &'static str {
        match self {
            Environment::Development => "127.0.0.1",
            Environment::Production => "0.0.0.0",
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DATABASE_POSTGRES_URL"))
            .ok_or_else(|| {
                "Missing required environment variable: DATABASE_URL".to_string()
            })?;

        let environment = Environment::parse(
            &lookup("FOLIO_ENV")
                .or_else(|| lookup("NODE_ENV"))
                .unwrap_or_default(),
        );

        let host: IpAddr = lookup("FOLIO_HOST")
            .unwrap_or_else(|| environment.default_host().to_string())
            .parse()
            .map_err(|e| format!("Invalid FOLIO_HOST: {e}"))?;

        let port: u16 = lookup("PORT")
            .or_else(|| lookup("FOLIO_PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let static_dir = lookup("FOLIO_STATIC_DIR").unwrap_or_else(|| "public".to_string());

        let max_body_size: usize = lookup("FOLIO_MAX_BODY_SIZE")
            .unwrap_or_else(|| "65536".to_string())
            .parse()
            .map_err(|e| format!("Invalid FOLIO_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = lookup("FOLIO_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|e| format!("Invalid FOLIO_DB_MAX_CONNECTIONS: {e}"))?;

        let log_level = lookup("FOLIO_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            database_url,
            environment,
            host,
            port,
            static_dir,
            max_body_size,
            db_max_connections,
            log_level,
        })
    }
}
