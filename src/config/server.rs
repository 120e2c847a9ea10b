use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", raw, e))?,
            Err(_) => 3000,
        };
        let cors_origins = parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Option<Vec<String>> {
    if raw.trim() == "*" {
        return None;
    }
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
