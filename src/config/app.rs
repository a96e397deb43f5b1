use anyhow::Result;

use super::env_or;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(AppConfig {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000").parse().unwrap_or(3000),
            environment: env_or("ENVIRONMENT", "development"),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_address_joins_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
        };
        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert!(!config.is_production());
    }
}
