// API Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Certificate root: one subdirectory per domain, each holding cert.pem
    pub certs_dir: PathBuf,

    /// Enable CORS
    pub enable_cors: bool,

    /// Enable Swagger UI
    pub enable_swagger: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            certs_dir: PathBuf::from("/certs/live"),
            enable_cors: false,
            enable_swagger: true,
        }
    }
}

impl ApiConfig {
    /// Create config from file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Create example config file
    pub fn create_example(path: &str) -> anyhow::Result<()> {
        let config = Self::default();
        let toml = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("certpulse.toml");
        let path = path.to_str().unwrap();

        ApiConfig::create_example(path).unwrap();
        let loaded = ApiConfig::from_file(path).unwrap();

        assert_eq!(loaded.port, 8000);
        assert_eq!(loaded.certs_dir, PathBuf::from("/certs/live"));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(ApiConfig::from_file("/nonexistent/certpulse.toml").is_err());
    }
}
