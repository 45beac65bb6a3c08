use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Contract-fixed defaults; a config file only overrides them for operations.
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8030;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            worker_threads: None,
        }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.server.normalize()?;
        Ok(cfg)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(0) = self.worker_threads {
            self.worker_threads = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_contract_address() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8030);
        assert!(cfg.server.worker_threads.is_none());
    }

    #[test]
    fn load_from_file_overrides_bind_address() -> Result<()> {
        let path = std::env::temp_dir().join(format!("jpb_config_{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\nworker_threads = 2\n",
        )?;

        let cfg = load_from_file(path.to_str().unwrap())?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(2));

        let _ = std::fs::remove_file(&path);
        Ok(())
    }

    #[test]
    fn normalize_rejects_port_zero_and_fills_blank_host() {
        let mut cfg = ServerConfig {
            host: "  ".into(),
            port: 8030,
            worker_threads: Some(0),
        };
        cfg.normalize().unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert!(cfg.worker_threads.is_none());

        cfg.port = 0;
        assert!(cfg.normalize().is_err());
    }
}
