use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub runner: RunnerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Directory holding the network files
    pub data_dir: PathBuf,
    /// Network file names, relative to `data_dir`
    pub networks: Vec<String>,
    /// Source vertex used when none is given on the command line
    pub source: usize,
}

impl RunnerConfig {
    /// Full paths of the configured network files
    pub fn network_paths(&self) -> Vec<PathBuf> {
        self.networks
            .iter()
            .map(|name| self.data_dir.join(name))
            .collect()
    }
}

fn default_networks() -> Vec<String> {
    (1..=4).map(|i| format!("reseau{}.txt", i)).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
            runner: RunnerConfig {
                data_dir: PathBuf::from("./data"),
                networks: default_networks(),
                source: 0,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let networks = match env::var("BFY_NETWORKS") {
            Ok(list) => list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
            Err(_) => default_networks(),
        };

        let config = Self {
            logging: LoggingConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            runner: RunnerConfig {
                data_dir: env::var("BFY_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./data")),
                networks,
                source: env::var("BFY_SOURCE")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse()?,
            },
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.runner.source, 0);
        assert_eq!(
            config.runner.network_paths(),
            vec![
                PathBuf::from("./data/reseau1.txt"),
                PathBuf::from("./data/reseau2.txt"),
                PathBuf::from("./data/reseau3.txt"),
                PathBuf::from("./data/reseau4.txt"),
            ]
        );
    }
}
