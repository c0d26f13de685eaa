use std::path::PathBuf;

use serde::Deserialize;

/// Prefix of every environment variable read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "BOOKWORMS_";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding the bookworms and their shelves
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing filter directives
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_path() -> PathBuf {
    PathBuf::from("testdata/bookworms.json")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log() -> String {
    "bookworms=info,tower_http=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: default_path(),
            host: default_host(),
            port: default_port(),
            log: default_log(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
