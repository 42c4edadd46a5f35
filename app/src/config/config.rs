use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_server_ip")]
    pub server_ip: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Set automatically inside a GitHub Codespace. When present, the API
    /// root builds its URLs from the forwarded-port hostname instead of the
    /// request host, which avoids certificate mismatches behind the proxy.
    #[serde(default)]
    pub codespace_name: Option<String>,

    #[serde(default = "default_codespace_domain")]
    pub codespace_domain: String,
}

fn default_port() -> u16 {
    8000
}
fn default_server_ip() -> String {
    "0.0.0.0".to_string()
}
fn default_max_connections() -> u32 {
    10
}
fn default_min_connections() -> u32 {
    2
}
fn default_codespace_domain() -> String {
    "app.github.dev".to_string()
}

impl Config {
    pub fn load_envs() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Offline config for router tests. Never connects anywhere.
    pub fn test_default() -> Self {
        Self {
            database_url: "postgres://localhost/octofit_test".to_string(),
            port: default_port(),
            server_ip: default_server_ip(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            codespace_name: None,
            codespace_domain: default_codespace_domain(),
        }
    }
}
