use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com/users";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub github_api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            github_api_base_url: DEFAULT_GITHUB_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT", defaults.server_port)?,
            github_api_base_url: env::var("GITHUB_API_BASE_URL")
                .unwrap_or(defaults.github_api_base_url),
            request_timeout_secs: parse_var(
                "GITHUB_REQUEST_TIMEOUT",
                defaults.request_timeout_secs,
            )?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_contract() {
        let config = Config::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.github_api_base_url, "https://api.github.com/users");
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn unset_variable_falls_back_to_default() {
        let port = parse_var("GIST_PROXY_TEST_UNSET_VARIABLE", 8080u16).unwrap();
        assert_eq!(port, 8080);
    }
}
