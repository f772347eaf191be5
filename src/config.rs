//! Runtime configuration, merged from serde defaults and `LEADGATE_`-prefixed
//! environment variables (`__` separates nesting, e.g. `LEADGATE_AI__MODEL`).

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    })
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bind address for the HTTP server.
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// Key required by the standalone confirmation function endpoint.
    /// Empty means the endpoint rejects every caller.
    pub service_key: String,
    /// Timeout applied to every outbound API call, in seconds.
    pub http_timeout_secs: u64,
    pub ai: AiConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub api_url: Url,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub api_url: Url,
    pub api_key: String,
    pub from_address: String,
    pub subject: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:leadgate.sqlite".to_string(),
            loglevel: "info".to_string(),
            service_key: String::new(),
            http_timeout_secs: 30,
            ai: AiConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse("https://api.openai.com/v1/chat/completions")
                .expect("default completion URL is valid"),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 256,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse("https://api.resend.com/emails")
                .expect("default email URL is valid"),
            api_key: String::new(),
            from_address: "Leadgate <onboarding@leadgate.dev>".to_string(),
            subject: "Thanks for your interest".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("LEADGATE_").split("__"))
            .extract()
    }
}
