use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
pub const DEFAULT_UNIV_URL: &str = "http://universities.hipolabs.com/search?name=sports";
pub const DEFAULT_COUNTRIES_URL: &str = "https://apiv3.iucnredlist.org/api/v3/docs#countries-species";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_students_file")]
    pub students_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { students_file: default_students_file() }
    }
}

/// Third-party endpoints relayed by the pass-through routes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_quote_url")]
    pub quote_url: String,
    #[serde(default = "default_univ_url")]
    pub univ_url: String,
    #[serde(default = "default_countries_url")]
    pub countries_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            quote_url: default_quote_url(),
            univ_url: default_univ_url(),
            countries_url: default_countries_url(),
            timeout_secs: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_students_file() -> String { "students.json".to_string() }
fn default_quote_url() -> String { DEFAULT_QUOTE_URL.to_string() }
fn default_univ_url() -> String { DEFAULT_UNIV_URL.to_string() }
fn default_countries_url() -> String { DEFAULT_COUNTRIES_URL.to_string() }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    /// Config file at `CONFIG_PATH` (default `config.toml`), validated.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_and_validate_from(&path)
    }

    /// Only a missing file falls back to env vars over defaults; an unreadable
    /// or malformed file is an error.
    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_env(),
            Err(e) => return Err(e.context(format!("failed to load config from {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        if let Ok(file) = std::env::var("STUDENTS_FILE") {
            cfg.storage.students_file = file;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        self.upstream.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<()> {
        if self.students_file.trim().is_empty() {
            return Err(anyhow!("storage.students_file is empty"));
        }
        Ok(())
    }
}

impl UpstreamConfig {
    fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("quote_url", &self.quote_url),
            ("univ_url", &self.univ_url),
            ("countries_url", &self.countries_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("upstream.{name} must start with http(s)"));
            }
        }
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("upstream.timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}
