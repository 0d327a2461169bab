use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
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
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            worker_threads: Some(DEFAULT_WORKER_THREADS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_log_format() -> String { "compact".to_string() }

/// Path of the config file: `CONFIG_PATH`, else `config.toml`.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file if one exists at `CONFIG_PATH` (or `config.toml`), otherwise
    /// defaults overridden by `SERVER_HOST`, `SERVER_PORT` and `TOKIO_WORKER_THREADS`.
    /// A file that exists but does not parse or validate is an error.
    pub fn resolve() -> Result<Self> {
        // 优先使用配置文件；文件存在但无效时直接报错
        if std::path::Path::new(&config_path()).exists() {
            return Self::load_and_validate();
        }

        // 无配置文件：默认值 + 环境变量覆盖
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 校验日志格式
        self.logging.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        // 空 host 回退到默认监听地址
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        // u16 上限已由类型保证，只需排除 0
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        // 线程数缺省或为 0 时使用默认值
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        let f = self.format.to_ascii_lowercase();
        if f != "compact" && f != "json" {
            return Err(anyhow!("logging.format must be \"compact\" or \"json\", got {:?}", self.format));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_reference_defaults() -> Result<()> {
        let mut cfg = parse("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.logging.format, "compact");
        Ok(())
    }

    #[test]
    fn blank_host_and_zero_workers_are_normalized() -> Result<()> {
        let mut cfg = parse("[server]\nhost = \"  \"\nport = 8080\nworker_threads = 0\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.worker_threads, Some(4));
        Ok(())
    }

    #[test]
    fn zero_port_is_rejected() -> Result<()> {
        let mut cfg = parse("[server]\nport = 0\n")?;
        assert!(cfg.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn unknown_log_format_is_rejected() -> Result<()> {
        let mut cfg = parse("[logging]\nformat = \"xml\"\n")?;
        assert!(cfg.normalize_and_validate().is_err());
        let mut cfg = parse("[logging]\nformat = \"JSON\"\n")?;
        assert!(cfg.normalize_and_validate().is_ok());
        Ok(())
    }

    #[test]
    fn load_from_file_reads_toml() -> Result<()> {
        let tmp = std::env::temp_dir().join(format!("bookstore_cfg_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, "[server]\nhost = \"127.0.0.1\"\nport = 3456\n")?;
        let cfg = load_from_file(tmp.to_str().ok_or_else(|| anyhow!("non-utf8 temp path"))?)?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3456);
        let _ = std::fs::remove_file(&tmp);
        Ok(())
    }

    #[test]
    fn load_and_validate_normalizes_file_from_config_path() -> Result<()> {
        let tmp = std::env::temp_dir().join(format!("bookstore_cfg_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, "[server]\nhost = \"\"\nport = 4000\n")?;
        std::env::set_var("CONFIG_PATH", &tmp);
        let loaded = AppConfig::load_and_validate();
        let resolved = AppConfig::resolve();
        std::env::remove_var("CONFIG_PATH");
        let _ = std::fs::remove_file(&tmp);

        let cfg = loaded?;
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.port, 4000);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(resolved?.server.port, 4000);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/bookstore-config.toml").is_err());
    }
}
