use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid HOST/PORT: {}:{}", host, port))?;
        Ok(Self { addr })
    }
}

/// 数据文件与页面资源的位置
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub dji_csv: PathBuf,
    pub edge_csv: PathBuf,
    pub static_dir: PathBuf,
    pub template_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dji_csv: PathBuf::from("static/data/DJI_data.csv"),
            edge_csv: PathBuf::from("static/data/edge.csv"),
            static_dir: PathBuf::from("static"),
            template_dir: PathBuf::from("templates"),
        }
    }
}

impl DataConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dji_csv: path_var("DJI_CSV_PATH").unwrap_or(defaults.dji_csv),
            edge_csv: path_var("EDGE_CSV_PATH").unwrap_or(defaults.edge_csv),
            static_dir: path_var("STATIC_DIR").unwrap_or(defaults.static_dir),
            template_dir: path_var("TEMPLATE_DIR").unwrap_or(defaults.template_dir),
        }
    }

    pub fn index_page(&self) -> PathBuf {
        self.template_dir.join("index.html")
    }
}

/// 日志输出配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub to_file: bool,
    pub dir: PathBuf,
    pub file_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=info,axum=info".to_string(),
            to_file: false,
            dir: PathBuf::from("./logs"),
            file_name: "market-viz.log".to_string(),
        }
    }
}

impl LogConfig {
    /// RUST_LOG 由 EnvFilter 自行读取，这里只给出缺省过滤规则
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            filter: defaults.filter,
            to_file: std::env::var("LOG_TO_FILE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            dir: path_var("LOG_DIR").unwrap_or(defaults.dir),
            file_name: std::env::var("LOG_FILE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.file_name),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

fn path_var(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
