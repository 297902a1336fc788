use std::path::PathBuf;

use chrono_tz::Tz;

use crate::utils::time::parse_timezone;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件同样生效)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | DATABASE_PATH | {WORK_DIR}/reserve.db | SQLite 数据库文件 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | TIMEZONE | UTC | 餐厅业务时区 (IANA 名称) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (none) | 日志文件目录，按天滚动 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/reserve HTTP_PORT=8080 TIMEZONE=Europe/Madrid cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 数据库文件路径
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 业务时区，决定可预订日期的 "今天"
    pub timezone: Tz,
    /// TIMEZONE 无法解析时的原因 (已回退到 UTC)，日志初始化后输出
    pub timezone_fallback: Option<String>,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("reserve.db")
                .to_string_lossy()
                .into_owned()
        });
        let (timezone, timezone_fallback) =
            resolve_timezone(std::env::var("TIMEZONE").ok().as_deref());

        Self {
            database_path,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone,
            timezone_fallback,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            work_dir,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let work_dir = work_dir.into();
        let mut config = Self::from_env();
        config.database_path = PathBuf::from(&work_dir)
            .join("reserve.db")
            .to_string_lossy()
            .into_owned();
        config.work_dir = work_dir;
        config.http_port = http_port;
        config
    }
}

/// Unset means UTC; an unparseable name also means UTC plus the reason
fn resolve_timezone(name: Option<&str>) -> (Tz, Option<String>) {
    match name.map(parse_timezone) {
        None => (Tz::UTC, None),
        Some(Ok(tz)) => (tz, None),
        Some(Err(reason)) => (Tz::UTC, Some(reason)),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
