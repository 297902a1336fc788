//! Reserve Server - 餐厅订座服务
//!
//! # 架构概述
//!
//! - **可预订网格** (`availability`): 营业时间 → 半小时时段 + 31 天日期
//! - **数据库** (`db`): SQLite (sqlx) 与仓储层
//! - **服务** (`services`): 桌台开通、预订、账号
//! - **认证** (`auth`): 上游转发的用户 ID → [`CurrentUser`]
//! - **HTTP API** (`api`): RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! reserve-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 当前用户提取
//! ├── services/      # 业务流程
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── utils/         # 日志、时间、校验
//! ├── db/            # 连接池、迁移、仓储
//! └── availability.rs
//! ```

pub mod api;
pub mod auth;
pub mod availability;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, read [`Config`] and initialize logging
///
/// The returned appender guard (set when `LOG_DIR` is configured) must
/// outlive the server.
pub fn setup_environment() -> (Config, Option<tracing_appender::non_blocking::WorkerGuard>) {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    let guard = init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    if let Some(reason) = &config.timezone_fallback {
        tracing::warn!("{reason}, falling back to UTC");
    }
    (config, guard)
}

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   _____
  / /_/ / _ \/ ___/ _ \/ ___/ | / / _ \
 / _, _/  __(__  )  __/ /   | |/ /  __/
/_/ |_|\___/____/\___/_/    |___/\___/
    "#
    );
}
