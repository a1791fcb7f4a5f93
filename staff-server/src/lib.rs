//! Staff Server - 员工管理 HTTP 服务
//!
//! # 架构概述
//!
//! HTTP 端点 → 员工服务 → 持久化，三层结构：
//!
//! - **HTTP API** (`api`): 路由、处理器、请求提取器
//! - **服务层** (`services`): [`EmployeeService`] trait 及其 redb 实现
//! - **数据库** (`db`): 嵌入式 redb 存储
//!
//! # 模块结构
//!
//! ```text
//! staff-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── services/      # 员工服务
//! ├── db/            # 数据库层
//! └── utils/         # 日志、校验、提取器
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use api::{build_app, build_router};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::EmployeeStorage;
pub use services::{EmployeeManager, EmployeeService};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 .env、解析配置并初始化日志
///
/// 配置无效时返回 `ConfigError`，此时日志尚未初始化。
pub fn setup_environment() -> AppResult<Config> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_dir.as_deref(),
        config.is_production(),
    );
    Ok(config)
}
