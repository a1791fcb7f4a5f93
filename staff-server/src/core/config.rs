use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::{AppError, AppResult};

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (employees.redb) |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/staff HTTP_PORT=3000 cargo run -p staff-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库文件
    pub work_dir: String,
    /// 监听地址
    pub http_host: IpAddr,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

/// 运行环境取值
const ENVIRONMENTS: [&str; 3] = ["development", "staging", "production"];

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置 (或为空) 的变量使用默认值；已设置但无法解析的变量返回
    /// `ConfigError`，`details.var` 为变量名。
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let environment = var("ENVIRONMENT").unwrap_or(defaults.environment);
        if !ENVIRONMENTS.contains(&environment.as_str()) {
            return Err(invalid_var("ENVIRONMENT", &environment));
        }

        Ok(Self {
            work_dir: var("WORK_DIR").unwrap_or(defaults.work_dir),
            http_host: parse_var(var("HTTP_HOST"), "HTTP_HOST", defaults.http_host)?,
            http_port: parse_var(var("HTTP_PORT"), "HTTP_PORT", defaults.http_port)?,
            environment,
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: var("LOG_DIR"),
            shutdown_timeout_ms: parse_var(
                var("SHUTDOWN_TIMEOUT_MS"),
                "SHUTDOWN_TIMEOUT_MS",
                defaults.shutdown_timeout_ms,
            )?,
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，其余字段为默认值
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port,
            ..Self::default()
        }
    }

    /// 监听地址
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// 数据库文件路径
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("employees.redb")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            http_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: 8080,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            shutdown_timeout_ms: 10000,
        }
    }
}

fn parse_var<T: FromStr>(raw: Option<String>, key: &str, default: T) -> AppResult<T> {
    match raw {
        Some(raw) => raw.trim().parse().map_err(|_| invalid_var(key, &raw)),
        None => Ok(default),
    }
}

fn invalid_var(key: &str, raw: &str) -> AppError {
    AppError::config(format!("Invalid value for {key}: {raw:?}"))
        .with_detail("var", key)
        .with_detail("value", raw)
}
