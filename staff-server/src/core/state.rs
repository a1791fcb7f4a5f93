use std::sync::Arc;
use std::time::Instant;

use crate::core::{Config, Result};
use crate::db::EmployeeStorage;
use crate::services::{EmployeeManager, EmployeeService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一次成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | employees | Arc<dyn EmployeeService> | 员工服务 (测试中可替换为 mock) |
/// | started_at | Instant | 启动时间 (用于 uptime) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工服务
    pub employees: Arc<dyn EmployeeService>,
    /// 启动时间
    pub started_at: Instant,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试用此方法注入自定义服务。
    pub fn new(config: Config, employees: Arc<dyn EmployeeService>) -> Self {
        Self {
            config,
            employees,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 打开 `<work_dir>/employees.redb` (必要时创建目录)
    /// 2. 构造 [`EmployeeManager`]
    pub fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        let storage = EmployeeStorage::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Employee storage opened");

        let manager = EmployeeManager::new(storage);
        Ok(Self::new(config.clone(), Arc::new(manager)))
    }

    /// 获取员工服务
    pub fn employee_service(&self) -> &dyn EmployeeService {
        self.employees.as_ref()
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
