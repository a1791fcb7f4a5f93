//! 服务层
//!
//! # 服务列表
//!
//! - [`EmployeeService`] - 员工服务接口 (HTTP 层只依赖此 trait)
//! - [`EmployeeManager`] - 基于 redb 的员工服务实现

pub mod employee;

pub use employee::{EmployeeManager, EmployeeService};
