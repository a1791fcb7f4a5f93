//! 数据库层
//!
//! - [`models`] - 存储记录类型
//! - [`storage`] - 基于 redb 的嵌入式存储

pub mod models;
pub mod storage;

pub use storage::{EmployeeStorage, StorageError, StorageResult};
