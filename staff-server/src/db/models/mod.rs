//! 数据库模型

pub mod employee;

pub use employee::{Employee, EmployeeDraft, EmployeeId};
