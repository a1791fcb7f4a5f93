//! Shared types for the staff service
//!
//! Wire models and the unified error system used by the server and any
//! client talking to it.

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{EmployeeRequest, EmployeeResponse, EmployeeUpdate};
