//! Wire models shared between the staff server and its clients

pub mod employee;

pub use employee::{EmployeeRequest, EmployeeResponse, EmployeeUpdate};
