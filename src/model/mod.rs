pub mod asset;
pub mod employee;
pub mod evaluation;
pub mod kpi;
pub mod project;
pub mod proposal;
pub mod payroll;
pub mod report;
pub mod task;
pub mod transaction;
pub mod user;
