//! Business logic and use cases

pub mod services;

pub use services::{DashboardReport, LowStockAlert, ReportRange, ReportingService};
