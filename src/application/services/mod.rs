//! Application services

mod reporting;

pub use reporting::{DashboardReport, LowStockAlert, ReportRange, ReportingService};
