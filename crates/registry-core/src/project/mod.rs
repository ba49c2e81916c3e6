//! Consumer-project reconciliation
//!
//! This module provides:
//! - Read-only access to the consumer's package.json dependency tables
//! - Missing-dependency accumulation per CLI run (InstallPlan)
//! - Package-manager detection and install invocation

pub mod install;
pub mod manager;
pub mod package_json;

pub use install::InstallPlan;
pub use manager::{ManagerInfo, PackageManager};
pub use package_json::PackageJson;
