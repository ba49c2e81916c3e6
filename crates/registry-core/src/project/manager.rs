//! Package-manager detection and install invocation
//!
//! Lockfile presence in the consumer project root is the sole detection
//! signal; npm is the fallback when no lockfile is found.

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Supported package managers, in lockfile-detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Binary name, which is also the display name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Detect the consumer project's package manager from its lockfile
    pub fn detect(project_root: &Path) -> PackageManager {
        if project_root.join("pnpm-lock.yaml").is_file() {
            PackageManager::Pnpm
        } else if project_root.join("yarn.lock").is_file() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    fn install_args(&self, dev: bool) -> &'static [&'static str] {
        match (self, dev) {
            (PackageManager::Pnpm, false) => &["add"],
            (PackageManager::Pnpm, true) => &["add", "-D"],
            (PackageManager::Yarn, false) => &["add"],
            (PackageManager::Yarn, true) => &["add", "--dev"],
            (PackageManager::Npm, false) => &["install"],
            (PackageManager::Npm, true) => &["install", "--save-dev"],
        }
    }

    /// Check if the manager binary is available on PATH
    pub fn check(&self) -> ManagerInfo {
        let output = Command::new(self.command()).arg("--version").output();

        match output {
            Ok(out) if out.status.success() => {
                let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
                ManagerInfo {
                    name: self.command(),
                    version: Some(version),
                    available: true,
                }
            }
            _ => ManagerInfo {
                name: self.command(),
                version: None,
                available: false,
            },
        }
    }

    /// Run one install invocation for `packages`, inheriting the caller's
    /// terminal so installer output streams through, and waiting for it to
    /// finish. A no-op for an empty list.
    pub async fn install(&self, packages: &[String], dev: bool) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let status = tokio::process::Command::new(self.command())
            .args(self.install_args(dev))
            .args(packages)
            .status()
            .await
            .with_context(|| format!("Failed to run {}", self.command()))?;

        if !status.success() {
            anyhow::bail!(
                "{} exited with status {}",
                self.command(),
                status.code().unwrap_or(-1)
            );
        }

        Ok(())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Availability probe result
#[derive(Debug, Clone)]
pub struct ManagerInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}
