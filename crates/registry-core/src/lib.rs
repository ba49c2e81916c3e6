//! Registry Core - Shared library for component-scaffolding CLIs
//!
//! This library provides the core functionality for copying pre-written UI
//! components from a registry into a consuming project. It is designed to be
//! used by CLI binaries (e.g., `lumen-ui`) that share the same copy/install
//! logic but have different product configurations.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Manifest generation, registry fetching,
//!   component copying, dependency reconciliation
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait for custom products
//! - **Layer 3: CLI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use registry_core::{ProductConfig, registry};
//!
//! // Define your product config
//! #[derive(Clone)]
//! struct MyConfig;
//! impl ProductConfig for MyConfig {
//!     fn name(&self) -> &'static str { "mykit" }
//!     // ... implement other methods
//! }
//!
//! // Use the low-level APIs
//! let client = registry::RegistryClient::from_config(&MyConfig)?;
//! let manifest = client.fetch_manifest().await?;
//! ```

pub mod error;
pub mod product;
pub mod project;
pub mod registry;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::RegistryError;
pub use product::ProductConfig;
pub use project::{InstallPlan, PackageJson, PackageManager};
pub use registry::{
    copy_component, ComponentEntry, CopyOutcome, RegistryClient, RegistryManifest, RegistrySource,
};

#[cfg(feature = "tui")]
pub use tui::run;

/// CLI version - recorded in generated manifests for compatibility checking
/// Each binary should define its own version, but this provides a fallback
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";
