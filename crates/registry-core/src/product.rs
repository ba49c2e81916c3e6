//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each product (lumen, or a future kit
//! sharing the same tooling) must implement to configure the scaffolding
//! behavior for their specific needs.

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Registry source URL
/// - Template and destination layout
/// - Import-scan exclusion policy
/// - Documentation links
/// - Post-copy instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default URL for fetching the registry
    fn default_registry_url(&self) -> &'static str;

    /// Environment variable name for overriding the registry URL
    fn registry_url_env(&self) -> &'static str;

    /// Directory prefix under which component sources live in the registry
    /// tree, recorded in manifest paths and stripped off on copy
    fn template_root(&self) -> &'static str;

    /// Project-relative directory components are copied into
    fn destination_root(&self) -> &'static str;

    /// Import names excluded from dependency extraction even though they are
    /// not relative paths: the framework packages every component assumes, and
    /// the project import alias
    fn excluded_imports(&self) -> &'static [&'static str];

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after components are copied
    fn next_steps(&self, copied: &[String]) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
