//! Registry fetching from a remote URL or local directory
//!
//! - Remote: the published registry (manifest + component files) behind a base
//!   URL, overridable via the product's environment variable
//! - Local: a registry checkout on disk, used with `--registry-dir` during
//!   development
//!
//! Fetched file bytes are cached per process so copying a directory component
//! never re-downloads.

use super::manifest::{RegistryManifest, MANIFEST_FILE};
use crate::error::RegistryError;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Registry source - either remote URL or local directory
#[derive(Debug, Clone)]
pub enum RegistrySource {
    Remote(Url),
    Local(PathBuf),
}

impl RegistrySource {
    /// Create a remote registry source from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.registry_url_env())
            .unwrap_or_else(|_| config.default_registry_url().to_string());
        let url =
            Url::parse(&url_str).with_context(|| format!("Invalid registry URL: {}", url_str))?;
        Ok(Self::Remote(url))
    }

    /// Create a local registry source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Registry client - retrieves the manifest and component files from the
/// configured source
pub struct RegistryClient {
    source: RegistrySource,
    client: reqwest::Client,
    /// Cache of fetched component file bytes, keyed by manifest path
    file_cache: HashMap<String, Vec<u8>>,
}

impl RegistryClient {
    /// Create a new client with a custom user agent
    pub fn new(source: RegistrySource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            file_cache: HashMap::new(),
        }
    }

    /// Create a client from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let source = RegistrySource::from_config(config)?;
        Ok(Self::new(source, config.user_agent()))
    }

    /// Create a client for a local registry directory
    pub fn from_local(path: PathBuf, user_agent: &str) -> Self {
        Self::new(RegistrySource::local(path), user_agent)
    }

    /// Build a URL by appending slash-separated path segments, preserving
    /// query parameters
    fn build_url(base: &Url, path: &str) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?;
            segments.pop_if_empty();
            for part in path.split('/') {
                segments.push(part);
            }
        }
        Ok(url)
    }

    /// Fetch the registry manifest listing available components
    pub async fn fetch_manifest(&self) -> Result<RegistryManifest> {
        match &self.source {
            RegistrySource::Remote(base_url) => {
                let url = Self::build_url(base_url, MANIFEST_FILE)?;
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch registry manifest from {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch registry manifest from {}: HTTP {}",
                        url,
                        response.status()
                    );
                }

                let content = response.text().await?;
                RegistryManifest::from_yaml(&content)
            }
            RegistrySource::Local(path) => {
                let manifest_path = path.join(MANIFEST_FILE);
                if !manifest_path.is_file() {
                    return Err(
                        RegistryError::ManifestMissing(manifest_path.display().to_string()).into(),
                    );
                }
                let content = fs::read_to_string(&manifest_path)
                    .await
                    .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
                RegistryManifest::from_yaml(&content)
            }
        }
    }

    /// Fetch one component file by its manifest path
    pub async fn fetch_file_bytes(&mut self, path: &str) -> Result<Vec<u8>> {
        if let Some(bytes) = self.file_cache.get(path) {
            return Ok(bytes.clone());
        }

        let bytes = match &self.source {
            RegistrySource::Remote(base_url) => {
                let url = Self::build_url(base_url, path)?;
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch component file: {}", path))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch component file '{}' from {}: HTTP {}",
                        path,
                        url,
                        response.status()
                    );
                }

                response.bytes().await?.to_vec()
            }
            RegistrySource::Local(dir) => {
                let file_path = dir.join(path);
                fs::read(&file_path)
                    .await
                    .with_context(|| format!("Failed to read {}", file_path.display()))?
            }
        };

        self.file_cache.insert(path.to_string(), bytes.clone());
        Ok(bytes)
    }

    /// Get the registry source
    pub fn source(&self) -> &RegistrySource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_manifest_and_file_fetch() {
        let tmp = TempDir::new().unwrap();
        stdfs::write(
            tmp.path().join(MANIFEST_FILE),
            "version: 0.1.0\ncomponents:\n  button:\n    path: templates/ui/button.tsx\n",
        )
        .unwrap();
        stdfs::create_dir_all(tmp.path().join("templates/ui")).unwrap();
        stdfs::write(tmp.path().join("templates/ui/button.tsx"), "export {};\n").unwrap();

        let mut client = RegistryClient::from_local(tmp.path().to_path_buf(), "test");
        let manifest = client.fetch_manifest().await.unwrap();
        assert_eq!(manifest.len(), 1);

        let bytes = client.fetch_file_bytes("templates/ui/button.tsx").await.unwrap();
        assert_eq!(bytes, b"export {};\n");
    }

    #[tokio::test]
    async fn test_missing_local_manifest_is_typed() {
        let tmp = TempDir::new().unwrap();
        let client = RegistryClient::from_local(tmp.path().to_path_buf(), "test");
        let err = client.fetch_manifest().await.unwrap_err();
        assert!(err.downcast_ref::<RegistryError>().is_some());
    }

    #[test]
    fn test_build_url_appends_nested_path() {
        let base = Url::parse("https://example.com/registry").unwrap();
        let url = RegistryClient::build_url(&base, "templates/ui/button.tsx").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/registry/templates/ui/button.tsx"
        );
    }
}
