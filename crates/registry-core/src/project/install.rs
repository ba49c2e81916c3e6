//! Missing-dependency accumulation for a single CLI run

use crate::project::package_json::PackageJson;
use crate::registry::manifest::ComponentEntry;
use std::collections::BTreeSet;

/// Dependencies still to be installed after a copy run: every declared
/// dependency of every selected component the consumer project does not
/// already have. Built fresh per invocation and discarded after use.
#[derive(Debug, Default)]
pub struct InstallPlan {
    deps: BTreeSet<String>,
    dev_deps: BTreeSet<String>,
}

impl InstallPlan {
    /// Fold one selected component's declared dependencies into the plan,
    /// keeping only names absent from both of the consumer's tables
    pub fn add_component(&mut self, entry: &ComponentEntry, pkg: &PackageJson) {
        for dep in &entry.dependencies {
            if !pkg.has_dependency(dep) {
                self.deps.insert(dep.clone());
            }
        }
        for dep in &entry.dev_dependencies {
            if !pkg.has_dependency(dep) {
                self.dev_deps.insert(dep.clone());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty() && self.dev_deps.is_empty()
    }

    /// Missing regular dependencies, sorted and deduplicated
    pub fn deps(&self) -> Vec<String> {
        self.deps.iter().cloned().collect()
    }

    /// Missing dev dependencies, sorted and deduplicated
    pub fn dev_deps(&self) -> Vec<String> {
        self.dev_deps.iter().cloned().collect()
    }
}
