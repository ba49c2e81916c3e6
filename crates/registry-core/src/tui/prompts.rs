//! Charm-style CLI prompts using cliclack

use crate::error::RegistryError;
use crate::product::ProductConfig;
use crate::project::{InstallPlan, PackageJson, PackageManager};
use crate::registry::{copier, version, RegistryClient, RegistryManifest};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Multiselect value for the virtual "All components" choice
const ALL_COMPONENTS: &str = "__all__";

/// CLI arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Local directory to use as the registry instead of fetching from remote
    pub registry_dir: Option<PathBuf>,

    /// Component names to copy; empty triggers interactive selection
    pub components: Vec<String>,

    /// Copy every component in the registry
    pub all: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: AddArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Set up registry client
    let mut client = setup_client(config, &args.registry_dir)?;

    // Step 2: Load the manifest
    let manifest = load_manifest(&client).await?;

    // Check version compatibility
    if let Some(warning) =
        version::check_compatibility(cli_version, &manifest.version, config.upgrade_command())
    {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    // Step 3: Select components
    let selected = select_components(&manifest, &args)?;
    if selected.is_empty() {
        cliclack::outro("Nothing selected.")?;
        return Ok(());
    }

    let project_root = std::env::current_dir().context("Failed to resolve current directory")?;

    // Step 4: Copy each selection; unknown names warn and are skipped
    let processed = copy_selected(&mut client, config, &manifest, &selected, &project_root).await?;

    // Step 5: Reconcile dependencies against the consumer's package.json
    reconcile_dependencies(&manifest, &processed, &project_root, args.yes).await?;

    // Step 6: Show next steps
    print_next_steps(config, &processed)?;

    Ok(())
}

fn setup_client<C: ProductConfig>(
    config: &C,
    registry_dir: &Option<PathBuf>,
) -> Result<RegistryClient> {
    let client = match registry_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local registry from {}", path.display()))?;
            RegistryClient::from_local(path.clone(), config.user_agent())
        }
        None => RegistryClient::from_config(config)?,
    };

    Ok(client)
}

async fn load_manifest(client: &RegistryClient) -> Result<RegistryManifest> {
    let spinner = cliclack::spinner();
    spinner.start("Loading component registry...");

    let manifest = match client.fetch_manifest().await {
        Ok(manifest) => manifest,
        Err(e) => {
            spinner.stop("Failed to load component registry");
            return Err(e);
        }
    };

    spinner.stop(format!("{} components available", manifest.len()));

    if manifest.is_empty() {
        anyhow::bail!("No components in the registry.");
    }

    Ok(manifest)
}

fn select_components(manifest: &RegistryManifest, args: &AddArgs) -> Result<Vec<String>> {
    if args.all {
        return Ok(manifest.names().map(str::to_string).collect());
    }

    if !args.components.is_empty() {
        return Ok(args.components.clone());
    }

    let mut multi = cliclack::multiselect("Select components to add");
    multi = multi.item(
        ALL_COMPONENTS.to_string(),
        "All components",
        "everything in the registry",
    );
    for name in manifest.names() {
        multi = multi.item(name.to_string(), name, "");
    }

    let picked: Vec<String> = multi.required(false).interact()?;

    Ok(resolve_picked(manifest, picked))
}

/// "All components" wins over anything ticked alongside it
fn resolve_picked(manifest: &RegistryManifest, picked: Vec<String>) -> Vec<String> {
    if picked.iter().any(|p| p == ALL_COMPONENTS) {
        manifest.names().map(str::to_string).collect()
    } else {
        picked
    }
}

async fn copy_selected<C: ProductConfig>(
    client: &mut RegistryClient,
    config: &C,
    manifest: &RegistryManifest,
    selected: &[String],
    project_root: &Path,
) -> Result<Vec<String>> {
    let mut processed = Vec::new();

    for name in selected {
        let entry = match manifest.get(name) {
            Ok(entry) => entry,
            Err(err @ RegistryError::UnknownComponent(_)) => {
                cliclack::log::warning(format!("{}, skipping", err))?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let outcomes = copier::copy_component(
            client,
            entry,
            config.template_root(),
            config.destination_root(),
            project_root,
        )
        .await?;

        let copied = outcomes.iter().filter(|o| o.was_copied()).count();
        let skipped = outcomes.len() - copied;

        if skipped == 0 {
            cliclack::log::success(format!("{}: copied {} file(s)", name, copied))?;
        } else if copied == 0 {
            cliclack::log::info(format!("{}: already present, skipped", name))?;
        } else {
            cliclack::log::success(format!(
                "{}: copied {} file(s), {} already present",
                name, copied, skipped
            ))?;
        }

        processed.push(name.clone());
    }

    Ok(processed)
}

async fn reconcile_dependencies(
    manifest: &RegistryManifest,
    processed: &[String],
    project_root: &Path,
    yes: bool,
) -> Result<()> {
    // Install is a best-effort convenience: no package.json, nothing to reconcile
    let Some(pkg) = PackageJson::read(project_root)? else {
        return Ok(());
    };

    let mut plan = InstallPlan::default();
    for name in processed {
        if let Ok(entry) = manifest.get(name) {
            plan.add_component(entry, &pkg);
        }
    }

    // Nothing missing - never prompt
    if plan.is_empty() {
        return Ok(());
    }

    let deps = plan.deps();
    let dev_deps = plan.dev_deps();

    if !deps.is_empty() {
        cliclack::log::info(format!("Missing dependencies: {}", deps.join(", ")))?;
    }
    if !dev_deps.is_empty() {
        cliclack::log::info(format!("Missing dev dependencies: {}", dev_deps.join(", ")))?;
    }

    let manager = PackageManager::detect(project_root);

    let confirm = if yes {
        true
    } else {
        cliclack::confirm(format!("Install them with {}?", manager))
            .initial_value(true)
            .interact()?
    };

    if !confirm {
        cliclack::log::info("Skipping install. Add the dependencies manually when ready.")?;
        return Ok(());
    }

    let info = manager.check();
    match &info.version {
        Some(ver) => cliclack::log::success(format!("{} ({})", info.name, ver))?,
        None => anyhow::bail!(
            "{} not found on PATH. Install it and re-run, or add the dependencies manually.",
            info.name
        ),
    }

    manager.install(&deps, false).await?;
    manager.install(&dev_deps, true).await?;

    cliclack::log::success("Dependencies installed")?;

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, processed: &[String]) -> Result<()> {
    let steps = config.next_steps(processed);

    if !steps.is_empty() {
        println!();
        println!("  Next steps");
        println!();

        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step);
        }
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_with(names: &[&str]) -> RegistryManifest {
        let mut manifest = RegistryManifest::new("0.1.0");
        for name in names {
            manifest
                .components
                .insert(name.to_string(), Default::default());
        }
        manifest
    }

    #[test]
    fn test_all_choice_expands_to_every_entry_once() {
        let manifest = manifest_with(&["badge", "button", "card"]);
        let picked = vec![
            "button".to_string(),
            ALL_COMPONENTS.to_string(),
            "card".to_string(),
        ];
        assert_eq!(
            resolve_picked(&manifest, picked),
            vec!["badge", "button", "card"]
        );
    }

    #[test]
    fn test_without_all_choice_selection_passes_through() {
        let manifest = manifest_with(&["badge", "button", "card"]);
        let picked = vec!["card".to_string()];
        assert_eq!(resolve_picked(&manifest, picked), vec!["card"]);
    }
}
