//! Lumen UI CLI - copy Lumen components into a consumer project

use anyhow::Result;
use clap::{Parser, Subcommand};
use registry_core::tui::AddArgs;
use registry_core::ProductConfig;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lumen product configuration
#[derive(Clone)]
pub struct LumenConfig;

impl ProductConfig for LumenConfig {
    fn name(&self) -> &'static str {
        "lumen"
    }

    fn display_name(&self) -> &'static str {
        "Lumen UI"
    }

    fn default_registry_url(&self) -> &'static str {
        "https://raw.githubusercontent.com/lumen-ui/lumen/main/registry"
    }

    fn registry_url_env(&self) -> &'static str {
        "LUMEN_REGISTRY_URL"
    }

    fn template_root(&self) -> &'static str {
        "templates/ui"
    }

    fn destination_root(&self) -> &'static str {
        "src/components/custom"
    }

    fn excluded_imports(&self) -> &'static [&'static str] {
        // Framework packages every component assumes, plus the import alias
        &["react", "remix", "~"]
    }

    fn docs_url(&self) -> &'static str {
        "https://lumen-ui.dev/docs"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for copying Lumen UI components into your project"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install lumen-tools --force"
    }

    fn next_steps(&self, copied: &[String]) -> Vec<String> {
        let mut steps = Vec::new();

        if let Some(first) = copied.first() {
            steps.push(format!(
                "Import the components from {} (e.g. \"~/components/custom/{}\")",
                self.destination_root(),
                first
            ));
        }
        steps.push("npm run dev".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumen-ui")]
#[command(about = "CLI for copying Lumen UI components into your project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy components into the current project
    Add(CliAddArgs),
    /// Regenerate the registry manifest from the template tree (for maintainers)
    BuildManifest(BuildManifestArgs),
    /// Open the Lumen UI documentation in the browser
    Docs,
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Component names to copy; prompts interactively when omitted
    pub components: Vec<String>,

    /// Local directory to use as the registry instead of fetching from remote (for development use)
    #[arg(long = "registry-dir")]
    pub registry_dir: Option<PathBuf>,

    /// Copy every component in the registry
    #[arg(short, long)]
    pub all: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            registry_dir: args.registry_dir,
            components: args.components,
            all: args.all,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct BuildManifestArgs {
    /// Registry checkout to scan (defaults to the current directory)
    #[arg(long = "registry-dir")]
    pub registry_dir: Option<PathBuf>,

    /// Where to write the manifest (defaults to components.yaml in the registry)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = LumenConfig;

    // Handle subcommands
    match args.command {
        Some(Command::Add(add_args)) => {
            let result = registry_core::run(&config, add_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::BuildManifest(build_args)) => registry_core::registry::build_registry(
            &config,
            &build_args.registry_dir,
            &build_args.out,
            CLI_VERSION,
        ),
        Some(Command::Docs) => {
            open::that(config.docs_url())?;
            Ok(())
        }
        None => {
            // No subcommand provided, default to add behavior (interactive mode)
            let result = registry_core::run(&config, AddArgs::default(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
