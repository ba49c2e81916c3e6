//! Version comparison for CLI and registry compatibility

use semver::Version;

/// Compare the CLI version against the version the manifest was generated
/// with. Returns a warning message if the CLI is older than the generator.
pub fn check_compatibility(
    cli_version: &str,
    manifest_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = match Version::parse(cli_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let manifest_ver = match Version::parse(manifest_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    if cli_ver < manifest_ver {
        Some(format!(
            "Warning: This registry was generated by CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            manifest_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}
