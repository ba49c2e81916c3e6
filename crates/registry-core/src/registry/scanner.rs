//! Static dependency extraction from component source text
//!
//! Components declare nothing; their external dependencies are recovered by
//! scanning the raw source for `from '<module>'` clauses. A module is external
//! when it is not a relative or absolute local path and is not on the
//! caller-supplied exclusion list.

/// Collect the external package names a source file imports, in first-seen
/// order, with duplicates removed.
///
/// `excluded` entries match a module exactly (`react`) or as a path prefix
/// (`~` covers `~/lib/utils`); a prefix only matches up to a `/`, so `react`
/// does not swallow `react-dom`.
pub fn extract_dependencies(source: &str, excluded: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for module in import_targets(source) {
        if module.starts_with('.') || module.starts_with('/') {
            continue;
        }
        if is_excluded(module, excluded) {
            continue;
        }
        let package = package_name(module);
        if !found.iter().any(|p| p == package) {
            found.push(package.to_string());
        }
    }

    found
}

/// Yield every module path named by a `from '<module>'` / `from "<module>"`
/// clause. Plain text scan, no JS parsing; matches what the generator needs
/// and nothing more.
fn import_targets(source: &str) -> Vec<&str> {
    let mut targets = Vec::new();
    let mut search = 0;

    while let Some(found) = source[search..].find("from") {
        let start = search + found;
        let end = start + "from".len();
        search = end;

        // Must be the keyword, not part of an identifier
        let boundary_ok = source[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_');
        if !boundary_ok {
            continue;
        }

        let rest = source[end..].trim_start();
        let Some(quote) = rest.chars().next().filter(|c| *c == '\'' || *c == '"') else {
            continue;
        };
        let body = &rest[1..];
        if let Some(close) = body.find(quote) {
            targets.push(&body[..close]);
        }
    }

    targets
}

fn is_excluded(module: &str, excluded: &[&str]) -> bool {
    excluded.iter().any(|ex| {
        module == *ex
            || module
                .strip_prefix(ex)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Reduce a module path to the package that provides it: scoped imports keep
/// two segments, bare imports keep the first.
fn package_name(module: &str) -> &str {
    let keep = if module.starts_with('@') { 2 } else { 1 };
    let mut seen = 0;
    for (idx, c) in module.char_indices() {
        if c == '/' {
            seen += 1;
            if seen == keep {
                return &module[..idx];
            }
        }
    }
    module
}
