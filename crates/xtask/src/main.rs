use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Layering: domain <- shared <- engine.
///
/// Each entry lists the workspace crates a crate may depend on, and the
/// external crates it must not pull in.
const LAYERS: &[Layer] = &[
    Layer {
        package: "tribunal-domain",
        internal: &[],
        forbidden_external: &["tracing", "tokio", "serde_json", "anyhow"],
    },
    Layer {
        package: "tribunal-shared",
        internal: &["tribunal-domain"],
        forbidden_external: &["tracing", "tokio", "anyhow"],
    },
    Layer {
        package: "tribunal-engine",
        internal: &["tribunal-domain", "tribunal-shared"],
        forbidden_external: &["tokio"],
    },
];

struct Layer {
    package: &'static str,
    internal: &'static [&'static str],
    forbidden_external: &'static [&'static str],
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
    manifest_path: PathBuf,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `"dev"` or `"build"` otherwise
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata);
    violations.extend(source_violations(&metadata)?);

    if violations.is_empty() {
        println!(
            "arch-check OK ({} crates checked in {})",
            LAYERS.len(),
            metadata.workspace_root.display()
        );
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn dependency_violations(metadata: &Metadata) -> Vec<String> {
    let workspace: Vec<&str> = metadata.packages.iter().map(|p| p.name.as_str()).collect();
    let packages: BTreeMap<&str, &Package> = metadata
        .packages
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    let mut violations = Vec::new();
    for layer in LAYERS {
        let Some(package) = packages.get(layer.package) else {
            violations.push(format!("{} is missing from the workspace", layer.package));
            continue;
        };

        for dep in package.dependencies.iter().filter(|d| d.kind.is_none()) {
            let name = dep.name.as_str();
            if workspace.contains(&name) && !layer.internal.contains(&name) {
                violations.push(format!("{} must not depend on {name}", layer.package));
            }
            if layer.forbidden_external.contains(&name) {
                violations.push(format!("{} must not use {name}", layer.package));
            }
        }
    }
    violations
}

/// Catch paths that reach around the manifest (e.g. through a re-export).
fn source_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let upward = regex_lite::Regex::new(r"\b(tribunal_shared|tribunal_engine)::")
        .context("compiling source pattern")?;
    let logging = regex_lite::Regex::new(r"\btracing::").context("compiling source pattern")?;

    let mut violations = Vec::new();
    for package in metadata
        .packages
        .iter()
        .filter(|p| p.name == "tribunal-domain" || p.name == "tribunal-shared")
    {
        let Some(crate_dir) = package.manifest_path.parent() else {
            continue;
        };
        for file in rust_files(&crate_dir.join("src"))? {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            for (number, line) in source.lines().enumerate() {
                let upward_hit = package.name == "tribunal-domain" && upward.is_match(line);
                let engine_hit = line.contains("tribunal_engine::");
                if upward_hit || engine_hit || logging.is_match(line) {
                    violations.push(format!(
                        "{}:{}: {} reaches outside its layer",
                        file.display(),
                        number + 1,
                        package.name
                    ));
                }
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
