//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_MANIFEST: &str = r#"# layer-lint manifest
# Declare modules with their layers and the dependency edges between
# them, then run: layer-lint check

# Layers: domain, application, infrastructure, bootstrap, unclassified
# A module without a layer is treated as unclassified.

[[modules]]
name = "Domain.Order"
layer = "domain"

[[modules]]
name = "App.PlaceOrder"
layer = "application"

[[modules]]
name = "Infra.OrderRepo"
layer = "infrastructure"

[[dependencies]]
from = "App.PlaceOrder"
to = "Domain.Order"

[[dependencies]]
from = "Infra.OrderRepo"
to = "App.PlaceOrder"

# All built-in rules run by default. Uncomment to select a subset,
# by name or code:
# [rules]
# enabled = ["no-domain-to-infrastructure", "no-cyclic-dependency"]
"#;

/// Runs the init command.
pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Manifest already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_MANIFEST)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to declare your modules and edges", path.display());
    println!("  2. Run: layer-lint check");

    Ok(())
}
