//! Resource-definition loading for the tracking-station report.
//!
//! The density table is authored as a JSON content file; loading it is the
//! host's one-time startup step. Lookup misses at report time are not errors
//! (unknown resources weigh nothing), but authoring errors in the file
//! itself — duplicate names, negative densities — panic at load.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use ship_core::{ResourceDef, ResourceLibrary};

#[derive(Deserialize)]
struct ResourcesFile {
    resources: Vec<ResourceDef>,
}

/// Validates authored resource definitions, panicking on any authoring error.
///
/// Catches mistakes like: the same resource defined twice, or a density that
/// would subtract mass from the vessel.
pub fn validate_resource_defs(defs: &[ResourceDef]) {
    let mut seen: HashSet<&str> = HashSet::new();
    for def in defs {
        assert!(
            seen.insert(def.name.as_str()),
            "duplicate resource definition '{}'",
            def.name,
        );
        assert!(
            def.density >= 0.0,
            "resource '{}' has negative density {}",
            def.name,
            def.density,
        );
    }
}

/// Loads and validates the resource-definition table.
pub fn load_resource_library(path: &Path) -> Result<ResourceLibrary> {
    let file: ResourcesFile = serde_json::from_str(
        &std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
    )
    .with_context(|| format!("parsing {}", path.display()))?;
    validate_resource_defs(&file.resources);
    Ok(ResourceLibrary::new(file.resources))
}
