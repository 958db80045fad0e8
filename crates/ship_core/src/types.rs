//! Type definitions for `ship_core`.
//!
//! Vessel/part input records, the density library, and the report snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

pub type ResourceName = String;

// ---------------------------------------------------------------------------
// Vessel input records
// ---------------------------------------------------------------------------

/// How much the tracking observer knows about a vessel.
///
/// Only `Owned` vessels may be reported on; anything less must yield an
/// absent report so unidentified objects leak nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscoveryLevel {
    Presence,
    Orbit,
    Appearance,
    Owned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vessel {
    pub name: String,
    pub discovery: DiscoveryLevel,
    pub crew_count: u32,
    /// A single crew member on foot counts as a vessel but gets no
    /// crew/parts/mass summary and no visitor lines.
    pub is_eva: bool,
    pub parts: Vec<Part>,
}

/// One component of a vessel. Read-only during a report pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Structural (dry) mass in tonnes, excluding carried resources.
    pub mass_t: f64,
    pub resources: Vec<ResourceEntry>,
    pub modules: Vec<PartModule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub resource_name: ResourceName,
    pub amount: f64,
    pub max_amount: f64,
}

/// A named capability attached to a part (command control, seating, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartModule {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Resource definitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDef {
    pub name: ResourceName,
    /// Tonnes per resource unit.
    pub density: f64,
}

/// Density lookup keyed by resource name.
///
/// Names with no definition are valid inputs and weigh nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceLibrary {
    densities: HashMap<ResourceName, f64>,
}

impl ResourceLibrary {
    pub fn new(defs: Vec<ResourceDef>) -> Self {
        Self {
            densities: defs.into_iter().map(|d| (d.name, d.density)).collect(),
        }
    }

    /// Density for `name`, or `0.0` when the resource is unknown.
    pub fn density(&self, name: &str) -> f64 {
        self.densities.get(name).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Report output
// ---------------------------------------------------------------------------

/// Per-name totals accumulated across all parts of a vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceTotal {
    pub name: ResourceName,
    /// Sum of `amount` across parts.
    pub current: f64,
    /// Sum of `max_amount` across parts.
    pub max: f64,
}

impl ResourceTotal {
    /// Mass contribution in tonnes: `density * current`.
    pub fn mass_t(&self, library: &ResourceLibrary) -> f64 {
        library.density(&self.name) * self.current
    }

    /// Report line: `"{name}: {current} / {max}"`.
    pub fn line(&self) -> String {
        format!(
            "{}: {} / {}",
            self.name,
            crate::format_quantity(self.current),
            crate::format_quantity(self.max)
        )
    }
}

/// An immutable report snapshot. Replaced wholesale on every selection
/// change; the renderer never observes a partially built report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The vessel's display name.
    pub title: String,
    pub lines: Vec<String>,
}

impl Report {
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}
