//! Shared test fixtures for `ship_core` and downstream crates.
//!
//! `base_library()` covers the stock resources with their densities;
//! `make_part`/`make_vessel` build input records tersely.

use crate::{
    DiscoveryLevel, Part, PartModule, ResourceDef, ResourceEntry, ResourceLibrary, Vessel,
};

/// Stock density table: fuels at real densities, `ElectricCharge` massless.
pub fn base_library() -> ResourceLibrary {
    ResourceLibrary::new(vec![
        ResourceDef {
            name: "LiquidFuel".to_string(),
            density: 0.005,
        },
        ResourceDef {
            name: "Oxidizer".to_string(),
            density: 0.005,
        },
        ResourceDef {
            name: "MonoPropellant".to_string(),
            density: 0.004,
        },
        ResourceDef {
            name: "ElectricCharge".to_string(),
            density: 0.0,
        },
    ])
}

pub fn make_part(mass_t: f64, resources: &[(&str, f64, f64)], modules: &[&str]) -> Part {
    Part {
        mass_t,
        resources: resources
            .iter()
            .map(|(name, amount, max_amount)| ResourceEntry {
                resource_name: (*name).to_string(),
                amount: *amount,
                max_amount: *max_amount,
            })
            .collect(),
        modules: modules
            .iter()
            .map(|name| PartModule {
                name: (*name).to_string(),
            })
            .collect(),
    }
}

/// An owned, crewed, non-EVA vessel named "Test Vessel".
pub fn make_vessel(parts: Vec<Part>) -> Vessel {
    Vessel {
        name: "Test Vessel".to_string(),
        discovery: DiscoveryLevel::Owned,
        crew_count: 1,
        is_eva: false,
        parts,
    }
}
