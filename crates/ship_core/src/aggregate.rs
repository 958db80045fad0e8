//! Per-resource aggregation across vessel parts.
//!
//! A `BTreeMap` keyed by resource name gives the ordinal, byte-wise ordering
//! the report format promises — stable and deterministic across passes.

use std::collections::BTreeMap;

use crate::{Part, ResourceLibrary, ResourceName, ResourceTotal};

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    current: f64,
    max: f64,
}

/// Merges per-part resource entries into per-name totals.
///
/// Entries exist only for the duration of one pass; the builder constructs a
/// fresh aggregator per report.
#[derive(Debug, Default)]
pub struct ResourceAggregator {
    totals: BTreeMap<ResourceName, Accumulator>,
}

impl ResourceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one part's resource entries into the running totals.
    pub fn add_part(&mut self, part: &Part) {
        for entry in &part.resources {
            let acc = self
                .totals
                .entry(entry.resource_name.clone())
                .or_default();
            acc.current += entry.amount;
            acc.max += entry.max_amount;
        }
    }

    /// Emits totals sorted by name ascending. Every observed resource name
    /// appears, including names whose totals are zero.
    pub fn into_totals(self) -> Vec<ResourceTotal> {
        self.totals
            .into_iter()
            .map(|(name, acc)| ResourceTotal {
                name,
                current: acc.current,
                max: acc.max,
            })
            .collect()
    }
}

/// Total resource mass in tonnes: `density * current` summed over all totals.
pub(crate) fn resource_mass_t(totals: &[ResourceTotal], library: &ResourceLibrary) -> f64 {
    totals.iter().map(|t| t.mass_t(library)).sum()
}

/// Formats a quantity for a resource line: 2 decimal places when the
/// magnitude is below 100, otherwise none. No thousands separators.
pub fn format_quantity(value: f64) -> String {
    if value.abs() < 100.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.0}")
    }
}
