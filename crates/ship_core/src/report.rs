//! Report assembly: the ownership gate and the single pass over parts.

use crate::aggregate::resource_mass_t;
use crate::{
    CommandStatusVisitor, DiscoveryLevel, PartVisitor, Report, ResourceAggregator,
    ResourceLibrary, ResourceTotal, Vessel,
};

/// True when the observer fully owns the vessel.
///
/// Must run before any aggregation so unidentified objects reveal nothing.
/// Absent vessels and every discovery level below `Owned` fail the gate.
pub fn vessel_owned(vessel: Option<&Vessel>) -> bool {
    vessel.is_some_and(|v| v.discovery == DiscoveryLevel::Owned)
}

/// Orchestrates one reporting pass over a vessel.
///
/// Holds an ordered visitor list; visitors emit their lines in registration
/// order. New status checks plug in via [`ReportBuilder::register`] without
/// touching the pass itself.
pub struct ReportBuilder {
    visitors: Vec<Box<dyn PartVisitor>>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    /// Builder with the stock visitor set.
    pub fn new() -> Self {
        Self {
            visitors: vec![Box::new(CommandStatusVisitor::default())],
        }
    }

    /// Builder with no visitors registered.
    pub fn empty() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    pub fn register(&mut self, visitor: Box<dyn PartVisitor>) {
        self.visitors.push(visitor);
    }

    /// Builds a report, or `None` when the ownership gate fails.
    ///
    /// One pass over the parts, in their given order: the aggregator and
    /// every visitor observe part `i` before any of them sees part `i + 1`.
    /// Crewless on-foot vessels get resource lines only — no separator, no
    /// summary, no visitor text.
    pub fn build(
        &mut self,
        vessel: Option<&Vessel>,
        resources: &ResourceLibrary,
    ) -> Option<Report> {
        if !vessel_owned(vessel) {
            return None;
        }
        let vessel = vessel?;

        for visitor in &mut self.visitors {
            visitor.reset();
        }

        let mut aggregator = ResourceAggregator::new();
        let mut structural_mass_t = 0.0;
        for part in &vessel.parts {
            aggregator.add_part(part);
            for visitor in &mut self.visitors {
                visitor.visit(part);
            }
            structural_mass_t += part.mass_t;
        }

        let totals = aggregator.into_totals();
        let mut lines: Vec<String> = totals.iter().map(ResourceTotal::line).collect();

        if !vessel.is_eva {
            lines.push(String::new());
            let mass_t = structural_mass_t + resource_mass_t(&totals, resources);
            lines.push(format!(
                "Crew: {}, Parts: {}, Mass: {:.2}t",
                vessel.crew_count,
                vessel.parts.len(),
                mass_t
            ));
            for visitor in &self.visitors {
                lines.extend(visitor.texts());
            }
        }

        Some(Report {
            title: vessel.name.clone(),
            lines,
        })
    }
}
