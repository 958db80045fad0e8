//! Part visitors: pluggable per-part status checks.
//!
//! Each visitor scans every part once per pass, accumulates a small internal
//! state, and emits zero or more report lines at the end. Visitors share no
//! state with each other.

use crate::Part;

pub const MODULE_COMMAND: &str = "ModuleCommand";
pub const KERBAL_SEAT: &str = "KerbalSeat";

/// One pass over a vessel's parts.
///
/// Call order per pass: `reset` once, `visit` once per part in part order,
/// then `texts` once. `visit` must be a no-op on parts with no relevant
/// modules. A visitor that observes an internal state outside its declared
/// set must panic rather than emit partial output — that is a logic defect,
/// not bad input, and is never mapped to the absent-report outcome.
pub trait PartVisitor {
    fn reset(&mut self);
    fn visit(&mut self, part: &Part);
    fn texts(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum CommandStatus {
    #[default]
    None,
    Seat,
    Pod,
}

/// Reports whether the vessel can be commanded: a full command pod, an
/// external seat only, or nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandStatusVisitor {
    status: CommandStatus,
}

impl PartVisitor for CommandStatusVisitor {
    fn reset(&mut self) {
        self.status = CommandStatus::None;
    }

    fn visit(&mut self, part: &Part) {
        // Pod is terminal for the pass; later parts cannot change it.
        if self.status == CommandStatus::Pod {
            return;
        }
        for module in &part.modules {
            if module.name == MODULE_COMMAND {
                self.status = CommandStatus::Pod;
                return;
            }
            if module.name == KERBAL_SEAT {
                self.status = CommandStatus::Seat;
            }
        }
    }

    fn texts(&self) -> Vec<String> {
        match self.status {
            CommandStatus::Pod => vec![],
            CommandStatus::None => vec!["No command pod".to_string()],
            CommandStatus::Seat => vec!["Has command seat".to_string()],
        }
    }
}
