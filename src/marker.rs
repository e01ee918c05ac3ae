//! The marker surface a host advertises the exclusion rule through.
//!
//! Hosts with a marker/annotation listing (`--markers` style help output)
//! register [`UNCOLLECT_IF`] there so users can discover the rule and its
//! contract.

use std::fmt::{self, Display};

/// A marker registration entry for the host's listing mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpec {
    pub name: &'static str,
    pub help: &'static str,
}

impl Display for MarkerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.help)
    }
}

/// The exclusion-rule marker.
pub const UNCOLLECT_IF: MarkerSpec = MarkerSpec {
    name: "uncollect_if",
    help: "uncollect_if(predicate(params)): items marked with uncollect_if \
           will not be collected if predicate(params) returns true - like a \
           conditional skip but not reported as skipped",
};
