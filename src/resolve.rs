//! Resolution of declared rules onto candidate items.
//!
//! Exclusion rules can be declared at any level of the host's declaration
//! hierarchy: on the test function itself, on an enclosing group, on a
//! module. A rule declared on a group applies to every item derived from
//! that group. The host resolves that hierarchy once, during the handoff
//! from discovery to filtering; the filter never walks hierarchies itself,
//! it only sees the flat per-item rule list.

use crate::{item::CandidateItem, rule::ExclusionRule};

/// One level of the declaration hierarchy and the rules declared on it.
#[derive(Debug, Clone, Default)]
pub struct DeclScope {
    rules: Vec<ExclusionRule>,
}

impl DeclScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: ExclusionRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ExclusionRule] {
        &self.rules
    }
}

/// Flatten a declaration hierarchy into the resolved rule list for an
/// item.
///
/// `scopes` is ordered innermost first (function, then enclosing group,
/// then module). The returned list keeps that order, which is also the
/// order the filter checks rule preconditions in.
pub fn applicable_rules(scopes: &[&DeclScope]) -> Vec<ExclusionRule> {
    scopes
        .iter()
        .flat_map(|scope| scope.rules.iter().cloned())
        .collect()
}

/// Attach the resolved rules of `scopes` to every item derived from that
/// declaration.
pub fn attach<Extra>(
    items: impl IntoIterator<Item = CandidateItem<Extra>>,
    scopes: &[&DeclScope],
) -> Vec<CandidateItem<Extra>> {
    let rules = applicable_rules(scopes);
    items
        .into_iter()
        .map(|item| item.with_rules(rules.iter().cloned()))
        .collect()
}
