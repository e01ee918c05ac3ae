use std::borrow::Cow;

use crate::{bindings::Bindings, rule::ExclusionRule};

/// A unit the host considered for execution.
///
/// Items are constructed entirely by the host during discovery. The filter
/// neither creates nor destroys them; it only decides membership in the
/// output sequence.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct CandidateItem<Extra = ()> {
    /// Opaque stable identity, used only for ordering and diagnostics.
    pub id: Cow<'static, str>,

    /// The concrete parametrization resolved for this instantiation, if
    /// any.
    pub bindings: Option<Bindings>,

    /// All exclusion rules applicable to this item, innermost declaration
    /// first.
    ///
    /// Inherited group-level rules are resolved onto the item before
    /// filtering, see [`resolve`](crate::resolve).
    pub rules: Vec<ExclusionRule>,

    /// Host-defined payload, passed through untouched.
    pub extra: Extra,
}

impl CandidateItem {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            bindings: None,
            rules: Vec::new(),
            extra: (),
        }
    }
}

impl<Extra> CandidateItem<Extra> {
    pub fn with_bindings(self, bindings: Bindings) -> Self {
        Self {
            bindings: Some(bindings),
            ..self
        }
    }

    pub fn with_rule(mut self, rule: ExclusionRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = ExclusionRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn with_extra<WithExtra>(self, extra: WithExtra) -> CandidateItem<WithExtra> {
        CandidateItem {
            id: self.id,
            bindings: self.bindings,
            rules: self.rules,
            extra,
        }
    }

    /// Whether this instantiation carries concrete parameter bindings.
    ///
    /// Only a non-empty binding map counts. A group declaring
    /// parametrization elsewhere does not make the item itself
    /// parametrized.
    pub fn is_parametrized(&self) -> bool {
        self.parametrized_bindings().is_some()
    }

    pub(crate) fn parametrized_bindings(&self) -> Option<&Bindings> {
        self.bindings.as_ref().filter(|bindings| !bindings.is_empty())
    }
}
