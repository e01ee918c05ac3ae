//! Exclusion rules and their predicates.
//!
//! A rule pairs a user-supplied predicate with a flag controlling how the
//! rule treats unparametrized items. Declaring a rule is inert: nothing is
//! validated until the filter runs, so a rule missing its predicate only
//! surfaces at collection time.

use std::{fmt::Debug, sync::Arc};

use crate::bindings::Bindings;

/// The verdict of one predicate evaluation.
///
/// `Ok(true)` uncollects the item, `Ok(false)` keeps it. An `Err` carries
/// the failure of a broken predicate; the filter turns it into
/// [`CollectError::Predicate`](crate::CollectError) and aborts the pass.
#[derive(Debug)]
pub struct PredicateOutcome(pub Result<bool, String>);

impl From<bool> for PredicateOutcome {
    fn from(v: bool) -> Self {
        Self(Ok(v))
    }
}

impl<E: Debug> From<Result<bool, E>> for PredicateOutcome {
    fn from(v: Result<bool, E>) -> Self {
        PredicateOutcome(v.map_err(|e| format!("{e:#?}")))
    }
}

/// A predicate over an item's full binding map.
///
/// Implementations receive every binding the instantiation resolved, not
/// just the parameters they inspect, and must tolerate unknown keys.
pub trait Predicate {
    fn check(&self, bindings: &Bindings) -> PredicateOutcome;
}

impl<F, T> Predicate for F
where
    F: Fn(&Bindings) -> T,
    T: Into<PredicateOutcome>,
{
    fn check(&self, bindings: &Bindings) -> PredicateOutcome {
        (self)(bindings).into()
    }
}

/// A shareable handle to a predicate.
///
/// One rule declaration can apply to many items (a group-level rule is
/// resolved onto every item derived from the group), so handles clone
/// cheaply.
#[non_exhaustive]
pub enum PredicateHandle {
    Ptr(fn(&Bindings) -> PredicateOutcome),
    Shared(Arc<dyn Predicate + Send + Sync>),
    Static(&'static (dyn Predicate + Send + Sync)),
}

impl Debug for PredicateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ptr(ptr) => f.debug_tuple("Ptr").field(ptr).finish(),
            Self::Shared(_) => write!(f, "Shared(...)"),
            Self::Static(_) => write!(f, "Static(...)"),
        }
    }
}

impl Clone for PredicateHandle {
    fn clone(&self) -> Self {
        match self {
            Self::Ptr(f) => Self::Ptr(*f),
            Self::Shared(f) => Self::Shared(Arc::clone(f)),
            Self::Static(f) => Self::Static(*f),
        }
    }
}

impl PredicateHandle {
    pub const fn from_const_fn(f: fn(&Bindings) -> PredicateOutcome) -> Self {
        Self::Ptr(f)
    }

    pub fn from_shared<F, T>(f: F) -> Self
    where
        F: Fn(&Bindings) -> T + Send + Sync + 'static,
        T: Into<PredicateOutcome>,
    {
        Self::Shared(Arc::new(f))
    }

    pub const fn from_static_obj(f: &'static (dyn Predicate + Send + Sync)) -> Self {
        Self::Static(f)
    }

    pub fn call(&self, bindings: &Bindings) -> PredicateOutcome {
        match self {
            Self::Ptr(f) => f(bindings),
            Self::Shared(f) => f.check(bindings),
            Self::Static(f) => f.check(bindings),
        }
    }
}

/// A declared, predicate-based exclusion condition.
///
/// When the predicate returns true for an item's bindings, the item is
/// removed from the collected set without being marked skipped.
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    predicate: Option<PredicateHandle>,
    require_parametrized: bool,
}

impl Default for ExclusionRule {
    fn default() -> Self {
        Self::declared()
    }
}

impl ExclusionRule {
    /// A rule evaluating `predicate`, requiring parametrization.
    pub fn new(predicate: PredicateHandle) -> Self {
        Self {
            predicate: Some(predicate),
            require_parametrized: true,
        }
    }

    /// A rule built from a plain predicate function.
    pub fn when<F, T>(predicate: F) -> Self
    where
        F: Fn(&Bindings) -> T + Send + Sync + 'static,
        T: Into<PredicateOutcome>,
    {
        Self::new(PredicateHandle::from_shared(predicate))
    }

    /// A rule declared without a predicate reference.
    ///
    /// The declaration itself goes through; the filter rejects it with
    /// [`CollectError::MissingPredicate`](crate::CollectError) once it
    /// runs.
    pub fn declared() -> Self {
        Self {
            predicate: None,
            require_parametrized: true,
        }
    }

    /// Whether the rule insists on resolved bindings.
    ///
    /// With `false`, the rule becomes a no-op on unparametrized items
    /// instead of failing the pass. Useful when marking a whole group
    /// while only some of its items are parametrized.
    pub fn with_require_parametrized(self, require_parametrized: bool) -> Self {
        Self {
            require_parametrized,
            ..self
        }
    }

    pub fn predicate(&self) -> Option<&PredicateHandle> {
        self.predicate.as_ref()
    }

    pub fn require_parametrized(&self) -> bool {
        self.require_parametrized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_require_parametrization() {
        assert!(ExclusionRule::declared().require_parametrized());
        assert!(ExclusionRule::when(|_: &Bindings| false).require_parametrized());
        assert!(
            !ExclusionRule::declared()
                .with_require_parametrized(false)
                .require_parametrized()
        );
    }

    #[test]
    fn fallible_predicates_convert() {
        let ok = ExclusionRule::when(|_: &Bindings| Ok::<bool, String>(true));
        let failing = ExclusionRule::when(|_: &Bindings| Err::<bool, _>("broken"));
        let bindings = Bindings::new().with("param", 1);

        let Some(predicate) = ok.predicate() else {
            panic!("predicate was just set");
        };
        assert!(matches!(predicate.call(&bindings).0, Ok(true)));

        let Some(predicate) = failing.predicate() else {
            panic!("predicate was just set");
        };
        let outcome = predicate.call(&bindings).0;
        assert!(matches!(outcome, Err(message) if message.contains("broken")));
    }

    #[test]
    fn handles_share_one_predicate() {
        let rule = ExclusionRule::when(|bindings: &Bindings| {
            bindings.value::<i32>("param") == Some(&2)
        });
        let copy = rule.clone();
        let bindings = Bindings::new().with("param", 2);

        for rule in [&rule, &copy] {
            let Some(predicate) = rule.predicate() else {
                panic!("predicate was just set");
            };
            assert!(matches!(predicate.call(&bindings).0, Ok(true)));
        }
    }
}
