use crate::{
    error::CollectError,
    filter::{CollectFilter, FilteredItems},
    item::CandidateItem,
};

/// The default [`CollectFilter`]: evaluates every item's exclusion rules.
///
/// Per item, in input order:
/// 1. An item with no rules is kept unconditionally.
/// 2. Every rule must carry a predicate and, unless it opts out via
///    [`with_require_parametrized(false)`](crate::rule::ExclusionRule::with_require_parametrized),
///    the item must be parametrized. Both preconditions are checked for
///    all rules before any predicate runs, so error attribution does not
///    depend on which predicate would have fired first.
/// 3. An unparametrized item whose rules all tolerate it is kept without
///    evaluating any predicate.
/// 4. Otherwise each predicate is called with the item's full binding map,
///    innermost rule first; the first one returning true uncollects the
///    item.
///
/// Precondition failures and predicate errors abort the whole pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RuleFilter;

impl RuleFilter {
    pub fn new() -> Self {
        Self
    }
}

enum Decision {
    Keep,
    Uncollect,
}

fn decide<Extra>(item: &CandidateItem<Extra>) -> Result<Decision, CollectError> {
    if item.rules.is_empty() {
        return Ok(Decision::Keep);
    }

    let mut predicates = Vec::with_capacity(item.rules.len());
    for rule in &item.rules {
        match rule.predicate() {
            Some(predicate) => predicates.push(predicate),
            None => {
                return Err(CollectError::MissingPredicate {
                    item: item.id.to_string(),
                });
            }
        }
    }

    let Some(bindings) = item.parametrized_bindings() else {
        if item.rules.iter().any(|rule| rule.require_parametrized()) {
            return Err(CollectError::NotParametrized {
                item: item.id.to_string(),
            });
        }
        // Without bindings the predicates have nothing to decide on.
        return Ok(Decision::Keep);
    };

    for predicate in predicates {
        match predicate.call(bindings).0 {
            Ok(true) => return Ok(Decision::Uncollect),
            Ok(false) => {}
            Err(message) => {
                return Err(CollectError::Predicate {
                    item: item.id.to_string(),
                    message,
                });
            }
        }
    }

    Ok(Decision::Keep)
}

impl<Extra> CollectFilter<Extra> for RuleFilter {
    fn filter(
        &self,
        items: Vec<CandidateItem<Extra>>,
    ) -> Result<FilteredItems<Extra>, CollectError> {
        let total = items.len();
        let mut kept = Vec::with_capacity(total);
        for item in items {
            match decide(&item)? {
                Decision::Keep => kept.push(item),
                Decision::Uncollect => tracing::debug!("uncollected '{}'", item.id),
            }
        }

        let uncollected = total - kept.len();
        tracing::debug!("collection pass kept {} of {total} items", kept.len());
        Ok(FilteredItems {
            items: kept,
            uncollected,
        })
    }
}
