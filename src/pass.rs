use std::time::Instant;

use crate::{
    error::CollectError,
    filter::{CollectFilter, FilteredItems, RuleFilter},
    item::CandidateItem,
    report::CollectReport,
};

/// One collection pass over the host's discovery output.
///
/// The pass holds no state across runs; each invocation is independent.
pub struct CollectionPass<Extra, Filter> {
    pub(crate) items: Vec<CandidateItem<Extra>>,
    pub(crate) filter: Filter,
}

/// Build a collection pass with the default [`RuleFilter`].
pub fn collection<Extra>(items: Vec<CandidateItem<Extra>>) -> CollectionPass<Extra, RuleFilter> {
    CollectionPass {
        items,
        filter: RuleFilter::default(),
    }
}

impl<Extra, Filter> CollectionPass<Extra, Filter> {
    pub fn with_filter<WithFilter: CollectFilter<Extra>>(
        self,
        filter: WithFilter,
    ) -> CollectionPass<Extra, WithFilter> {
        CollectionPass {
            items: self.items,
            filter,
        }
    }
}

impl<Extra, Filter: CollectFilter<Extra>> CollectionPass<Extra, Filter> {
    /// Run the pass and produce the corrected collection result.
    ///
    /// Fails without a partial result when a rule is malformed or
    /// inapplicable, see [`CollectError`].
    pub fn run(self) -> Result<CollectReport<Extra>, CollectError> {
        let now = Instant::now();
        let FilteredItems { items, uncollected } = self.filter.filter(self.items)?;
        let duration = now.elapsed();

        Ok(CollectReport {
            items,
            uncollected,
            duration,
        })
    }
}
