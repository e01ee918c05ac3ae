use crate::{
    error::CollectError,
    filter::{CollectFilter, FilteredItems},
    item::CandidateItem,
};

/// A [`CollectFilter`] that keeps every discovered item.
///
/// Rules attached to items are neither evaluated nor validated, so even a
/// malformed rule passes through.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoFilter;

impl NoFilter {
    pub fn new() -> Self {
        Self
    }
}

impl<Extra> CollectFilter<Extra> for NoFilter {
    fn filter(
        &self,
        items: Vec<CandidateItem<Extra>>,
    ) -> Result<FilteredItems<Extra>, CollectError> {
        Ok(FilteredItems {
            items,
            uncollected: 0,
        })
    }
}
