use std::time::Duration;

use crate::item::CandidateItem;

/// The outcome of a collection pass.
#[derive(Debug)]
#[non_exhaustive]
pub struct CollectReport<Extra> {
    /// The items to actually execute, a subsequence of the discovered
    /// input in its original order.
    pub items: Vec<CandidateItem<Extra>>,

    /// How many items were uncollected.
    pub uncollected: usize,

    /// Wall time of the pass.
    pub duration: Duration,
}

impl<Extra> CollectReport<Extra> {
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_ref())
    }
}
