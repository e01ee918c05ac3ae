//! Collection filtering for uncollect.
//!
//! A filter decides which candidate items from the discovered input stay
//! in the collected set. Items it drops are removed from the run entirely:
//! they are not marked skipped, they do not appear in any report, and they
//! cannot be pulled back in by later stages. They behave as if discovery
//! never produced them.
//!
//! This is different to skipping: a skip is decided and reported per test
//! during execution, and skipped tests still "exist" in the run. Filtering
//! happens before execution and leaves no per-item trace beyond a count.
//!
//! Implement [`CollectFilter`] to define a filter strategy.

use crate::{error::CollectError, item::CandidateItem};

mod no;
pub use no::*;

mod default;
pub use default::*;

/// The result of applying a [`CollectFilter`].
#[derive(Debug)]
pub struct FilteredItems<Extra> {
    /// The items retained in the collected set, in input order.
    pub items: Vec<CandidateItem<Extra>>,

    /// The number of items that were uncollected.
    ///
    /// Only the count survives; dropped items are not reported
    /// individually.
    pub uncollected: usize,
}

/// A strategy for deciding which discovered items stay in the collected
/// set.
///
/// A `CollectFilter` runs once per collection pass, between the host's
/// discovery and execution phases. The output is a strict subsequence of
/// the input: no reordering, no duplication, no insertion. The decision
/// for one item never depends on another item's data.
///
/// A filter fails with a [`CollectError`] instead of returning a partial
/// result when a rule is malformed or inapplicable.
pub trait CollectFilter<Extra> {
    fn filter(
        &self,
        items: Vec<CandidateItem<Extra>>,
    ) -> Result<FilteredItems<Extra>, CollectError>;
}
