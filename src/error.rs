use thiserror::Error;

/// Error type for a collection pass.
///
/// Every variant is fatal to the whole pass. A malformed rule or a broken
/// predicate cannot be trusted to make a correct retain/uncollect decision
/// for any item, so there is no per-item quarantine mode; the pass fails
/// without returning a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// An exclusion rule was declared without a predicate reference.
    #[error("exclusion rule on '{item}' must carry a predicate")]
    MissingPredicate { item: String },

    /// A rule requiring parametrization was attached to an item without
    /// resolved bindings.
    #[error("exclusion rule on '{item}' only applies to parametrized items")]
    NotParametrized { item: String },

    /// The user-supplied predicate itself failed.
    #[error("exclusion predicate failed on '{item}': {message}")]
    Predicate { item: String, message: String },
}
