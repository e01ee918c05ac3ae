//! Collection-phase exclusion filtering for parametrized test suites.
//!
//! `uncollect` sits between a host test runner's discovery and execution
//! phases. It takes the ordered discovery output, evaluates declared
//! exclusion rules against each item's own parameter bindings, and hands
//! back the corrected, order-preserving collection result. Items an
//! exclusion rule drops are not reported as skipped; they behave as if
//! discovery never produced them.

pub mod bindings;
pub mod item;
pub mod marker;
pub mod resolve;
pub mod rule;

mod strategy;
pub use strategy::*;

mod pass;
pub use pass::*;

mod report;
pub use report::*;

mod error;
pub use error::*;

#[cfg(test)]
pub(crate) mod item_support;
