//! Pure requirement evaluation (no IO).
//!
//! Input: a student profile and a catalog store constructed elsewhere.
//! Output: an audit report plus the completed codes the catalog did not know.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;
pub mod strategies;

mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
