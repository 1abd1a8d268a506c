//! Occurrence-ordered module identifier assignment.
//!
//! Modules that are referenced more often should receive shorter numeric
//! identifiers, shrinking encoded cross-module references in the final
//! output. This crate computes a per-module occurrence score from chunk
//! membership, entry status, and per-dependency reference multiplicity,
//! folds the scores into one deterministic total order, and hands that order
//! to an [`IdAssigner`].

mod assign;
mod occurrence;
mod occurrence_module_ids;
mod options;
mod ranking;


pub use self::assign::*;
pub use self::occurrence::*;
pub use self::occurrence_module_ids::*;
pub use self::options::*;
pub use self::ranking::*;
