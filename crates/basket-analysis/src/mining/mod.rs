//! Level-wise Apriori itemset mining.

pub mod candidates;
pub mod miner;
pub mod support;

pub use candidates::generate_candidates;
pub use miner::{ItemsetMiner, MiningOutcome};
pub use support::SupportCalculator;

use basket_core::types::ItemId;
use smallvec::SmallVec;

/// Canonical in-flight itemset representation: sorted interned item ids.
/// Inline capacity covers every level the deep-level guard allows through.
pub type IdSet = SmallVec<[ItemId; 8]>;
