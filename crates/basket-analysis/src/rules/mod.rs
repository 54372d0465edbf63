//! Association-rule derivation from mined itemsets.

pub mod generator;

pub use generator::RuleGenerator;
