//! Cross-validated stability assessment of the mining pipeline.

pub mod crossval;

pub use crossval::CrossValidator;
