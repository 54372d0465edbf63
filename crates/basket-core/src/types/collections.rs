//! Hash collections used on hot paths.
//! FxHash trades DoS resistance for speed; all keys here are internal.

pub use rustc_hash::{FxHashMap, FxHashSet};
