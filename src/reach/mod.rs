//! Numbers-game reachability search
//!
//! Finds every integer reachable from a multiset of source numbers under
//! `+ - * /` (exact division only, no negative differences), each with the
//! postfix expressions that produce it.

mod engine;
mod error;
mod subset;

pub use engine::{
    EXHAUSTIVE_MAX_NUMBERS, Engine, EngineConfig, Forwarding, HARD_MAX_NUMBERS, ResultMap,
    best_witness, find, solve,
};
pub use error::SolveError;
pub use subset::{Splits, Subset};
