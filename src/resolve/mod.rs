//! Resolves the schedule graph into calculated start periods.
pub mod batch;
pub mod engine;
pub mod error;
pub mod ledger;

pub use batch::resolve_batch;
pub use engine::{resolve, TimelineResolver};
pub use error::ResolveError;
pub use ledger::{CandidateBound, ResolutionLedger, ResolutionResult};
