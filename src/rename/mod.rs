//! Turning matches into moves: planning, confirmation and execution.

mod confirm;
mod error;
mod execute;
mod plan;

pub use confirm::{Answer, Confirmer, Decision, PROMPT_USAGE};
pub use error::MoveError;
pub use execute::execute;
pub use plan::{RenamePair, pair_for, plan_renames, plan_renames_with};
