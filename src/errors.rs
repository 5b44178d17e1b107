use crate::options::OptionsError;
use crate::path::PathError;
use crate::pattern::PatternError;
use crate::rename::MoveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MvreError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

pub type MvreResult<T> = Result<T, MvreError>;
