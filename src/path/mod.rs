mod error;
mod expand;
mod normalize;
mod passwd;

pub use error::{PathError, PathResult};
pub use expand::{Environment, SystemEnvironment, expand_user, expand_vars};
pub use normalize::{join_entry, normalize_concrete, normalize_pattern, parent_dir};
