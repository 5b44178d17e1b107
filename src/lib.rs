//! Regex path patterns matched against the live directory tree, and the
//! backreference resolution that turns each match into a new name.
//!
//! ```no_run
//! use mvre::{MatchOptions, PathPattern, find_paths, resolve};
//!
//! let pattern = PathPattern::from(r"/tmp/t/a(\d)");
//! for found in find_paths(&pattern, &MatchOptions::default())? {
//!     println!("{} -> {}", found, resolve("/tmp/t/b$1", found.path(), found.groups()));
//! }
//! # Ok::<(), mvre::MvreError>(())
//! ```

pub mod backref;
pub mod errors;
pub mod options;
pub mod path;
pub mod pattern;
pub mod rename;
pub mod types;
pub mod walker;

pub use backref::resolve;
pub use errors::{MvreError, MvreResult};
pub use options::{
    GroupZero, MatchOptions, MatchOptionsBuilder, OptionsError, RenameOptions,
    RenameOptionsBuilder,
};
pub use pattern::PathPattern;
pub use rename::{RenamePair, plan_renames};
pub use types::PathMatch;
pub use walker::{find_paths, find_paths_with};
