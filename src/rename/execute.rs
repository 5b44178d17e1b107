use std::fs;
use std::io;

use super::{MoveError, RenamePair};
use crate::options::RenameOptions;

/// Moves `pair.source` to `pair.destination`.
///
/// An existing destination is left alone unless `options.overwrite` is set. The
/// destination is checked without following symlinks.
#[tracing::instrument(
    level = "debug",
    skip(pair, options),
    fields(source = %pair.source, destination = %pair.destination)
)]
pub fn execute(pair: &RenamePair, options: &RenameOptions) -> Result<(), MoveError> {
    if !options.overwrite && destination_exists(&pair.destination) {
        return Err(MoveError::DestinationExists {
            from: pair.source.clone(),
            to: pair.destination.clone(),
        });
    }

    fs::rename(&pair.source, &pair.destination).map_err(|source| MoveError::Rename {
        from: pair.source.clone(),
        to: pair.destination.clone(),
        source,
    })
}

fn destination_exists(path: &str) -> bool {
    match fs::symlink_metadata(path) {
        Ok(_) => true,
        Err(err) if err.kind() == io::ErrorKind::NotFound => false,
        Err(err) => {
            tracing::debug!(path, error = %err, "cannot inspect destination");
            true
        }
    }
}
