use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("cannot move '{from}' to '{to}': destination exists")]
    DestinationExists { from: String, to: String },
    #[error("cannot move '{from}' to '{to}'")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },
}
