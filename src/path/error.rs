use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("current working directory is unavailable")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },
    #[error("path '{lossy}' is not valid UTF-8")]
    NonUtf8 { lossy: String },
}

pub type PathResult<T> = Result<T, PathError>;
