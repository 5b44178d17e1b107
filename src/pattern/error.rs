use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern is not valid UTF-8: '{lossy}'")]
    NonUtf8Input { lossy: String },
    #[error("segment '{segment}' is not a valid regular expression")]
    InvalidRegex {
        segment: String,
        #[source]
        source: Box<regex::Error>,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
