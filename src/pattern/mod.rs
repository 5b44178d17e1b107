mod compiled;
mod error;
mod matcher;
mod path_pattern;
mod segment;

pub use compiled::{CompiledSegment, compile_anchored};
pub use error::{PatternError, PatternResult};
pub use matcher::{CaptureList, match_segment};
pub use path_pattern::PathPattern;
pub use segment::{
    SegmentFlags, classify, contains_escape, contains_regex, is_dot, is_dot_dot,
};
