use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use super::segment::{SegmentFlags, classify};
use super::{PatternError, PatternResult};

/// A path segment ready to be matched against directory entry names.
#[derive(Debug, Clone)]
pub enum CompiledSegment {
    /// `.` or `\.`: stays in the current directory.
    CurrentDir,
    /// `..` or `\.\.`: moves to the structural parent.
    ParentDir,
    /// No regex metacharacters; compared by equality, captures nothing.
    Literal(Box<str>),
    /// Regex anchored at both ends.
    Pattern { raw: Box<str>, regex: Arc<Regex> },
}

impl CompiledSegment {
    pub fn compile(segment: &str, case_insensitive: bool) -> PatternResult<Self> {
        let flags = classify(segment);

        if flags.contains(SegmentFlags::DOT) {
            return Ok(Self::CurrentDir);
        }
        if flags.contains(SegmentFlags::DOT_DOT) {
            return Ok(Self::ParentDir);
        }
        if !flags.contains(SegmentFlags::REGEX) && !case_insensitive {
            return Ok(Self::Literal(segment.into()));
        }

        let regex = compile_anchored(segment, case_insensitive)?;
        Ok(Self::Pattern {
            raw: segment.into(),
            regex: Arc::new(regex),
        })
    }

    pub fn raw(&self) -> &str {
        match self {
            Self::CurrentDir => ".",
            Self::ParentDir => "..",
            Self::Literal(lit) => lit.as_ref(),
            Self::Pattern { raw, .. } => raw.as_ref(),
        }
    }

    /// Number of capture groups a successful match contributes.
    pub fn group_count(&self) -> usize {
        match self {
            Self::Pattern { regex, .. } => regex.captures_len() - 1,
            _ => 0,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::CurrentDir | Self::ParentDir)
    }
}

impl PartialEq for CompiledSegment {
    fn eq(&self, other: &Self) -> bool {
        self.is_structural() == other.is_structural() && self.raw() == other.raw()
    }
}

impl Eq for CompiledSegment {}

/// Compiles `raw` so that it only matches complete names.
///
/// The expression is checked on its own first, so text such as `a)(b` is rejected
/// instead of becoming valid once wrapped in a group.
pub fn compile_anchored(raw: &str, case_insensitive: bool) -> PatternResult<Regex> {
    let invalid = |source: regex::Error| PatternError::InvalidRegex {
        segment: raw.to_string(),
        source: Box::new(source),
    };

    Regex::new(raw).map_err(invalid)?;

    RegexBuilder::new(&format!("^(?:{raw})$"))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(invalid)
}
