use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use super::compiled::{CompiledSegment, compile_anchored};
use super::segment::{self, SegmentFlags};
use super::{PatternError, PatternResult};
use crate::errors::MvreResult;
use crate::options::MatchOptions;
use crate::path::{
    Environment, PathError, PathResult, SystemEnvironment, expand_user, expand_vars,
    normalize_pattern,
};
use crate::types::PathMatch;

/// A regular expression describing a POSIX filesystem path.
///
/// Every segment between `/` separators is an independent regex, except a segment
/// that is exactly `.`, `..`, `\.` or `\.\.`: those refer to the current and parent
/// directory. Dots anywhere else must be escaped to be literal:
///
/// - `/lib/../boot` and `/lib/\.\./boot` match `/boot`, not `/lib/xy/boot`
/// - `/boot/.` and `/boot/\.` match `/boot`, not `/boot/x`
/// - `/boot/.foo` matches `/boot/.foo` as well as `/boot/xfoo`
/// - `/boot/\.foo` matches `/boot/.foo` but not `/boot/xfoo`
///
/// Values are immutable; every transformation returns a new pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPattern {
    raw: String,
}

impl PathPattern {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// A pattern that matches `text` literally, separators excepted.
    pub fn literal(text: &str) -> Self {
        Self::new(regex::escape(text))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with('/')
    }

    pub fn expand_user(&self) -> Self {
        self.expand_user_with(&SystemEnvironment)
    }

    pub fn expand_user_with<E: Environment + ?Sized>(&self, env: &E) -> Self {
        Self::new(expand_user(&self.raw, env))
    }

    pub fn expand_vars(&self) -> Self {
        self.expand_vars_with(&SystemEnvironment)
    }

    pub fn expand_vars_with<E: Environment + ?Sized>(&self, env: &E) -> Self {
        Self::new(expand_vars(&self.raw, env))
    }

    pub fn normpath(&self) -> Self {
        Self::new(normalize_pattern(&self.raw))
    }

    /// One pattern per path segment; empty segments are dropped.
    pub fn tokens(&self) -> Vec<PathPattern> {
        self.raw
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(PathPattern::new)
            .collect()
    }

    pub fn contains_regex(&self) -> bool {
        segment::contains_regex(&self.raw)
    }

    pub fn contains_escape(&self) -> bool {
        segment::contains_escape(&self.raw)
    }

    pub fn is_dot(&self) -> bool {
        segment::is_dot(&self.raw)
    }

    pub fn is_dot_dot(&self) -> bool {
        segment::is_dot_dot(&self.raw)
    }

    pub fn flags(&self) -> SegmentFlags {
        segment::classify(&self.raw)
    }

    /// Compiles this pattern as a single segment.
    pub fn compile(&self, case_insensitive: bool) -> PatternResult<CompiledSegment> {
        CompiledSegment::compile(&self.raw, case_insensitive)
    }

    /// Matches the whole of `name` against this pattern as one regex.
    ///
    /// Returns a [`PathMatch`] for `name` carrying the capture groups, or `None` when
    /// the regex does not cover all of `name`.
    pub fn match_name(&self, name: &str) -> PatternResult<Option<PathMatch>> {
        let regex = compile_anchored(&self.raw, false)?;
        Ok(regex.captures(name).map(|caps| {
            let groups = caps
                .iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()));
            PathMatch::with_groups(name, groups)
        }))
    }

    pub fn matches(&self, name: &str) -> PatternResult<bool> {
        Ok(compile_anchored(&self.raw, false)?.is_match(name))
    }

    /// Joins `other` onto this pattern. An absolute `other` replaces the base.
    pub fn join(&self, other: impl Into<PathPattern>) -> Self {
        let other = other.into();
        if other.is_absolute() {
            return other;
        }

        let mut joined = self.raw.clone();
        if !joined.is_empty() && !joined.ends_with('/') {
            joined.push('/');
        }
        joined.push_str(&other.raw);
        Self::new(joined)
    }

    pub fn join_all<I, P>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathPattern>,
    {
        others
            .into_iter()
            .fold(self.clone(), |acc, other| acc.join(other))
    }

    /// Prepends `prefixes`, in order, to this pattern.
    pub fn join_onto<I, P>(&self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathPattern>,
    {
        PathPattern::default().join_all(prefixes).join(self)
    }

    /// Anchors a relative pattern at the current working directory and normalizes it.
    ///
    /// The working directory is escaped so that it only matches itself.
    pub fn abspath(&self) -> PathResult<Self> {
        if self.is_absolute() {
            return Ok(self.normpath());
        }

        let cwd = std::env::current_dir().map_err(|source| PathError::CurrentDir { source })?;
        let cwd = cwd.to_str().ok_or_else(|| PathError::NonUtf8 {
            lossy: cwd.to_string_lossy().into_owned(),
        })?;

        Ok(PathPattern::literal(cwd).join(self).normpath())
    }

    /// Every path on this system matching the pattern, with default options.
    pub fn find_paths(&self) -> MvreResult<Vec<PathMatch>> {
        crate::walker::find_paths(self, &MatchOptions::default())
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for PathPattern {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq<str> for PathPattern {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for PathPattern {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl From<&str> for PathPattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PathPattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for PathPattern {
    fn from(raw: &String) -> Self {
        Self::new(raw.as_str())
    }
}

impl From<&Regex> for PathPattern {
    fn from(regex: &Regex) -> Self {
        Self::new(regex.as_str())
    }
}

impl From<Regex> for PathPattern {
    fn from(regex: Regex) -> Self {
        Self::from(&regex)
    }
}

impl From<&PathPattern> for PathPattern {
    fn from(pattern: &PathPattern) -> Self {
        pattern.clone()
    }
}

impl TryFrom<&OsStr> for PathPattern {
    type Error = PatternError;

    fn try_from(raw: &OsStr) -> Result<Self, Self::Error> {
        raw.to_str()
            .map(Self::new)
            .ok_or_else(|| PatternError::NonUtf8Input {
                lossy: raw.to_string_lossy().into_owned(),
            })
    }
}

impl TryFrom<OsString> for PathPattern {
    type Error = PatternError;

    fn try_from(raw: OsString) -> Result<Self, Self::Error> {
        raw.into_string()
            .map(Self::new)
            .map_err(|raw| PatternError::NonUtf8Input {
                lossy: raw.to_string_lossy().into_owned(),
            })
    }
}

impl TryFrom<&Path> for PathPattern {
    type Error = PatternError;

    fn try_from(raw: &Path) -> Result<Self, Self::Error> {
        Self::try_from(raw.as_os_str())
    }
}

impl TryFrom<PathBuf> for PathPattern {
    type Error = PatternError;

    fn try_from(raw: PathBuf) -> Result<Self, Self::Error> {
        Self::try_from(raw.into_os_string())
    }
}
