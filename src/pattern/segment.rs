use bitflags::bitflags;
use memchr::{memchr, memchr3};

/// Bytes with a special meaning in a regular expression.
const REGEX_SPECIAL: &[u8] = b".+*?[]{}\\^$()|";

bitflags! {
    /// Classification of a single path segment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SegmentFlags: u8 {
        const REGEX = 0b0000_0001;
        const ESCAPE = 0b0000_0010;
        const DOT = 0b0000_0100;
        const DOT_DOT = 0b0000_1000;
    }
}

/// True if the segment contains any regex metacharacter.
#[inline]
pub fn contains_regex(seg: &str) -> bool {
    seg.bytes().any(|b| REGEX_SPECIAL.contains(&b))
}

/// True if the segment contains a backslash escape or a literal newline, carriage return or tab.
#[inline]
pub fn contains_escape(seg: &str) -> bool {
    let bytes = seg.as_bytes();
    if memchr3(b'\n', b'\r', b'\t', bytes).is_some() {
        return true;
    }

    // a trailing lone backslash escapes nothing
    memchr(b'\\', bytes).is_some_and(|idx| idx + 1 < bytes.len())
}

/// A dot only refers to the current directory when it is the whole segment.
#[inline]
pub fn is_dot(seg: &str) -> bool {
    seg == "." || seg == r"\."
}

#[inline]
pub fn is_dot_dot(seg: &str) -> bool {
    seg == ".." || seg == r"\.\."
}

pub fn classify(seg: &str) -> SegmentFlags {
    let mut flags = SegmentFlags::empty();
    flags.set(SegmentFlags::REGEX, contains_regex(seg));
    flags.set(SegmentFlags::ESCAPE, contains_escape(seg));
    flags.set(SegmentFlags::DOT, is_dot(seg));
    flags.set(SegmentFlags::DOT_DOT, is_dot_dot(seg));
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_not_regex() {
        assert!(!contains_regex("report-2024_final"));
        assert!(contains_regex("a(\\d)"));
        assert!(contains_regex(".foo"));
        assert!(contains_regex("a|b"));
    }

    #[test]
    fn escapes_are_detected() {
        assert!(contains_escape(r"\.foo"));
        assert!(contains_escape("tab\there"));
        assert!(!contains_escape("plain"));
        assert!(!contains_escape("trailing\\"));
    }

    #[test]
    fn dots_are_structural_only_as_whole_segments() {
        assert!(is_dot("."));
        assert!(is_dot(r"\."));
        assert!(!is_dot(".foo"));
        assert!(is_dot_dot(".."));
        assert!(is_dot_dot(r"\.\."));
        assert!(!is_dot_dot("..."));
        assert!(!is_dot_dot(r"\.."));
    }

    #[test]
    fn classify_combines_flags() {
        assert_eq!(
            classify(r"\."),
            SegmentFlags::REGEX | SegmentFlags::ESCAPE | SegmentFlags::DOT
        );
        assert_eq!(classify(".."), SegmentFlags::REGEX | SegmentFlags::DOT_DOT);
        assert_eq!(classify("name"), SegmentFlags::empty());
    }
}
