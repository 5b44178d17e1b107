use smallvec::SmallVec;

use super::CompiledSegment;

/// Capture groups of one matched segment, in group order.
pub type CaptureList = SmallVec<[String; 4]>;

/// Matches a directory entry name against a compiled segment.
///
/// Structural segments never match a name. A group that did not take part in the
/// match contributes an empty string, so the list always holds
/// [`CompiledSegment::group_count`] entries.
#[tracing::instrument(level = "trace", skip(segment), fields(segment = %segment.raw()))]
pub fn match_segment(name: &str, segment: &CompiledSegment) -> Option<CaptureList> {
    match segment {
        CompiledSegment::CurrentDir | CompiledSegment::ParentDir => None,
        CompiledSegment::Literal(lit) => (lit.as_ref() == name).then(CaptureList::new),
        CompiledSegment::Pattern { regex, .. } => {
            let caps = regex.captures(name)?;
            Some(
                caps.iter()
                    .skip(1)
                    .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                    .collect(),
            )
        }
    }
}
