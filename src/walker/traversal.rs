use std::collections::VecDeque;

use super::listing::read_sorted_names;
use crate::errors::MvreResult;
use crate::options::MatchOptions;
use crate::path::{Environment, SystemEnvironment, normalize_concrete};
use crate::pattern::{CompiledSegment, PathPattern, PatternResult, match_segment};
use crate::types::PathMatch;

const QUEUE_CAPACITY: usize = 64;

/// Every concrete path matching `pattern`, with capture groups in segment order.
///
/// Expansion reads the process environment and the system user database.
pub fn find_paths(pattern: &PathPattern, options: &MatchOptions) -> MvreResult<Vec<PathMatch>> {
    find_paths_with(pattern, options, &SystemEnvironment)
}

/// Like [`find_paths`], expanding `~` and variables through `env`.
///
/// Every segment is compiled before the first directory is read, so an invalid
/// regex fails the whole search. Unreadable directories only end their own branch.
#[tracing::instrument(level = "debug", skip(pattern, options, env), fields(pattern = %pattern))]
pub fn find_paths_with<E>(
    pattern: &PathPattern,
    options: &MatchOptions,
    env: &E,
) -> MvreResult<Vec<PathMatch>>
where
    E: Environment + ?Sized,
{
    options.validate()?;

    let mut expanded = pattern.clone();
    if options.expand_user {
        expanded = expanded.expand_user_with(env);
    }
    if options.expand_vars {
        expanded = expanded.expand_vars_with(env);
    }
    let normalized = expanded.normpath();

    let segments = normalized
        .tokens()
        .iter()
        .map(|token| token.compile(options.case_insensitive))
        .collect::<PatternResult<Vec<_>>>()?;

    let seed = if normalized.is_absolute() {
        PathMatch::new("/")
    } else {
        PathMatch::new(normalize_concrete(&options.relative_base))
    };

    // only separators: the root; "." : the starting directory
    if segments.is_empty() || normalized == "." {
        return Ok(vec![seed]);
    }

    tracing::trace!(normalized = %normalized, levels = segments.len() as u64, "walking");
    Ok(walk(seed, &segments))
}

/// Breadth-first expansion, one pattern segment per level.
///
/// Counters track how many queued entries belong to the level being consumed and how
/// many were produced for the next one, so the queue never mixes levels.
fn walk(seed: PathMatch, segments: &[CompiledSegment]) -> Vec<PathMatch> {
    let mut queue: VecDeque<PathMatch> = VecDeque::with_capacity(QUEUE_CAPACITY);
    queue.push_back(seed);

    let mut levels = segments.iter();
    let Some(mut segment) = levels.next() else {
        return queue.into();
    };
    let mut remaining_in_level = 1usize;
    let mut produced_for_next = 0usize;

    loop {
        if remaining_in_level == 0 {
            match levels.next() {
                Some(next) => segment = next,
                None => break,
            }
            remaining_in_level = produced_for_next;
            produced_for_next = 0;
        }

        let Some(current) = queue.pop_front() else {
            break;
        };
        remaining_in_level -= 1;
        produced_for_next += expand_entry(current, segment, &mut queue);
    }

    queue.into()
}

/// Pushes the successors of `current` for `segment`; returns how many were pushed.
fn expand_entry(
    current: PathMatch,
    segment: &CompiledSegment,
    queue: &mut VecDeque<PathMatch>,
) -> usize {
    match segment {
        CompiledSegment::CurrentDir => {
            queue.push_back(current);
            1
        }
        CompiledSegment::ParentDir => {
            queue.push_back(current.parent());
            1
        }
        CompiledSegment::Literal(_) | CompiledSegment::Pattern { .. } => {
            let Some(names) = read_sorted_names(current.path()) else {
                return 0;
            };

            let mut produced = 0usize;
            for name in names {
                if let Some(captures) = match_segment(&name, segment) {
                    queue.push_back(current.child(&name, captures));
                    produced += 1;
                }
            }
            produced
        }
    }
}
