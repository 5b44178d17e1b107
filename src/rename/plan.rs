use serde::{Deserialize, Serialize};
use std::fmt;

use crate::backref::resolve;
use crate::errors::MvreResult;
use crate::options::{GroupZero, RenameOptions};
use crate::path::{Environment, SystemEnvironment};
use crate::pattern::PathPattern;
use crate::types::PathMatch;
use crate::walker::find_paths_with;

/// One planned move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenamePair {
    pub source: String,
    pub destination: String,
}

impl fmt::Display for RenamePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Every move `pattern` and `template` describe, in walk order.
pub fn plan_renames(
    pattern: &PathPattern,
    template: &str,
    options: &RenameOptions,
) -> MvreResult<Vec<RenamePair>> {
    plan_renames_with(pattern, template, options, &SystemEnvironment)
}

#[tracing::instrument(level = "debug", skip(pattern, options, env), fields(pattern = %pattern))]
pub fn plan_renames_with<E>(
    pattern: &PathPattern,
    template: &str,
    options: &RenameOptions,
    env: &E,
) -> MvreResult<Vec<RenamePair>>
where
    E: Environment + ?Sized,
{
    options.validate()?;

    let matches = find_paths_with(pattern, &options.matching, env)?;
    let plan: Vec<RenamePair> = matches
        .iter()
        .filter_map(|found| pair_for(found, template, options.group_zero))
        .collect();

    tracing::debug!(
        matched = matches.len() as u64,
        planned = plan.len() as u64,
        "plan ready"
    );
    Ok(plan)
}

/// The move for a single match, or `None` when the destination is the source itself.
pub fn pair_for(found: &PathMatch, template: &str, group_zero: GroupZero) -> Option<RenamePair> {
    let matched = match group_zero {
        GroupZero::SourcePath => found.path(),
        GroupZero::LeafName => found.leaf_name(),
    };
    let destination = resolve(template, matched, found.groups());

    if destination == found.path() {
        tracing::debug!(path = found.path(), "destination equals source, skipped");
        return None;
    }

    Some(RenamePair {
        source: found.path().to_string(),
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(path: &str, groups: &[&str]) -> PathMatch {
        PathMatch::with_groups(path, groups.iter().map(|g| g.to_string()))
    }

    #[test]
    fn group_zero_defaults_to_the_source_path() {
        let pair = pair_for(&found("/tmp/a1", &["1"]), "$0.bak", GroupZero::default()).unwrap();
        assert_eq!(pair.source, "/tmp/a1");
        assert_eq!(pair.destination, "/tmp/a1.bak");
    }

    #[test]
    fn leaf_name_group_zero_uses_the_last_segment() {
        let pair = pair_for(&found("/tmp/a1", &["1"]), "/srv/$0", GroupZero::LeafName).unwrap();
        assert_eq!(pair.destination, "/srv/a1");
    }

    #[test]
    fn identical_destination_is_dropped() {
        assert!(pair_for(&found("/tmp/a1", &["1"]), "/tmp/a$1", GroupZero::default()).is_none());
    }

    #[test]
    fn pair_displays_as_an_arrow() {
        let pair = RenamePair {
            source: "a".into(),
            destination: "b".into(),
        };
        assert_eq!(pair.to_string(), "a -> b");
    }
}
