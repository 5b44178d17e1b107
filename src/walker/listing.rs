use std::fs;

/// Entry names of `dir` in lexicographic order.
///
/// Returns `None` when the directory cannot be read: a missing entry, a file, or a
/// permission problem simply ends that branch of the search. Names that are not
/// valid UTF-8 cannot be matched and are skipped.
pub(crate) fn read_sorted_names(dir: &str) -> Option<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir, error = %err, "pruning unreadable branch");
            return None;
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.file_name()),
            Err(err) => {
                tracing::debug!(dir, error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter_map(|name| match name.into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                tracing::debug!(dir, name = ?raw, "skipping non-UTF-8 entry");
                None
            }
        })
        .collect();

    names.sort_unstable();
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_names_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b", "a2", "a1", ".hidden"] {
            fs::write(tmp.path().join(name), "x").unwrap();
        }

        let names = read_sorted_names(tmp.path().to_str().unwrap()).unwrap();
        assert_eq!(names, [".hidden", "a1", "a2", "b"]);
    }

    #[test]
    fn files_and_missing_paths_are_pruned() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, "x").unwrap();

        assert!(read_sorted_names(file.to_str().unwrap()).is_none());
        assert!(read_sorted_names(tmp.path().join("absent").to_str().unwrap()).is_none());
    }
}
