#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentKind {
    Skip,
    Parent,
    Name,
}

/// Normalizes a path pattern: `A//B`, `A/./B`, `A/\./B` and `A/foo/../B` all become `A/B`.
///
/// Escaped dots (`\.`, `\.\.`) keep their structural meaning when they form a whole
/// segment. Dots anywhere else are left for the regex engine.
#[inline]
#[tracing::instrument(level = "trace", fields(path_len = path.len() as u64))]
pub fn normalize_pattern(path: &str) -> String {
    collapse(path, classify_pattern_component)
}

/// Normalizes a concrete filesystem path. Backslashes carry no meaning here.
#[inline]
pub fn normalize_concrete(path: &str) -> String {
    collapse(path, classify_concrete_component)
}

/// Joins a directory entry name onto a normalized concrete path.
pub fn join_entry(parent: &str, name: &str) -> String {
    if parent == "." {
        return name.to_string();
    }

    let mut joined = String::with_capacity(parent.len() + name.len() + 1);
    joined.push_str(parent);
    if !parent.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(name);
    joined
}

/// Structural parent of a concrete path. No directory is read and no link is followed.
pub fn parent_dir(path: &str) -> String {
    normalize_concrete(&join_entry(path, ".."))
}

fn classify_pattern_component(comp: &str) -> ComponentKind {
    match comp {
        "" | "." | r"\." => ComponentKind::Skip,
        ".." | r"\.\." => ComponentKind::Parent,
        _ => ComponentKind::Name,
    }
}

fn classify_concrete_component(comp: &str) -> ComponentKind {
    match comp {
        "" | "." => ComponentKind::Skip,
        ".." => ComponentKind::Parent,
        _ => ComponentKind::Name,
    }
}

fn collapse(path: &str, classify: fn(&str) -> ComponentKind) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    // POSIX keeps exactly two leading slashes but folds three or more into one.
    let initial_slashes = if path.starts_with("//") && !path.starts_with("///") {
        2
    } else if path.starts_with('/') {
        1
    } else {
        0
    };

    let mut kept: Vec<&str> = Vec::new();
    for comp in path.split('/') {
        match classify(comp) {
            ComponentKind::Skip => {}
            ComponentKind::Name => kept.push(comp),
            ComponentKind::Parent => {
                let leading_relative = initial_slashes == 0 && kept.is_empty();
                let after_parent = kept
                    .last()
                    .is_some_and(|last| classify(last) == ComponentKind::Parent);

                if leading_relative || after_parent {
                    kept.push(comp);
                } else {
                    // at the root this is a no-op
                    kept.pop();
                }
            }
        }
    }

    let mut out = "/".repeat(initial_slashes);
    out.push_str(&kept.join("/"));

    if out.is_empty() {
        ".".to_string()
    } else {
        out
    }
}
