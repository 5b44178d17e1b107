use memchr::memchr2;

/// Replaces the backreferences `\N` and `$N` (`N` a single digit) in `template`.
///
/// `0` stands for `matched`; `N >= 1` for `groups[N - 1]`. A reference to a group that
/// does not exist is copied as written. Substituted text is never scanned again.
#[tracing::instrument(level = "trace", skip(groups), fields(groups = groups.len() as u64))]
pub fn resolve<S: AsRef<str>>(template: &str, matched: &str, groups: &[S]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut copied = 0usize;
    let mut cursor = 0usize;

    while let Some(rel) = memchr2(b'\\', b'$', &bytes[cursor..]) {
        let at = cursor + rel;
        let digit = match bytes.get(at + 1) {
            Some(b) if b.is_ascii_digit() => usize::from(b - b'0'),
            _ => {
                cursor = at + 1;
                continue;
            }
        };

        let replacement = match digit {
            0 => Some(matched),
            n => groups.get(n - 1).map(AsRef::as_ref),
        };

        if let Some(replacement) = replacement {
            out.push_str(&template[copied..at]);
            out.push_str(replacement);
            copied = at + 2;
        }
        cursor = at + 2;
    }

    out.push_str(&template[copied..]);
    out
}
