use std::borrow::Cow;

use super::passwd;

/// Source of environment variables and home directories used during expansion.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;

    /// Home directory of the user running the process, from the user database.
    fn current_user_home(&self) -> Option<String>;

    /// Home directory of `user`, from the user database.
    fn user_home(&self, user: &str) -> Option<String>;
}

/// Reads the process environment and the system user database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn current_user_home(&self) -> Option<String> {
        passwd::current_user_home()
    }

    fn user_home(&self, user: &str) -> Option<String> {
        passwd::user_home(user)
    }
}

/// Expands a leading `~` or `~user`.
///
/// `~` resolves to `$HOME`, falling back to the current user's database entry.
/// The path is returned unchanged when it does not start with `~` or the home
/// directory cannot be resolved.
#[tracing::instrument(level = "trace", skip(env))]
pub fn expand_user<'a, E>(path: &'a str, env: &E) -> Cow<'a, str>
where
    E: Environment + ?Sized,
{
    let Some(rest) = path.strip_prefix('~') else {
        return Cow::Borrowed(path);
    };

    let user_end = memchr::memchr(b'/', rest.as_bytes()).unwrap_or(rest.len());
    let (user, tail) = rest.split_at(user_end);

    let home = if user.is_empty() {
        env.var("HOME")
            .filter(|home| !home.is_empty())
            .or_else(|| env.current_user_home())
    } else {
        env.user_home(user)
    };

    let Some(home) = home else {
        tracing::debug!(user, "home directory unresolved; leaving path unexpanded");
        return Cow::Borrowed(path);
    };

    let trimmed = home.trim_end_matches('/');
    // a home of "/" must not produce a doubled separator
    let home = if !trimmed.is_empty() || !tail.is_empty() {
        trimmed
    } else {
        "/"
    };

    Cow::Owned(format!("{home}{tail}"))
}

/// Expands `$name` and `${name}`. Unknown variables are left as written.
#[tracing::instrument(level = "trace", skip(env))]
pub fn expand_vars<'a, E>(path: &'a str, env: &E) -> Cow<'a, str>
where
    E: Environment + ?Sized,
{
    if memchr::memchr(b'$', path.as_bytes()).is_none() {
        return Cow::Borrowed(path);
    }

    let escaped = escape_lone_dollars(path);
    let expanded = shellexpand::env_with_context_no_errors(&*escaped, |name: &str| env.var(name));
    Cow::Owned(expanded.into_owned())
}

/// Doubles every `$` that does not start a variable name.
///
/// shellexpand reads `$$` as an escaped `$`; doubling the lone ones makes them come
/// back as written, so `$$` stays `$$` and `a$$D` still expands `$D`.
fn escape_lone_dollars(path: &str) -> Cow<'_, str> {
    let starts_name = |at: usize| {
        path[at + 1..]
            .chars()
            .next()
            .is_some_and(|c| c == '{' || c == '_' || c.is_alphanumeric())
    };

    let mut dollars = memchr::memchr_iter(b'$', path.as_bytes())
        .filter(|&at| !starts_name(at));
    let Some(first) = dollars.next() else {
        return Cow::Borrowed(path);
    };

    let mut out = String::with_capacity(path.len() + 2);
    let mut copied = 0;
    for at in std::iter::once(first).chain(dollars) {
        out.push_str(&path[copied..=at]);
        out.push('$');
        copied = at + 1;
    }
    out.push_str(&path[copied..]);
    Cow::Owned(out)
}
