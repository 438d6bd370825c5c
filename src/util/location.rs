//! URL helpers for navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard builds login redirects from the requested full path, and the
//! login page turns the `redirect` query value back into a navigation target.
//! Both directions live here so the encoding stays symmetric.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Split a URL into `(path, query, fragment)`, without the `?`/`#` markers.
pub fn split_full_path(url: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    (path, query, fragment)
}

/// Reassemble a full path from router location parts.
///
/// `search` and `hash` are accepted with or without their leading marker;
/// empty parts are dropped.
pub fn full_path(pathname: &str, search: &str, hash: &str) -> String {
    let mut out = if pathname.is_empty() { "/".to_owned() } else { pathname.to_owned() };
    let search = search.strip_prefix('?').unwrap_or(search);
    if !search.is_empty() {
        out.push('?');
        out.push_str(search);
    }
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    if !hash.is_empty() {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Build `<login_path>?<param>=<encoded target>`.
pub fn login_location(login_path: &str, param: &str, target: &str) -> String {
    format!("{login_path}?{param}={}", urlencoding::encode(target))
}

/// Accept a post-login target only if it stays on this origin.
///
/// Anything that is not a single-slash absolute path falls back to `/`.
pub fn sanitize_redirect_target(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(target) if is_local_path(target) => target.to_owned(),
        _ => "/".to_owned(),
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control)
}
