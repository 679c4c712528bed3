/// Translates a dotted key into an absolute parameter path under `prefix`.
///
/// The prefix may carry leading or trailing slashes; empty segments are
/// dropped, so the result always has exactly one leading `/` and no trailing
/// one.
///
/// ```
/// use dragon_params::translate_path;
///
/// assert_eq!(translate_path("/test/", "foo.bar"), "/test/foo/bar");
/// assert_eq!(translate_path("test", "foo.bar"), "/test/foo/bar");
/// ```
pub fn translate_path(prefix: &str, key: &str) -> String {
    let segments = prefix
        .split('/')
        .chain(key.split('.'))
        .filter(|segment| !segment.is_empty());

    let mut path = String::with_capacity(prefix.len() + key.len() + 2);
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}
