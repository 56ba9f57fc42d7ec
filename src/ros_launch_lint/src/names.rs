//! ROS graph name helpers
//!
//! Namespaces handled here are always absolute and `/`-terminated
//! (`/`, `/robot/`, `/robot/arm/`).

/// Compute the namespace opened by a scoping element.
///
/// `declared` is the element's `ns` attribute. A relative value is prefixed
/// with `current`; the result always ends with `/`. Without a declaration
/// the current namespace is inherited unchanged.
pub fn normalize_namespace(current: &str, declared: Option<&str>) -> String {
    let Some(declared) = declared else {
        return current.to_string();
    };

    let mut ns = if declared.starts_with('/') {
        declared.to_string()
    } else {
        format!("{}{}", current, declared)
    };

    if !ns.ends_with('/') {
        ns.push('/');
    }
    ns
}

/// Build an absolute namespace path from its segments: `["a", "b"]` -> `/a/b/`
pub fn join_namespace<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut path = String::from("/");
    for segment in segments {
        path.push_str(segment);
        path.push('/');
    }
    path
}

/// Split a namespace into its non-empty segments
pub fn split_namespace(namespace: &str) -> impl Iterator<Item = &str> {
    namespace.split('/').filter(|s| !s.is_empty())
}

/// Resolve a graph name for the node `node_name` living in `namespace`.
///
/// - `/x` is already absolute
/// - `~x` is private to the node: `<namespace><node_name>/x`
/// - `x` is relative to the node's namespace
pub fn resolve_name(namespace: &str, node_name: &str, name: &str) -> String {
    if name.starts_with('/') {
        return name.to_string();
    }

    if let Some(private) = name.strip_prefix('~') {
        let private = private.trim_start_matches('/');
        return format!("{}{}/{}", namespace, node_name, private);
    }

    format!("{}{}", namespace, name)
}
