/// Navigation path helpers used at the request boundary
///
/// The breadcrumb builder itself does exact-match lookups only; these
/// functions exist so callers can hand it a canonical path.

use std::borrow::Cow;

pub mod ancestry;
pub use ancestry::Ancestry;

/// Checks whether a navigation path is already in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use parkir_nav::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/booking/create"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("booking"));
/// assert!(!is_valid_path("/booking/"));
/// assert!(!is_valid_path("/booking//create"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalizes a navigation path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Trailing slashes: `/booking/` → `/booking`
/// - Double slashes: `/booking//create` → `/booking/create`
/// - Backslashes: `\tickets\detail` → `/tickets/detail`
/// - Missing leading slash: `dashboard` → `/dashboard`
///
/// # Examples
///
/// ```
/// use parkir_nav::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/dashboard"), Cow::Borrowed("/dashboard")));
/// assert_eq!(normalize_path("/booking/create/"), "/booking/create");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Drops the query string and fragment from a URL path
///
/// ```
/// use parkir_nav::path::strip_query;
///
/// assert_eq!(strip_query("/tickets/detail?id=42"), "/tickets/detail");
/// assert_eq!(strip_query("/issues#open"), "/issues");
/// assert_eq!(strip_query("/profile"), "/profile");
/// ```
pub fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(pos) => &path[..pos],
        None => path,
    }
}

/// Strips the query and normalizes in one step
///
/// This is what the HTTP boundary applies before calling the builder.
pub fn canonicalize(path: &str) -> Cow<'_, str> {
    normalize_path(strip_query(path))
}
