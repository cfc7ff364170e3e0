// File: src/breadcrumb.rs
// Purpose: Breadcrumb trail derivation from a route table

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::route_map::RouteMap;

/// One entry of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,

    /// Link target; `None` for the page currently displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

/// Root-first list of breadcrumb items, current page last
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail(Vec<BreadcrumbItem>);

impl BreadcrumbTrail {
    /// The entry for the page being displayed
    pub fn current(&self) -> Option<&BreadcrumbItem> {
        self.0.last()
    }

    pub fn into_vec(self) -> Vec<BreadcrumbItem> {
        self.0
    }
}

impl Deref for BreadcrumbTrail {
    type Target = [BreadcrumbItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for BreadcrumbTrail {
    type Item = BreadcrumbItem;
    type IntoIter = std::vec::IntoIter<BreadcrumbItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BreadcrumbTrail {
    type Item = &'a BreadcrumbItem;
    type IntoIter = std::slice::Iter<'a, BreadcrumbItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Derives the breadcrumb trail for `path`
///
/// Follows parent links from `path` by exact-match lookup, then orders the
/// result root-first. Every item links to its own path except the last,
/// which is the page being shown.
///
/// An unknown `path` gives an empty trail. A parent with no entry of its
/// own cuts the trail off at that point. Neither case is an error.
///
/// # Examples
///
/// ```
/// use parkir_nav::{build_trail, BreadcrumbItem, RouteMapBuilder};
///
/// let routes = RouteMapBuilder::new()
///     .route("/dashboard", "Dashboard")
///     .child("/booking", "Reservasi Parkir", "/dashboard")
///     .child("/booking/create", "Booking", "/booking")
///     .build()
///     .unwrap();
///
/// let trail = build_trail("/booking/create", &routes);
/// assert_eq!(trail.to_vec(), vec![
///     BreadcrumbItem::link("Dashboard", "/dashboard"),
///     BreadcrumbItem::link("Reservasi Parkir", "/booking"),
///     BreadcrumbItem::current("Booking"),
/// ]);
///
/// assert!(build_trail("/unknown", &routes).is_empty());
/// ```
pub fn build_trail(path: &str, routes: &RouteMap) -> BreadcrumbTrail {
    let mut items: Vec<BreadcrumbItem> = routes
        .ancestry(path)
        .map(|(href, entry)| BreadcrumbItem::link(entry.label.as_str(), href))
        .collect();

    items.reverse();

    if let Some(last) = items.last_mut() {
        last.href = None;
    }

    BreadcrumbTrail(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteMapBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_root_has_no_link() {
        let routes = RouteMapBuilder::new().route("/dashboard", "Dashboard").build().unwrap();

        let trail = build_trail("/dashboard", &routes);
        assert_eq!(trail.to_vec(), vec![BreadcrumbItem::current("Dashboard")]);
        assert_eq!(trail.current().map(|i| i.is_link()), Some(false));
    }

    #[test]
    fn test_empty_path_gives_empty_trail() {
        let routes = RouteMapBuilder::new().route("/dashboard", "Dashboard").build().unwrap();
        assert!(build_trail("", &routes).is_empty());
    }

    #[test]
    fn test_trail_serializes_as_array() {
        let routes = RouteMapBuilder::new()
            .route("/dashboard", "Dashboard")
            .child("/profile", "Profil", "/dashboard")
            .build()
            .unwrap();

        let json = serde_json::to_string(&build_trail("/profile", &routes)).unwrap();
        assert_eq!(json, r#"[{"label":"Dashboard","href":"/dashboard"},{"label":"Profil"}]"#);
    }
}
