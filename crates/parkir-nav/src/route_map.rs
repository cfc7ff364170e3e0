// File: src/route_map.rs
// Purpose: Immutable table of navigation paths with their labels and parents

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::breadcrumb::{build_trail, BreadcrumbTrail};
use crate::error::RouteMapError;
use crate::path::{is_valid_path, Ancestry};

/// Display label and optional parent of a single navigation path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Text shown in the breadcrumb
    pub label: String,

    /// Path of the page one level up, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl RouteEntry {
    /// Entry with no parent
    pub fn root(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parent: None,
        }
    }

    /// Entry nested under `parent`
    pub fn child(label: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parent: Some(parent.into()),
        }
    }
}

/// Validated, read-only route table
///
/// Every constructor checks the table once (see [`RouteMapError`]), so a
/// `RouteMap` value always has an acyclic parent graph. Share it by
/// reference or behind an `Arc`; there is no way to mutate it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMap {
    routes: HashMap<String, RouteEntry>,
}

/// On-disk shape of a standalone route table
#[derive(Debug, Deserialize)]
struct RouteTable {
    #[serde(default)]
    routes: BTreeMap<String, RouteEntry>,
}

impl RouteMap {
    /// Builds a table from `(path, entry)` pairs
    ///
    /// Fails on duplicate paths, empty paths or labels, and parent cycles.
    pub fn new<I, K>(entries: I) -> Result<Self, RouteMapError>
    where
        I: IntoIterator<Item = (K, RouteEntry)>,
        K: Into<String>,
    {
        let mut routes = HashMap::new();
        for (path, entry) in entries {
            let path = path.into();
            if routes.contains_key(&path) {
                return Err(RouteMapError::DuplicatePath(path));
            }
            routes.insert(path, entry);
        }

        let map = Self { routes };
        map.validate()?;
        Ok(map)
    }

    /// Parses a `[routes]` table
    ///
    /// ```
    /// use parkir_nav::RouteMap;
    ///
    /// let routes = RouteMap::from_toml_str(r#"
    ///     [routes]
    ///     "/dashboard" = { label = "Dashboard" }
    ///     "/booking" = { label = "Reservasi Parkir", parent = "/dashboard" }
    /// "#).unwrap();
    ///
    /// assert_eq!(routes.len(), 2);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, RouteMapError> {
        let table: RouteTable = toml::from_str(content)?;
        Self::new(table.routes)
    }

    /// Returns a new table with `overrides` replacing or adding entries
    ///
    /// The merged table is validated again, so an override can introduce
    /// a cycle error even when both inputs were fine on their own.
    pub fn with_overrides<I, K>(self, overrides: I) -> Result<Self, RouteMapError>
    where
        I: IntoIterator<Item = (K, RouteEntry)>,
        K: Into<String>,
    {
        let mut routes = self.routes;
        for (path, entry) in overrides {
            routes.insert(path.into(), entry);
        }

        let map = Self { routes };
        map.validate()?;
        Ok(map)
    }

    /// Checks the configuration invariants of the table
    ///
    /// Paths are visited in sorted order so the reported error is stable.
    fn validate(&self) -> Result<(), RouteMapError> {
        let paths = self.paths();

        for path in &paths {
            if path.is_empty() {
                return Err(RouteMapError::EmptyPath);
            }
            if self.routes[*path].label.trim().is_empty() {
                return Err(RouteMapError::EmptyLabel {
                    path: path.to_string(),
                });
            }
        }

        for path in &paths {
            let mut walk = self.ancestry(path);
            let chain: Vec<&str> = walk.by_ref().map(|(p, _)| p).collect();

            if let Some(repeat) = walk.revisited() {
                let start = chain.iter().position(|p| *p == repeat).unwrap_or(0);
                let mut cycle: Vec<String> = chain[start..].iter().map(|p| p.to_string()).collect();
                cycle.push(repeat.to_string());
                return Err(RouteMapError::Cycle { chain: cycle });
            }
        }

        for path in &paths {
            if !is_valid_path(path) {
                warn!("Route path {:?} is not canonical and will only match exactly", path);
            }
            if let Some(parent) = self.routes[*path].parent.as_deref() {
                if !parent.is_empty() && !self.routes.contains_key(parent) {
                    warn!("Route {} names unknown parent {}; its trail stops there", path, parent);
                }
            }
        }

        Ok(())
    }

    /// Looks up the entry for an exact path
    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All known paths, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Entries in sorted path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> + '_ {
        self.paths()
            .into_iter()
            .map(move |path| (path, &self.routes[path]))
    }

    /// Walks from `path` up through its parents
    pub fn ancestry(&self, path: &str) -> Ancestry<'_> {
        Ancestry::new(&self.routes, path)
    }

    /// Breadcrumb trail for `path`; see [`build_trail`]
    pub fn trail(&self, path: &str) -> BreadcrumbTrail {
        build_trail(path, self)
    }
}

/// Builder for [`RouteMap`]
///
/// # Examples
///
/// ```
/// use parkir_nav::RouteMapBuilder;
///
/// let routes = RouteMapBuilder::new()
///     .route("/dashboard", "Dashboard")
///     .child("/booking", "Reservasi Parkir", "/dashboard")
///     .child("/booking/create", "Booking", "/booking")
///     .build()
///     .unwrap();
///
/// assert!(routes.contains("/booking/create"));
/// ```
#[derive(Debug, Default)]
pub struct RouteMapBuilder {
    entries: Vec<(String, RouteEntry)>,
}

impl RouteMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level path
    pub fn route(self, path: impl Into<String>, label: impl Into<String>) -> Self {
        self.entry(path, RouteEntry::root(label))
    }

    /// Adds a path nested under `parent`
    pub fn child(
        self,
        path: impl Into<String>,
        label: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        self.entry(path, RouteEntry::child(label, parent))
    }

    pub fn entry(mut self, path: impl Into<String>, entry: RouteEntry) -> Self {
        self.entries.push((path.into(), entry));
        self
    }

    /// Validates and freezes the table
    pub fn build(self) -> Result<RouteMap, RouteMapError> {
        RouteMap::new(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_accepts_tree() {
        let routes = RouteMapBuilder::new()
            .route("/dashboard", "Dashboard")
            .child("/booking", "Reservasi Parkir", "/dashboard")
            .build()
            .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes.get("/booking"), Some(&RouteEntry::child("Reservasi Parkir", "/dashboard")));
        assert_eq!(routes.paths(), vec!["/booking", "/dashboard"]);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let routes = RouteMapBuilder::new().build().unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteMapBuilder::new()
            .route("/dashboard", "Dashboard")
            .route("/dashboard", "Beranda")
            .build()
            .unwrap_err();

        assert!(matches!(err, RouteMapError::DuplicatePath(ref p) if p == "/dashboard"));
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = RouteMapBuilder::new().route("/profile", "  ").build().unwrap_err();
        assert!(matches!(err, RouteMapError::EmptyLabel { ref path } if path == "/profile"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = RouteMapBuilder::new().route("", "Nothing").build().unwrap_err();
        assert!(matches!(err, RouteMapError::EmptyPath));
    }

    #[test]
    fn test_two_cycle_rejected() {
        let err = RouteMapBuilder::new()
            .child("/a", "A", "/b")
            .child("/b", "B", "/a")
            .build()
            .unwrap_err();

        match err {
            RouteMapError::Cycle { chain } => assert_eq!(chain, vec!["/a", "/b", "/a"]),
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_below_tail_reports_only_loop() {
        let err = RouteMapBuilder::new()
            .child("/a", "A", "/b")
            .child("/b", "B", "/c")
            .child("/c", "C", "/b")
            .build()
            .unwrap_err();

        match err {
            RouteMapError::Cycle { chain } => assert_eq!(chain, vec!["/b", "/c", "/b"]),
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_three_cycle_behind_tail_reports_full_loop() {
        let err = RouteMapBuilder::new()
            .child("/x", "X", "/a")
            .child("/a", "A", "/b")
            .child("/b", "B", "/c")
            .child("/c", "C", "/a")
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "Route parents form a cycle: /a -> /b -> /c -> /a");
        match err {
            RouteMapError::Cycle { chain } => assert_eq!(chain, vec!["/a", "/b", "/c", "/a"]),
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_parent_rejected() {
        let err = RouteMapBuilder::new().child("/loop", "Loop", "/loop").build().unwrap_err();
        assert_eq!(err.to_string(), "Route parents form a cycle: /loop -> /loop");
    }

    #[test]
    fn test_dangling_parent_allowed() {
        let routes = RouteMapBuilder::new()
            .child("/tickets/detail", "Detail Tiket", "/tickets")
            .build()
            .unwrap();
        assert!(routes.contains("/tickets/detail"));
        assert!(!routes.contains("/tickets"));
    }

    #[test]
    fn test_from_toml_str() {
        let routes = RouteMap::from_toml_str(
            r#"
            [routes]
            "/dashboard" = { label = "Dashboard" }
            "/issues" = { label = "Laporan Masalah", parent = "/dashboard" }
            "#,
        )
        .unwrap();

        assert_eq!(routes.get("/dashboard"), Some(&RouteEntry::root("Dashboard")));
        assert_eq!(routes.get("/issues").and_then(|e| e.parent.as_deref()), Some("/dashboard"));
    }

    #[test]
    fn test_from_toml_str_rejects_cycle() {
        let err = RouteMap::from_toml_str(
            r#"
            [routes]
            "/a" = { label = "A", parent = "/b" }
            "/b" = { label = "B", parent = "/a" }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, RouteMapError::Cycle { .. }));
    }

    #[test]
    fn test_from_toml_str_parse_error() {
        let err = RouteMap::from_toml_str("[routes]\n\"/a\" = 5").unwrap_err();
        assert!(matches!(err, RouteMapError::Parse(_)));
    }

    #[test]
    fn test_with_overrides_replaces_and_revalidates() {
        let routes = RouteMapBuilder::new()
            .route("/dashboard", "Dashboard")
            .child("/booking", "Reservasi Parkir", "/dashboard")
            .build()
            .unwrap();

        let relabelled = routes
            .clone()
            .with_overrides([("/booking", RouteEntry::child("Reservasi", "/dashboard"))])
            .unwrap();
        assert_eq!(relabelled.get("/booking").map(|e| e.label.as_str()), Some("Reservasi"));
        assert_eq!(relabelled.len(), 2);

        let err = routes
            .with_overrides([("/dashboard", RouteEntry::child("Dashboard", "/booking"))])
            .unwrap_err();
        assert!(matches!(err, RouteMapError::Cycle { .. }));
    }

    #[test]
    fn test_entry_serde_omits_missing_parent() {
        let json = serde_json::to_string(&RouteEntry::root("Profil")).unwrap();
        assert_eq!(json, r#"{"label":"Profil"}"#);
    }
}
