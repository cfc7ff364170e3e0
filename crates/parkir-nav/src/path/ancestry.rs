use std::collections::{HashMap, HashSet};

use crate::route_map::RouteEntry;

/// Lazy iterator over a path's ancestry chain
///
/// For `/booking/create` in the default table, yields
/// `/booking/create` → `/booking` → `/dashboard`.
///
/// The walk follows `parent` links by exact-match lookup and stops at:
/// - an entry without a parent (or with an empty parent),
/// - a parent that has no entry of its own,
/// - a path that was already yielded.
///
/// The last rule keeps the walk finite over a table whose parent links
/// loop. Validated [`RouteMap`](crate::RouteMap)s never loop, but the
/// iterator does not rely on that.
///
/// # Examples
///
/// ```
/// use parkir_nav::RouteMapBuilder;
///
/// let routes = RouteMapBuilder::new()
///     .route("/dashboard", "Dashboard")
///     .child("/booking", "Reservasi Parkir", "/dashboard")
///     .build()
///     .unwrap();
///
/// let chain: Vec<&str> = routes.ancestry("/booking").map(|(path, _)| path).collect();
/// assert_eq!(chain, vec!["/booking", "/dashboard"]);
/// ```
#[derive(Debug, Clone)]
pub struct Ancestry<'a> {
    routes: &'a HashMap<String, RouteEntry>,
    current: Option<(&'a str, &'a RouteEntry)>,
    visited: HashSet<&'a str>,
    revisited: Option<&'a str>,
}

impl<'a> Ancestry<'a> {
    /// Starts a walk at `start` over a raw path table
    pub fn new(routes: &'a HashMap<String, RouteEntry>, start: &str) -> Self {
        Self {
            routes,
            current: lookup(routes, start),
            visited: HashSet::new(),
            revisited: None,
        }
    }

    /// The path the walk stopped on because it had already been yielded
    ///
    /// `Some` only after the iterator has run into a loop.
    pub fn revisited(&self) -> Option<&'a str> {
        self.revisited
    }
}

fn lookup<'a>(routes: &'a HashMap<String, RouteEntry>, path: &str) -> Option<(&'a str, &'a RouteEntry)> {
    if path.is_empty() {
        return None;
    }
    routes
        .get_key_value(path)
        .map(|(key, entry)| (key.as_str(), entry))
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = (&'a str, &'a RouteEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, entry) = self.current.take()?;

        if !self.visited.insert(path) {
            self.revisited = Some(path);
            return None;
        }

        self.current = entry
            .parent
            .as_deref()
            .and_then(|parent| lookup(self.routes, parent));

        Some((path, entry))
    }
}
