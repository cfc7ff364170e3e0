//! # parkir-nav
//!
//! Breadcrumb navigation for the parkir booking dashboard.
//!
//! - A [`RouteMap`] maps each navigation path to a display label and an
//!   optional parent path. It is validated once when built and is read-only
//!   afterwards.
//! - [`build_trail`] walks a path's parents and returns a root-first
//!   [`BreadcrumbTrail`] whose last item (the current page) has no link.
//! - [`path`] holds the normalization helpers used at the request boundary.
//!
//! ## Example
//!
//! ```
//! use parkir_nav::DEFAULT_ROUTES;
//!
//! let trail = DEFAULT_ROUTES.trail("/booking/create");
//! let labels: Vec<&str> = trail.iter().map(|item| item.label.as_str()).collect();
//! assert_eq!(labels, vec!["Dashboard", "Reservasi Parkir", "Booking"]);
//! assert_eq!(trail.current().and_then(|item| item.href.as_deref()), None);
//! ```

pub mod breadcrumb;
pub mod config;
pub mod defaults;
pub mod error;
pub mod path;
pub mod route_map;

pub use breadcrumb::{build_trail, BreadcrumbItem, BreadcrumbTrail};
pub use config::{Config, NavigationConfig, ProjectConfig, ServerConfig};
pub use defaults::{default_route_map, DEFAULT_ROUTES};
pub use error::RouteMapError;
pub use path::{canonicalize, is_valid_path, normalize_path, strip_query, Ancestry};
pub use route_map::{RouteEntry, RouteMap, RouteMapBuilder};
