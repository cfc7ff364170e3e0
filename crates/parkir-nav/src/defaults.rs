// File: src/defaults.rs
// Purpose: Built-in route table of the booking dashboard

use once_cell::sync::Lazy;

use crate::route_map::{RouteEntry, RouteMap};

/// `(path, label, parent)` rows of the dashboard navigation
pub const DEFAULT_TABLE: &[(&str, &str, Option<&str>)] = &[
    ("/dashboard", "Dashboard", None),
    ("/booking", "Reservasi Parkir", Some("/dashboard")),
    ("/booking/create", "Booking", Some("/booking")),
    ("/booking/history", "Riwayat Reservasi", Some("/booking")),
    ("/tickets", "Tiket Parkir", Some("/dashboard")),
    ("/tickets/detail", "Detail Tiket", Some("/tickets")),
    ("/issues", "Laporan Masalah", Some("/dashboard")),
    ("/issues/create", "Buat Laporan", Some("/issues")),
    ("/profile", "Profil", Some("/dashboard")),
];

/// Process-wide copy of the built-in table, validated on first use
pub static DEFAULT_ROUTES: Lazy<RouteMap> = Lazy::new(|| {
    let rows = DEFAULT_TABLE.iter().map(|(path, label, parent)| {
        let entry = RouteEntry {
            label: label.to_string(),
            parent: parent.map(str::to_string),
        };
        (*path, entry)
    });
    RouteMap::new(rows).expect("built-in route table must be acyclic")
});

/// Owned copy of the built-in table, for callers that layer overrides on top
pub fn default_route_map() -> RouteMap {
    DEFAULT_ROUTES.clone()
}
