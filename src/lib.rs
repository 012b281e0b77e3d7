//! campus-router core
//!
//! Builds per-campus walking graphs from stored polylines and routes QR
//! totems to their nearest reception point.

pub mod error;
pub mod model;
pub mod traits;
pub mod polyline;
pub mod distance;
pub mod graph;
pub mod router;
pub mod assembler;
pub mod store;
pub mod rest;
pub mod service;

pub use graph::{build_graph, CampusGraph, RouterConfig, DEFAULT_TOLERANCE};
pub use router::{nearest_reception_path, RouteMatch};
pub use service::{campus_routes, nearest_path};
