//! Request-level entry points: look up, build, route, assemble.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::assembler::assemble;
use crate::error::{NearestPathError, RouteError, StoreError};
use crate::graph::{build_graph, CampusGraph, RouterConfig};
use crate::model::{RoutePath, Totem};
use crate::router::nearest_reception_path;
use crate::traits::SpatialPointStore;

/// Route result for one totem of a campus batch.
#[derive(Debug, Clone)]
pub struct TotemRoute {
    pub totem_id: i64,
    pub result: Result<RoutePath, RouteError>,
}

/// Nearest reception path for a stored totem.
///
/// Each call reads a fresh snapshot and builds its own graph.
pub fn nearest_path<S>(store: &S, totem_id: i64, config: &RouterConfig) -> Result<RoutePath, NearestPathError>
where
    S: SpatialPointStore + ?Sized,
{
    let totem = store.get_totem(totem_id)?;
    let graph = build_graph(store, &totem.campus, config)?;

    match route_totem(&graph, &totem) {
        Ok(route) => {
            info!(totem_id, campus = %totem.campus, points = route.points.len(), "Nearest path found");
            Ok(route)
        }
        Err(err) => {
            warn!(totem_id, campus = %totem.campus, error = %err, "Nearest path failed");
            Err(err.into())
        }
    }
}

/// Route every totem of `campus` against one shared graph.
///
/// Results are ordered by totem id.
pub fn campus_routes<S>(store: &S, campus: &str, config: &RouterConfig) -> Result<Vec<TotemRoute>, StoreError>
where
    S: SpatialPointStore + ?Sized,
{
    let graph = build_graph(store, campus, config)?;
    let routes: Vec<TotemRoute> = graph
        .totems()
        .par_iter()
        .map(|totem| TotemRoute {
            totem_id: totem.id,
            result: route_totem(&graph, totem),
        })
        .collect();

    let routed = routes.iter().filter(|route| route.result.is_ok()).count();
    info!(campus, totems = routes.len(), routed, "Routed campus totems");
    Ok(routes)
}

fn route_totem(graph: &CampusGraph, totem: &Totem) -> Result<RoutePath, RouteError> {
    let found = nearest_reception_path(graph, totem)?;
    let points = graph.points_of(&found.nodes);
    Ok(assemble(&points, totem, &found.reception))
}
