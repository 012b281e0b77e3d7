//! Nearest-reception routing over a [`CampusGraph`].

use petgraph::algo::astar;
use tracing::debug;

use crate::error::RouteError;
use crate::graph::{CampusGraph, NodeId};
use crate::model::{ReceptionPoint, Totem};

/// The reception selected for a totem and the node path leading to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub reception: ReceptionPoint,
    pub total_weight: f64,
    pub nodes: Vec<NodeId>,
}

/// Shortest path between two nodes as `(total weight, node sequence)`.
///
/// A* with a zero heuristic, i.e. Dijkstra stopping at `to`. Unknown node
/// ids have no path.
pub fn shortest_path(graph: &CampusGraph, from: NodeId, to: NodeId) -> Option<(f64, Vec<NodeId>)> {
    graph.node(from)?;
    graph.node(to)?;
    astar(graph.graph(), from, |node| node == to, |edge| *edge.weight(), |_| 0.0)
}

/// Route `source` to the reachable reception with the lowest total weight.
///
/// Candidates are searched in ascending id order and only a strictly lower
/// weight replaces the current best, so ties go to the lowest id.
pub fn nearest_reception_path(graph: &CampusGraph, source: &Totem) -> Result<RouteMatch, RouteError> {
    let candidates: Vec<&ReceptionPoint> = graph
        .receptions()
        .iter()
        .filter(|reception| reception.active)
        .collect();
    if candidates.is_empty() {
        return Err(RouteError::NoReceptions);
    }

    let source_node = graph
        .totem_node(source.id)
        .ok_or(RouteError::SourceNotInGraph(source.id))?;

    let mut best: Option<(&ReceptionPoint, f64, Vec<NodeId>)> = None;
    for reception in candidates {
        let Some(target) = graph.reception_node(reception.id) else {
            continue;
        };
        let Some((weight, nodes)) = shortest_path(graph, source_node, target) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, best_weight, _)| weight < *best_weight) {
            best = Some((reception, weight, nodes));
        }
    }

    let (reception, total_weight, nodes) = best.ok_or(RouteError::Unreachable)?;

    debug!(
        campus = graph.campus(),
        totem_id = source.id,
        reception_id = reception.id,
        total_weight,
        hops = nodes.len(),
        "Selected nearest reception"
    );

    Ok(RouteMatch {
        reception: reception.clone(),
        total_weight,
        nodes,
    })
}
