//! Per-campus walking graph.
//!
//! Backed by a petgraph [`UnGraph`]. Polyline vertices are interned by exact
//! coordinates, so paths sharing a vertex connect. Totems and receptions
//! always get their own node and are attached with zero-weight edges to
//! every polyline vertex within the tolerance, to a vertex at exactly the
//! same coordinates, and to any other totem or reception on the same spot.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::distance::euclidean;
use crate::error::StoreError;
use crate::model::{Point, ReceptionPoint, Totem};
use crate::polyline::Polyline;
use crate::traits::SpatialPointStore;

/// Per-axis matching tolerance in degrees.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Grid cells scanned around a query cell. Two cells is enough to absorb
/// rounding in the cell computation; the strict comparison decides.
const GRID_SEARCH_RADIUS: i64 = 2;

/// Largest cell index kept in the grid (2^53). Points whose cell falls
/// outside are matched by a linear scan instead.
const MAX_CELL_INDEX: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// A totem/reception attaches to a polyline vertex when both axes differ
    /// by strictly less than this value.
    pub tolerance: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

pub type NodeId = NodeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Waypoint,
    Totem(i64),
    Reception(i64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub point: Point,
    pub kind: NodeKind,
}

/// One side of an undirected edge, seen from the node it was queried on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// Undirected weighted graph for a single campus.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    campus: String,
    graph: UnGraph<Node, f64>,
    totems: Vec<Totem>,
    receptions: Vec<ReceptionPoint>,
    totem_nodes: HashMap<i64, NodeId>,
    reception_nodes: HashMap<i64, NodeId>,
}

impl CampusGraph {
    pub fn new(campus: impl Into<String>) -> Self {
        Self {
            campus: campus.into(),
            ..Self::default()
        }
    }

    pub fn campus(&self) -> &str {
        &self.campus
    }

    /// The underlying petgraph graph, for running its algorithms.
    pub fn graph(&self) -> &UnGraph<Node, f64> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node payloads in id order.
    pub fn nodes(&self) -> Vec<Node> {
        self.graph.node_indices().map(|id| self.graph[id]).collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node_weight(id)
    }

    pub fn neighbors(&self, id: NodeId) -> Vec<Edge> {
        self.graph
            .edges(id)
            .map(|edge| Edge {
                to: if edge.source() == id { edge.target() } else { edge.source() },
                weight: *edge.weight(),
            })
            .collect()
    }

    /// Every undirected edge once, as `(smaller id, larger id, weight)`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        self.graph
            .edge_references()
            .map(|edge| {
                let (a, b) = (edge.source(), edge.target());
                (a.min(b), a.max(b), *edge.weight())
            })
            .collect()
    }

    /// Totems of the campus, ascending by id.
    pub fn totems(&self) -> &[Totem] {
        &self.totems
    }

    /// Receptions of the campus, ascending by id.
    pub fn receptions(&self) -> &[ReceptionPoint] {
        &self.receptions
    }

    pub fn totem_node(&self, totem_id: i64) -> Option<NodeId> {
        self.totem_nodes.get(&totem_id).copied()
    }

    pub fn reception_node(&self, reception_id: i64) -> Option<NodeId> {
        self.reception_nodes.get(&reception_id).copied()
    }

    /// Coordinates of a node sequence, skipping unknown ids.
    pub fn points_of(&self, path: &[NodeId]) -> Vec<Point> {
        path.iter()
            .filter_map(|&id| self.node(id).map(|node| node.point))
            .collect()
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        if a != b {
            self.graph.add_edge(a, b, weight);
        }
    }
}

/// Build the walking graph of one campus from a store snapshot.
///
/// The store is only read. An unknown campus produces an empty graph.
pub fn build_graph<S>(
    store: &S,
    campus: &str,
    config: &RouterConfig,
) -> Result<CampusGraph, StoreError>
where
    S: SpatialPointStore + ?Sized,
{
    let mut paths = store.list_paths(campus)?;
    let mut totems = store.list_totems(campus)?;
    let mut receptions = store.list_receptions(campus)?;
    paths.sort_by_key(|path| path.id);
    totems.sort_by_key(|totem| totem.id);
    receptions.sort_by_key(|reception| reception.id);

    let mut builder = GraphBuilder::new(campus, config.tolerance);
    for path in &paths {
        builder.add_path(path.id, &Polyline::from_record(path));
    }
    let waypoint_count = builder.graph.node_count();

    for totem in &totems {
        if !totem.point().is_finite() {
            warn!(totem_id = totem.id, campus, "Skipping totem with non-finite coordinates");
            continue;
        }
        let id = builder.add_anchor(totem.point(), NodeKind::Totem(totem.id));
        builder.graph.totem_nodes.insert(totem.id, id);
    }
    for reception in &receptions {
        if !reception.point().is_finite() {
            warn!(reception_id = reception.id, campus, "Skipping reception with non-finite coordinates");
            continue;
        }
        let id = builder.add_anchor(reception.point(), NodeKind::Reception(reception.id));
        builder.graph.reception_nodes.insert(reception.id, id);
    }

    let attachments = builder.attachments;
    let mut graph = builder.graph;
    graph.totems = totems;
    graph.receptions = receptions;

    debug!(
        campus,
        paths = paths.len(),
        waypoints = waypoint_count,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        attachments,
        "Built campus graph"
    );

    Ok(graph)
}

struct GraphBuilder {
    graph: CampusGraph,
    tolerance: f64,
    grid: SpatialGrid,
    vertex_ids: HashMap<(u64, u64), NodeId>,
    anchors: HashMap<(u64, u64), Vec<NodeId>>,
    attachments: usize,
}

impl GraphBuilder {
    fn new(campus: &str, tolerance: f64) -> Self {
        Self {
            graph: CampusGraph::new(campus),
            tolerance,
            grid: SpatialGrid::new(tolerance),
            vertex_ids: HashMap::new(),
            anchors: HashMap::new(),
            attachments: 0,
        }
    }

    fn add_path(&mut self, path_id: i64, polyline: &Polyline) {
        for &point in polyline.points() {
            if !point.is_finite() {
                warn!(path_id, campus = self.graph.campus(), "Skipping path vertex with non-finite coordinates");
                continue;
            }
            let graph = &mut self.graph.graph;
            let grid = &mut self.grid;
            self.vertex_ids.entry(coordinate_key(point)).or_insert_with(|| {
                let id = graph.add_node(Node {
                    point,
                    kind: NodeKind::Waypoint,
                });
                grid.insert(point, id);
                id
            });
        }
        // A segment touching a skipped vertex has no interned endpoint, which
        // splits the path there.
        for (from, to) in polyline.segments() {
            let ends = (
                self.vertex_ids.get(&coordinate_key(from)),
                self.vertex_ids.get(&coordinate_key(to)),
            );
            if let (Some(&a), Some(&b)) = ends {
                self.graph.add_edge(a, b, euclidean(from, to));
            }
        }
    }

    /// Adds a totem or reception node and links it to everything it sits on.
    fn add_anchor(&mut self, point: Point, kind: NodeKind) -> NodeId {
        let id = self.graph.graph.add_node(Node { point, kind });
        let key = coordinate_key(point);

        let mut links = self.grid.within(point, self.tolerance, &self.graph.graph);
        if let Some(&vertex) = self.vertex_ids.get(&key) {
            if !links.contains(&vertex) {
                links.push(vertex);
            }
        }
        let others = self.anchors.entry(key).or_default();
        links.extend(others.iter().copied());
        others.push(id);

        for &other in &links {
            self.graph.add_edge(id, other, 0.0);
        }
        self.attachments += links.len();
        id
    }
}

fn coordinate_key(point: Point) -> (u64, u64) {
    // +0.0 folds -0.0 into 0.0 so both signs intern to the same vertex
    ((point.latitude + 0.0).to_bits(), (point.longitude + 0.0).to_bits())
}

/// Bucket index over polyline vertices, one cell per tolerance step.
#[derive(Debug)]
struct SpatialGrid {
    cell: f64,
    cells: HashMap<(i64, i64), Vec<NodeId>>,
    outside: Vec<NodeId>,
    all: Vec<NodeId>,
}

impl SpatialGrid {
    fn new(cell: f64) -> Self {
        Self {
            cell,
            cells: HashMap::new(),
            outside: Vec::new(),
            all: Vec::new(),
        }
    }

    fn enabled(&self) -> bool {
        self.cell.is_finite() && self.cell > 0.0
    }

    fn cell_of(&self, point: Point) -> Option<(i64, i64)> {
        let row = (point.latitude / self.cell).floor();
        let col = (point.longitude / self.cell).floor();
        (row.abs() < MAX_CELL_INDEX && col.abs() < MAX_CELL_INDEX).then(|| (row as i64, col as i64))
    }

    fn insert(&mut self, point: Point, id: NodeId) {
        if !self.enabled() {
            return;
        }
        self.all.push(id);
        match self.cell_of(point) {
            Some(key) => self.cells.entry(key).or_default().push(id),
            None => self.outside.push(id),
        }
    }

    /// Vertices strictly within `tolerance` on both axes, ascending by id.
    fn within(&self, point: Point, tolerance: f64, graph: &UnGraph<Node, f64>) -> Vec<NodeId> {
        if !self.enabled() {
            return Vec::new();
        }
        let mut candidates: Vec<NodeId> = match self.cell_of(point) {
            Some((row, col)) => {
                let mut near = self.outside.clone();
                for dr in -GRID_SEARCH_RADIUS..=GRID_SEARCH_RADIUS {
                    for dc in -GRID_SEARCH_RADIUS..=GRID_SEARCH_RADIUS {
                        if let Some(ids) = self.cells.get(&(row + dr, col + dc)) {
                            near.extend_from_slice(ids);
                        }
                    }
                }
                near
            }
            None => self.all.clone(),
        };
        candidates.retain(|&id| graph[id].point.within(&point, tolerance));
        candidates.sort_unstable();
        candidates
    }
}
