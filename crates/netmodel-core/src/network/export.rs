use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::{EdgeType, Graph};
use rustc_hash::FxHashMap;

use crate::network::{types::Edge, Topology};

/// A topology materialized as a [`petgraph`] graph. Node weights are node IDs.
#[derive(Debug, Clone)]
pub enum GraphExport<E> {
    Directed(DiGraph<String, E>),
    Undirected(UnGraph<String, E>),
}

impl<E> GraphExport<E> {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphExport::Directed(_))
    }

    pub fn node_count(&self) -> usize {
        match self {
            GraphExport::Directed(g) => g.node_count(),
            GraphExport::Undirected(g) => g.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            GraphExport::Directed(g) => g.edge_count(),
            GraphExport::Undirected(g) => g.edge_count(),
        }
    }
}

impl Topology {
    /// Materializes the topology as a graph whose edge weights are copies of the edges.
    /// The graph is directed exactly when the topology is.
    pub fn to_graph(&self) -> GraphExport<Edge> {
        self.to_graph_with(Edge::clone)
    }

    /// Materializes the topology as a graph whose edge weights are the edges' `weight` fields.
    pub fn to_weighted_graph(&self) -> GraphExport<f64> {
        self.to_graph_with(|e| e.weight)
    }

    /// Materializes the topology as a graph, mapping every edge through `f`.
    pub fn to_graph_with<E>(&self, f: impl FnMut(&Edge) -> E) -> GraphExport<E> {
        if self.is_directed() {
            GraphExport::Directed(materialize(self, f))
        } else {
            GraphExport::Undirected(materialize(self, f))
        }
    }
}

fn materialize<Ty, E>(topology: &Topology, mut f: impl FnMut(&Edge) -> E) -> Graph<String, E, Ty>
where
    Ty: EdgeType,
{
    let mut g = Graph::with_capacity(topology.number_of_nodes(), topology.number_of_edges());
    let mut id2idx: FxHashMap<&str, NodeIndex> = FxHashMap::default();
    for id in topology.node_ids() {
        id2idx.insert(id, g.add_node(id.to_owned()));
    }
    for ((u, v), edge) in topology.edges() {
        // Edges left behind by `Topology::remove_node` still get their endpoints
        let a = *id2idx.entry(u).or_insert_with(|| g.add_node(u.to_owned()));
        let b = *id2idx.entry(v).or_insert_with(|| g.add_node(v.to_owned()));
        g.add_edge(a, b, f(edge));
    }
    g
}
