use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::{
    network::types::{Edge, Node},
    property::PropertyContainer,
    units::{BufferUnit, CapacityUnit, DelayUnit, DistanceUnit, UnitError},
};

new_key_type! {
    struct EdgeKey;
}

/// An edge record and the number of adjacency entries resolving to it. In an undirected
/// topology both orderings of a pair resolve to the same record.
#[derive(Debug, Clone)]
struct EdgeSlot {
    edge: Edge,
    refs: usize,
}

/// Units in which the typed fields of every edge of a topology are expressed.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    typed_builder::TypedBuilder,
)]
pub struct TopologyUnits {
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub capacity: Option<CapacityUnit>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub delay: Option<DelayUnit>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub distance: Option<DistanceUnit>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub buffer: Option<BufferUnit>,
}

/// A network topology: nodes keyed by identifier and edges keyed by ordered endpoint pairs.
///
/// Edges live in an arena and the adjacency index maps `(u, v)` to arena keys. In an undirected
/// topology, adding `(u, v)` makes both `(u, v)` and `(v, u)` resolve to one edge, so a mutation
/// through either ordering is visible through the other. Cloning copies the arena and the index
/// together, which gives every reciprocal pair exactly one fresh edge in the clone and shares
/// nothing with the source.
///
/// The topology is not synchronized. Concurrent mutation needs external locking, and multi-step
/// operations such as [`Topology::add_edge`] are not atomic.
#[derive(Debug, Default, Clone)]
pub struct Topology {
    directed: bool,
    nodes: BTreeMap<String, Node>,
    edges: SlotMap<EdgeKey, EdgeSlot>,
    adjacency: FxHashMap<String, FxHashMap<String, EdgeKey>>,
    units: TopologyUnits,
    props: PropertyContainer,
}

properties_impl!(Topology);

impl Topology {
    /// Creates an empty undirected topology.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_directed() -> Self {
        Self::with_direction(true)
    }

    pub fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    pub fn with_units(directed: bool, units: TopologyUnits) -> Self {
        Self {
            directed,
            units,
            ..Default::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Makes the topology directed. Edges added from now on are stored for their own ordering
    /// only; existing reciprocal pairs keep sharing their edge.
    pub fn make_directed(&mut self) {
        if !self.directed {
            debug!(
                "promoting topology with {} edges to directed",
                self.number_of_edges()
            );
            self.directed = true;
        }
    }

    pub fn units(&self) -> &TopologyUnits {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut TopologyUnits {
        &mut self.units
    }

    pub fn capacity_unit(&self) -> Option<CapacityUnit> {
        self.units.capacity
    }

    pub fn set_capacity_unit(&mut self, symbol: &str) -> Result<(), UnitError> {
        self.units.capacity = Some(symbol.parse()?);
        Ok(())
    }

    pub fn delay_unit(&self) -> Option<DelayUnit> {
        self.units.delay
    }

    pub fn set_delay_unit(&mut self, symbol: &str) -> Result<(), UnitError> {
        self.units.delay = Some(symbol.parse()?);
        Ok(())
    }

    pub fn distance_unit(&self) -> Option<DistanceUnit> {
        self.units.distance
    }

    pub fn set_distance_unit(&mut self, symbol: &str) -> Result<(), UnitError> {
        self.units.distance = Some(symbol.parse()?);
        Ok(())
    }

    pub fn buffer_unit(&self) -> Option<BufferUnit> {
        self.units.buffer
    }

    pub fn set_buffer_unit(&mut self, symbol: &str) -> Result<(), UnitError> {
        self.units.buffer = Some(symbol.parse()?);
        Ok(())
    }

    /// Inserts `node` under `id`, returning the node it replaces.
    pub fn add_node(&mut self, id: impl Into<String>, node: Node) -> Option<Node> {
        self.nodes.insert(id.into(), node)
    }

    /// Removes the node `id`.
    ///
    /// Incident edges are NOT removed: they stay retrievable and keep referencing `id`. Callers
    /// which need them gone must remove them, or use [`Topology::remove_node_pruned`].
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        self.nodes.remove(id)
    }

    /// Removes the node `id` together with every edge starting or ending at it.
    pub fn remove_node_pruned(&mut self, id: &str) -> Option<Node> {
        let incident = self
            .adjacency
            .iter()
            .flat_map(|(u, row)| {
                row.keys()
                    .filter(move |v| u == id || v.as_str() == id)
                    .map(move |v| (u.clone(), v.clone()))
            })
            .collect::<Vec<_>>();
        for (u, v) in incident {
            if let Some(key) = self.unlink(&u, &v) {
                self.release(key);
            }
        }
        self.nodes.remove(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get an iterator over all node IDs, in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    /// Get an iterator over all `(id, node)` pairs, in ascending ID order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Adds `edge` between `u` and `v`, creating missing endpoint nodes with no properties.
    ///
    /// The edge is stored at `(u, v)`; in an undirected topology `(v, u)` resolves to the same
    /// edge. Any edge previously stored at those keys is replaced.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>, edge: Edge) {
        let (u, v) = (u.into(), v.into());
        for id in [&u, &v] {
            if !self.nodes.contains_key(id) {
                trace!("creating endpoint node {id}");
                self.nodes.insert(id.clone(), Node::default());
            }
        }
        let key = self.edges.insert(EdgeSlot { edge, refs: 0 });
        self.link(&u, &v, key);
        if !self.directed && u != v {
            self.link(&v, &u, key);
        }
    }

    /// Adds an edge with default attributes between `u` and `v`.
    pub fn add_default_edge(&mut self, u: impl Into<String>, v: impl Into<String>) {
        self.add_edge(u, v, Edge::default());
    }

    /// Removes the edge stored at `(u, v)`. In an undirected topology the reciprocal `(v, u)`
    /// entry goes with it and the returned edge is the one both orderings resolved to.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Option<Edge> {
        let key = self.unlink(u, v)?;
        if !self.directed && u != v && self.edge_key(v, u) == Some(key) {
            self.unlink(v, u);
            self.release(key);
        }
        match self.release(key) {
            Some(edge) => Some(edge),
            // A reciprocal entry kept through `make_directed` still holds the edge
            None => self.edges.get(key).map(|slot| slot.edge.clone()),
        }
    }

    /// Returns the edge stored at `(u, v)`, if any. Unknown endpoints yield `None`.
    pub fn edge(&self, u: &str, v: &str) -> Option<&Edge> {
        let key = self.edge_key(u, v)?;
        self.edges.get(key).map(|slot| &slot.edge)
    }

    /// Returns the edge stored at `(u, v)` for mutation. In an undirected topology the change is
    /// visible through `(v, u)` as well.
    pub fn edge_mut(&mut self, u: &str, v: &str) -> Option<&mut Edge> {
        let key = self.edge_key(u, v)?;
        self.edges.get_mut(key).map(|slot| &mut slot.edge)
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edge_key(u, v).is_some()
    }

    /// Get an iterator over all logical edges. In an undirected topology every edge appears
    /// under exactly one of its two orderings.
    pub fn edges(&self) -> impl Iterator<Item = ((&str, &str), &Edge)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(u, row)| row.iter().map(move |(v, &key)| (u.as_str(), v.as_str(), key)))
            // Both orderings of an undirected pair are always present, keep the sorted one
            .filter(move |(u, v, _)| self.directed || u <= v)
            .filter_map(move |(u, v, key)| self.edges.get(key).map(|slot| ((u, v), &slot.edge)))
    }

    /// Returns the endpoint pairs of all logical edges.
    pub fn all_edges(&self) -> BTreeSet<(&str, &str)> {
        self.edges().map(|(endpoints, _)| endpoints).collect()
    }

    /// Returns the number of logical edges; undirected pairs count once.
    pub fn number_of_edges(&self) -> usize {
        if self.directed {
            self.adjacency.values().map(|row| row.len()).sum()
        } else {
            self.edges().count()
        }
    }

    fn edge_key(&self, u: &str, v: &str) -> Option<EdgeKey> {
        self.adjacency.get(u)?.get(v).copied()
    }

    fn link(&mut self, u: &str, v: &str, key: EdgeKey) {
        if let Some(slot) = self.edges.get_mut(key) {
            slot.refs += 1;
        }
        let replaced = self
            .adjacency
            .entry(u.to_owned())
            .or_default()
            .insert(v.to_owned(), key);
        if let Some(old) = replaced {
            self.release(old);
        }
    }

    fn unlink(&mut self, u: &str, v: &str) -> Option<EdgeKey> {
        let row = self.adjacency.get_mut(u)?;
        let key = row.remove(v)?;
        if row.is_empty() {
            self.adjacency.remove(u);
        }
        Some(key)
    }

    /// Drops one reference to `key`, freeing and returning the edge once nothing resolves to it.
    fn release(&mut self, key: EdgeKey) -> Option<Edge> {
        let slot = self.edges.get_mut(key)?;
        slot.refs -= 1;
        if slot.refs == 0 {
            self.edges.remove(key).map(|slot| slot.edge)
        } else {
            None
        }
    }
}
