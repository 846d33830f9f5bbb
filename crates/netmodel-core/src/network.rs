//! The topology model: [`Node`]s, [`Edge`]s and the [`Topology`] aggregate, plus the read-only
//! export into [`petgraph`] graphs used by graph algorithms.

mod export;
pub(crate) mod topology;
pub mod types;

pub use export::GraphExport;
pub use topology::{Topology, TopologyUnits};
pub use types::{Edge, Node, UNSET};
