//! `netmodel` describes communication networks in memory: topologies of nodes and links carrying
//! typed attributes and free-form properties, protocol stacks and applications deployed on
//! nodes, time-bounded event schedules and traffic matrices. Models can be built
//! programmatically or read from XML documents.
//!
//! ```no_run
//! # fn main() -> Result<(), netmodel::parser::Error> {
//! let topology = netmodel::parser::parse_topology("topology.xml")?;
//! for ((u, v), edge) in topology.edges() {
//!     println!("{u} -> {v}: {}", edge.capacity);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub, missing_docs)]

pub use netmodel_core as core;
pub use netmodel_parser as parser;
