#![warn(unreachable_pub, missing_debug_implementations)]

//! The core network model. A [`Topology`] holds [`Node`]s and [`Edge`]s with directed or
//! undirected semantics; [`EventSchedule`]s and [`TrafficMatrixSequence`]s describe what happens
//! on it over time. Every entity carries a [`PropertyContainer`] of opaque string attributes.

#[macro_use]
pub mod property;

pub mod event;
pub mod network;
pub mod traffic;
pub mod units;

#[cfg(test)]
pub(crate) mod testing;

pub use event::{Event, EventSchedule, ScheduleError};
pub use network::{Edge, GraphExport, Node, Topology, TopologyUnits};
pub use property::{
    Application, HasProperties, NamedPropertyContainer, PropertyContainer, ProtocolStack,
};
pub use traffic::{Sampling, TrafficMatrix, TrafficMatrixSequence};
pub use units::{
    BufferUnit, CapacityUnit, DelayUnit, DistanceUnit, TimeUnit, Unit, UnitCategory, UnitError,
};
