//! Readers for XML descriptions of topologies, event schedules and traffic matrices.
//!
//! Every entry point either returns a fully populated model or an [`Error`]; no partially built
//! object is ever handed out. Unrecognized elements are ignored.

#![warn(unreachable_pub, missing_debug_implementations, missing_docs)]

mod event;
mod topology;
mod traffic;
mod xml;

use std::num::ParseFloatError;
use std::path::Path;

use netmodel_core::{
    EventSchedule, ScheduleError, Topology, TrafficMatrix, TrafficMatrixSequence, UnitError,
};

/// Reads a [`Topology`] from an XML file.
pub fn parse_topology(path: impl AsRef<Path>) -> Result<Topology, Error> {
    let contents = std::fs::read_to_string(path)?;
    parse_topology_str(&contents)
}

/// Reads a [`Topology`] from an XML document.
pub fn parse_topology_str(document: &str) -> Result<Topology, Error> {
    topology::parse(&xml::root(document)?)
}

/// Reads an [`EventSchedule`] from an XML file.
pub fn parse_event_schedule(path: impl AsRef<Path>) -> Result<EventSchedule, Error> {
    let contents = std::fs::read_to_string(path)?;
    parse_event_schedule_str(&contents)
}

/// Reads an [`EventSchedule`] from an XML document.
pub fn parse_event_schedule_str(document: &str) -> Result<EventSchedule, Error> {
    event::parse(&xml::root(document)?)
}

/// Reads a [`TrafficMatrixSequence`] from an XML file.
pub fn parse_traffic_matrix_sequence(
    path: impl AsRef<Path>,
) -> Result<TrafficMatrixSequence, Error> {
    let contents = std::fs::read_to_string(path)?;
    parse_traffic_matrix_sequence_str(&contents)
}

/// Reads a [`TrafficMatrixSequence`] from an XML document.
pub fn parse_traffic_matrix_sequence_str(document: &str) -> Result<TrafficMatrixSequence, Error> {
    traffic::parse(&xml::root(document)?)
}

/// Reads the first [`TrafficMatrix`] of an XML file.
pub fn parse_traffic_matrix(path: impl AsRef<Path>) -> Result<TrafficMatrix, Error> {
    let contents = std::fs::read_to_string(path)?;
    parse_traffic_matrix_str(&contents)
}

/// Reads the first [`TrafficMatrix`] of an XML document.
pub fn parse_traffic_matrix_str(document: &str) -> Result<TrafficMatrix, Error> {
    parse_traffic_matrix_sequence_str(document)?
        .into_iter()
        .next()
        .ok_or(Error::EmptySequence)
}

/// Error kinds for reading XML descriptions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML.
    #[error("malformed XML")]
    Xml(#[from] xmltree::ParseError),

    /// A required attribute is missing.
    #[error("<{element}> element has no `{attribute}` attribute")]
    MissingAttribute {
        /// The element lacking the attribute.
        element: String,
        /// The missing attribute.
        attribute: &'static str,
    },

    /// A required child element is missing.
    #[error("<{parent}> element has no <{element}> child")]
    MissingElement {
        /// The element lacking the child.
        parent: String,
        /// The missing child.
        element: &'static str,
    },

    /// A required property is missing.
    #[error("missing property `{0}`")]
    MissingProperty(&'static str),

    /// A numeric value cannot be parsed.
    #[error("invalid number {value:?} for {what}")]
    InvalidNumber {
        /// What the value describes.
        what: String,
        /// The offending text.
        value: String,
        /// The underlying parse error.
        source: ParseFloatError,
    },

    /// An integer value cannot be parsed.
    #[error("invalid integer {value:?} for {what}")]
    InvalidInteger {
        /// What the value describes.
        what: String,
        /// The offending text.
        value: String,
        /// The underlying parse error.
        source: std::num::ParseIntError,
    },

    /// A unit symbol is not recognized.
    #[error("invalid unit")]
    InvalidUnit(#[from] UnitError),

    /// The schedule bounds are inverted.
    #[error("invalid schedule")]
    InvalidSchedule(#[from] ScheduleError),

    /// The document contains no traffic matrix.
    #[error("document contains no traffic matrix")]
    EmptySequence,
}
