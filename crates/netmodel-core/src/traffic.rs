//! Traffic demand: origin-destination matrices and sequences of them sampled at a fixed interval.

use std::collections::{BTreeMap, BTreeSet};

use crate::units::{CapacityUnit, TimeUnit};

/// Flow volumes between origin and destination nodes over one time interval.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct TrafficMatrix {
    volume_unit: Option<CapacityUnit>,
    flows: BTreeMap<String, BTreeMap<String, f64>>,
}

impl TrafficMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volume_unit(volume_unit: CapacityUnit) -> Self {
        Self {
            volume_unit: Some(volume_unit),
            ..Default::default()
        }
    }

    pub fn volume_unit(&self) -> Option<CapacityUnit> {
        self.volume_unit
    }

    pub fn set_volume_unit(&mut self, volume_unit: CapacityUnit) {
        self.volume_unit = Some(volume_unit);
    }

    /// Sets the volume of the flow from `origin` to `destination`, returning the volume it
    /// replaces.
    pub fn add_flow(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        volume: f64,
    ) -> Option<f64> {
        self.flows
            .entry(origin.into())
            .or_default()
            .insert(destination.into(), volume)
    }

    pub fn flow(&self, origin: &str, destination: &str) -> Option<f64> {
        self.flows.get(origin)?.get(destination).copied()
    }

    pub fn remove_flow(&mut self, origin: &str, destination: &str) -> Option<f64> {
        let row = self.flows.get_mut(origin)?;
        let volume = row.remove(destination)?;
        if row.is_empty() {
            self.flows.remove(origin);
        }
        Some(volume)
    }

    /// Get an iterator over all `((origin, destination), volume)` entries.
    pub fn flows(&self) -> impl Iterator<Item = ((&str, &str), f64)> + '_ {
        self.flows.iter().flat_map(|(o, row)| {
            row.iter()
                .map(move |(d, &volume)| ((o.as_str(), d.as_str()), volume))
        })
    }

    /// Get an iterator over all origin-destination pairs.
    pub fn od_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.flows().map(|(pair, _)| pair)
    }

    pub fn origins(&self) -> BTreeSet<&str> {
        self.flows.keys().map(String::as_str).collect()
    }

    pub fn destinations(&self) -> BTreeSet<&str> {
        self.od_pairs().map(|(_, d)| d).collect()
    }

    /// Returns the number of origin-destination pairs.
    pub fn len(&self) -> usize {
        self.flows.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

/// The interval at which the matrices of a sequence were sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, derive_new::new)]
pub struct Sampling {
    pub interval: u64,
    pub time_unit: TimeUnit,
}

/// An ordered sequence of traffic matrices.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct TrafficMatrixSequence {
    sampling: Option<Sampling>,
    matrices: Vec<TrafficMatrix>,
}

impl TrafficMatrixSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sampling(sampling: Sampling) -> Self {
        Self {
            sampling: Some(sampling),
            matrices: Vec::new(),
        }
    }

    pub fn sampling(&self) -> Option<Sampling> {
        self.sampling
    }

    pub fn set_sampling(&mut self, sampling: Option<Sampling>) {
        self.sampling = sampling;
    }

    /// Inserts `matrix` at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, matrix: TrafficMatrix) {
        self.matrices.insert(index, matrix);
    }

    /// Removes the matrix at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<TrafficMatrix> {
        (index < self.matrices.len()).then(|| self.matrices.remove(index))
    }

    /// Get a reference to the sequence's matrices.
    pub fn matrices(&self) -> &[TrafficMatrix] {
        self.matrices.as_ref()
    }

    delegate::delegate! {
        to self.matrices {
            pub fn push(&mut self, matrix: TrafficMatrix);

            pub fn len(&self) -> usize;

            pub fn is_empty(&self) -> bool;

            pub fn get(&self, index: usize) -> Option<&TrafficMatrix>;

            pub fn iter(&self) -> std::slice::Iter<'_, TrafficMatrix>;
        }
    }
}

impl<'a> IntoIterator for &'a TrafficMatrixSequence {
    type Item = &'a TrafficMatrix;
    type IntoIter = std::slice::Iter<'a, TrafficMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrices.iter()
    }
}

impl IntoIterator for TrafficMatrixSequence {
    type Item = TrafficMatrix;
    type IntoIter = std::vec::IntoIter<TrafficMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrices.into_iter()
    }
}
