//! The observation matrix returned by simulation runs.

use crate::error::{Result, SimError};

/// Row-major matrix of simulated readings, one row per independent
/// observation and one column per reader. Never mutated after
/// construction; the caller owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationMatrix {
    readings: Vec<f64>,
    observations: usize,
    readers: usize,
}

impl ObservationMatrix {
    /// Wrap a row-major buffer, checking that it has exactly
    /// `observations * readers` readings.
    pub fn from_vec(readings: Vec<f64>, observations: usize, readers: usize) -> Result<Self> {
        let expected = observations * readers;
        if readings.len() != expected {
            return Err(SimError::ShapeMismatch(format!(
                "{} readings cannot form a {} x {} matrix (expected {})",
                readings.len(),
                observations,
                readers,
                expected
            )));
        }
        Ok(Self {
            readings,
            observations,
            readers,
        })
    }

    /// Number of independent observations (rows).
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Number of readers (columns).
    pub fn readers(&self) -> usize {
        self.readers
    }

    /// Reading for one (observation, reader) pair.
    /// Panics if either index is out of range.
    pub fn get(&self, observation: usize, reader: usize) -> f64 {
        assert!(observation < self.observations && reader < self.readers);
        self.readings[observation * self.readers + reader]
    }

    /// One observation row, in reader order.
    pub fn row(&self, observation: usize) -> &[f64] {
        let start = observation * self.readers;
        &self.readings[start..start + self.readers]
    }

    /// Iterate over observation rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.readings.chunks(self.readers)
    }

    /// All readings for one reader across observations.
    pub fn reader_column(&self, reader: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(reader < self.readers);
        self.readings
            .iter()
            .skip(reader)
            .step_by(self.readers)
            .copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.readings
    }
}
