use serde::Serialize;

use super::iso8601_timestamp;
use crate::error::{Result, SimError};
use crate::geometry::{Position, Room};
use crate::observations::ObservationMatrix;
use crate::rssi::PropagationModel;

/// Everything an external plotting tool needs to draw the diagnostic
/// range-ring picture: reader markers, the true transmitter marker, and
/// one estimated-range circle per (observation, reader) pair.
#[derive(Debug, Clone, Serialize)]
pub struct RangePlot {
    pub generated_at: String,
    pub room: Room,
    pub readers: Vec<Position>,
    pub transmitter: Position,
    /// Estimated range in meters per observation row, in reader order,
    /// derived from the readings via the deterministic inverse law.
    pub estimated_distances: Vec<Vec<f64>>,
}

impl RangePlot {
    pub fn new(
        model: &PropagationModel,
        readers: &[Position],
        transmitter: Position,
        room: Room,
        observations: &ObservationMatrix,
    ) -> Result<Self> {
        if observations.readers() != readers.len() {
            return Err(SimError::ShapeMismatch(format!(
                "matrix has {} reader columns but {} reader positions were given",
                observations.readers(),
                readers.len()
            )));
        }

        let estimated_distances = observations
            .rows()
            .map(|row| model.signal_to_distance(row))
            .collect();

        Ok(Self {
            generated_at: iso8601_timestamp(),
            room,
            readers: readers.to_vec(),
            transmitter,
            estimated_distances,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
