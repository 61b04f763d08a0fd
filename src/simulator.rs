//! Ties reader placement and the propagation model into one session.

use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::constants::MIN_ROOM_DIMENSION;
use crate::error::{Result, SimError};
use crate::geometry::{Position, Room};
use crate::observations::ObservationMatrix;
use crate::readers::ReaderSet;
use crate::rssi::{PropagationModel, create_rng};

/// One simulation session: a room, a reader set, a propagation model
/// and an explicitly owned RNG.
///
/// Readers are placed once (randomly or explicitly) and reused by every
/// `simulate` call until `clear_readers` resets them. Placement and
/// noise consume the same seedable stream, so a seeded simulator
/// reproduces an entire session exactly.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    model: PropagationModel,
    readers: Option<ReaderSet>,
    rng: ChaCha8Rng,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Result<Self> {
        if config.reader_count == 0 {
            return Err(SimError::InvalidCount {
                name: "reader_count",
                value: 0,
            });
        }
        if !(config.room.width >= MIN_ROOM_DIMENSION)
            || !(config.room.height >= MIN_ROOM_DIMENSION)
        {
            return Err(SimError::Config(format!(
                "room dimensions must be positive, got {} x {}",
                config.room.width, config.room.height
            )));
        }

        let model = PropagationModel::new(config.path_loss, &config.noise)?;
        let rng = create_rng(config.noise.seed);

        Ok(Self {
            config,
            model,
            readers: None,
            rng,
        })
    }

    pub fn model(&self) -> &PropagationModel {
        &self.model
    }

    pub fn room(&self) -> Room {
        self.config.room
    }

    /// Current reader positions, if any have been placed.
    pub fn readers(&self) -> Option<&[Position]> {
        self.readers.as_ref().map(ReaderSet::positions)
    }

    /// Place `reader_count` readers uniformly at random.
    ///
    /// An existing set is reused untouched; call `clear_readers` first to
    /// force a fresh draw.
    pub fn place_readers(&mut self) -> Result<&[Position]> {
        if self.readers.is_none() {
            let set = ReaderSet::random(self.config.reader_count, &self.config.room, &mut self.rng)?;
            self.readers = Some(set);
        }
        Ok(self.readers.as_ref().map_or(&[], ReaderSet::positions))
    }

    /// Adopt explicit reader positions, replacing any existing set.
    pub fn set_readers(&mut self, positions: Vec<Position>) -> Result<&[Position]> {
        let set = ReaderSet::from_positions(positions, &self.config.room)?;
        self.readers = Some(set);
        Ok(self.readers.as_ref().map_or(&[], ReaderSet::positions))
    }

    /// Forget the current reader set. The next `place_readers` call
    /// draws new positions.
    pub fn clear_readers(&mut self) {
        self.readers = None;
    }

    /// Simulate `observations` independent noisy readings of a
    /// transmitter at every reader.
    ///
    /// The per-reader distance row is tiled once per observation and the
    /// whole matrix converted in a single batch, so each cell gets its
    /// own noise draw even though the geometry repeats across rows.
    pub fn simulate(
        &mut self,
        transmitter: Position,
        observations: usize,
    ) -> Result<ObservationMatrix> {
        if observations == 0 {
            return Err(SimError::InvalidCount {
                name: "observation_count",
                value: 0,
            });
        }
        let readers = self.readers.as_ref().ok_or_else(|| {
            SimError::Config("no readers placed; call place_readers or set_readers first".into())
        })?;

        if !self.config.room.contains(transmitter) {
            log::warn!(
                "transmitter at {} is outside the {} x {} room",
                transmitter,
                self.config.room.width,
                self.config.room.height
            );
        }

        let row = readers.distances_to(transmitter);
        let mut distances = Vec::with_capacity(observations * row.len());
        for _ in 0..observations {
            distances.extend_from_slice(&row);
        }

        let readings = self.model.distance_to_signal(&distances, &mut self.rng)?;
        let matrix = ObservationMatrix::from_vec(readings, observations, readers.len())?;

        log::debug!(
            "simulated {} observations across {} readers for transmitter at {}",
            matrix.observations(),
            matrix.readers(),
            transmitter
        );
        Ok(matrix)
    }
}
