//! Reader placement inside the room.

use rand::RngExt;
use rand_chacha::ChaCha8Rng;

use crate::constants::MIN_ROOM_DIMENSION;
use crate::error::{Result, SimError};
use crate::geometry::{Position, Room};

/// An ordered, immutable set of reader positions.
///
/// Created once per simulation session, either by uniform random
/// placement or by adopting caller-supplied positions, and reused for
/// every subsequent simulation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSet {
    positions: Vec<Position>,
}

impl ReaderSet {
    /// Place `count` readers uniformly at random inside the room.
    pub fn random(count: usize, room: &Room, rng: &mut ChaCha8Rng) -> Result<Self> {
        if count == 0 {
            return Err(SimError::InvalidCount {
                name: "reader_count",
                value: count,
            });
        }
        if !(room.width >= MIN_ROOM_DIMENSION) || !(room.height >= MIN_ROOM_DIMENSION) {
            return Err(SimError::Config(format!(
                "room dimensions must be positive, got {} x {}",
                room.width, room.height
            )));
        }

        let positions = (0..count)
            .map(|_| {
                Position::new(
                    rng.random::<f64>() * room.width,
                    rng.random::<f64>() * room.height,
                )
            })
            .collect();

        log::debug!("placed {} readers in {} x {} room", count, room.width, room.height);
        Ok(Self { positions })
    }

    /// Adopt explicit reader positions, validating them against the room.
    pub fn from_positions(positions: Vec<Position>, room: &Room) -> Result<Self> {
        if positions.is_empty() {
            return Err(SimError::InvalidCount {
                name: "reader_count",
                value: 0,
            });
        }
        for p in &positions {
            if !room.contains(*p) {
                return Err(SimError::OutOfBounds {
                    x: p.x,
                    y: p.y,
                    width: room.width,
                    height: room.height,
                });
            }
        }
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Euclidean distance from every reader to a point, in reader order.
    pub fn distances_to(&self, point: Position) -> Vec<f64> {
        self.positions.iter().map(|r| r.distance_to(point)).collect()
    }
}
