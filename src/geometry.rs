//! 2D geometry primitives for the simulated room.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A 2D coordinate in meters.
///
/// Used for both reader and transmitter locations. Positions carry no
/// identity beyond their coordinates.
///
/// # Parsing format
/// - `"20,35.5"` - comma-separated x,y
///
/// # Example
/// ```
/// use beaconsim::geometry::Position;
///
/// let p: Position = "20,35.5".parse().unwrap();
/// assert_eq!(p.x, 20.0);
/// assert_eq!(p.y, 35.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position in meters.
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("invalid position: {} (expected \"x,y\")", s))?;
        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| format!("invalid x coordinate: {}", x))?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| format!("invalid y coordinate: {}", y))?;
        Ok(Self { x, y })
    }
}

/// The rectangular room readers are placed in.
///
/// Coordinates run from (0, 0) to (width, height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room width in meters (x extent)
    pub width: f64,
    /// Room height in meters (y extent)
    pub height: f64,
}

impl Room {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

impl Default for Room {
    fn default() -> Self {
        // Reference deployment: 100 m x 100 m hall
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}
