//! Configuration for the RSSI environment simulator.
//!
//! All parameters have defaults matching the reference BLE deployment:
//! a 100 m x 100 m hall, -40 dBm reference signal at 1 m, free-space
//! path-loss exponent of 2, and a Weibull(shape=1) noise term whose
//! scale peaks around -70 dBm.
//!
//! Configuration can be loaded from TOML; missing sections fall back to
//! their defaults:
//!
//! ```toml
//! reader_count = 5
//!
//! [room]
//! width = 40.0
//! height = 25.0
//!
//! [noise]
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::Room;

/// System-wide simulation configuration
///
/// # Example
/// ```
/// use beaconsim::config::SimConfig;
///
/// let mut config = SimConfig::default();
/// config.reader_count = 5;
/// config.noise.seed = Some(42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of readers to place
    pub reader_count: usize,
    /// Room the readers live in
    pub room: Room,
    /// Log-distance path-loss law parameters
    pub path_loss: PathLossConfig,
    /// Noise model parameters
    pub noise: NoiseConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            reader_count: 3,
            room: Room::default(),
            path_loss: PathLossConfig::default(),
            noise: NoiseConfig::default(),
        }
    }
}

/// Log-distance path-loss law parameters
///
/// Clean signal strength is `-10 * exponent * log10(d) + reference_signal`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLossConfig {
    /// Clean RSSI at 1 m distance, in dBm
    pub reference_signal: f64,
    /// Path-loss exponent (2 = free space, higher indoors)
    pub exponent: f64,
}

impl Default for PathLossConfig {
    fn default() -> Self {
        Self {
            reference_signal: -40.0,
            exponent: 2.0,
        }
    }
}

/// Gaussian-shaped noise-scale curve over clean signal strength
///
/// The scale applied to a noise draw is
/// `amplitude * exp(-0.5 * ((clean - center) / width)^2)`: uncertainty
/// peaks for readings near `center` and decays for readings far from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseScaleConfig {
    /// Peak noise scale in dB
    pub amplitude: f64,
    /// Clean RSSI of peak uncertainty in dBm
    pub center: f64,
    /// Width of the uncertainty curve in dB
    pub width: f64,
}

impl Default for NoiseScaleConfig {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            center: -70.0,
            width: 10.0,
        }
    }
}

/// Noise model configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// RNG seed; None draws from OS entropy
    pub seed: Option<u64>,
    /// Signal-dependent scale curve
    pub scale: NoiseScaleConfig,
    /// Weibull shape parameter (1 = exponential)
    pub weibull_shape: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: None,
            scale: NoiseScaleConfig::default(),
            weibull_shape: 1.0,
        }
    }
}

impl NoiseConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_scale(mut self, amplitude: f64, center: f64, width: f64) -> Self {
        self.scale = NoiseScaleConfig {
            amplitude,
            center,
            width,
        };
        self
    }

    pub fn with_weibull_shape(mut self, shape: f64) -> Self {
        self.weibull_shape = shape;
        self
    }
}
