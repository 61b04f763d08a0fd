//! The clean log-distance path-loss law and its exact inverse.

use crate::config::PathLossConfig;
use crate::constants::MIN_DISTANCE;
use crate::error::{Result, SimError};

/// Clean signal strength at a given distance:
/// `rssi = -10 * n * log10(d) + reference_signal`.
///
/// Distances below [`MIN_DISTANCE`] (including zero, negatives and NaN)
/// are rejected, since log10 is undefined there.
pub fn signal_at_distance(config: &PathLossConfig, distance: f64) -> Result<f64> {
    // The negated comparison also rejects NaN.
    if !(distance >= MIN_DISTANCE) {
        return Err(SimError::InvalidDistance(distance));
    }
    Ok(-10.0 * config.exponent * distance.log10() + config.reference_signal)
}

/// Distance implied by a signal strength under the clean law:
/// `d = 10 ^ ((rssi - reference_signal) / (-10 * n))`.
///
/// Exact inverse of [`signal_at_distance`]. Applied to a noisy reading it
/// yields the distance the reading *implies*, not the true distance.
pub fn distance_at_signal(config: &PathLossConfig, signal: f64) -> f64 {
    10.0_f64.powf((signal - config.reference_signal) / (-10.0 * config.exponent))
}
