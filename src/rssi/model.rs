use rand_chacha::ChaCha8Rng;

use crate::config::{NoiseConfig, PathLossConfig};
use crate::error::{Result, SimError};

use super::noise::ShadowingNoise;
use super::path_loss::{distance_at_signal, signal_at_distance};

/// Distance <-> signal-strength conversion with shadowing noise.
///
/// Holds the path-loss law parameters and the noise model. Conversions
/// are batch operations over slices; the forward direction draws one
/// independent noise sample per element from the caller's RNG, the
/// inverse is deterministic and adds no noise.
#[derive(Debug, Clone)]
pub struct PropagationModel {
    path_loss: PathLossConfig,
    noise: ShadowingNoise,
}

impl PropagationModel {
    pub fn new(path_loss: PathLossConfig, noise: &NoiseConfig) -> Result<Self> {
        if !(path_loss.exponent > 0.0) {
            return Err(SimError::Config(format!(
                "path-loss exponent must be > 0, got {}",
                path_loss.exponent
            )));
        }
        Ok(Self {
            path_loss,
            noise: ShadowingNoise::new(noise)?,
        })
    }

    pub fn path_loss(&self) -> &PathLossConfig {
        &self.path_loss
    }

    /// Clean (noiseless) signal strength at one distance.
    pub fn clean_signal(&self, distance: f64) -> Result<f64> {
        signal_at_distance(&self.path_loss, distance)
    }

    /// Clean signal strengths for a batch of distances.
    /// Fails on the first invalid distance; nothing is returned partially.
    pub fn clean_signals(&self, distances: &[f64]) -> Result<Vec<f64>> {
        distances
            .iter()
            .map(|&d| signal_at_distance(&self.path_loss, d))
            .collect()
    }

    /// Noise scale the model would apply to a clean reading.
    pub fn noise_scale(&self, clean: f64) -> f64 {
        self.noise.scale_at(clean)
    }

    /// Convert distances to noisy signal-strength readings.
    ///
    /// Every element gets its own independent Weibull draw. All distances
    /// are validated before any sampling, so a failing call leaves the
    /// RNG stream untouched.
    pub fn distance_to_signal(
        &self,
        distances: &[f64],
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<f64>> {
        let clean = self.clean_signals(distances)?;

        let mut readings = Vec::with_capacity(clean.len());
        for c in clean {
            readings.push(c + self.noise.perturb(c, rng));
        }
        Ok(readings)
    }

    /// Convert signal strengths back to the distances they imply under
    /// the clean law. Deterministic; no noise is removed or added, so on
    /// noisy readings this over- or underestimates the true distance.
    pub fn signal_to_distance(&self, signals: &[f64]) -> Vec<f64> {
        signals
            .iter()
            .map(|&s| distance_at_signal(&self.path_loss, s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::create_rng;
    use super::*;
    use crate::config::NoiseConfig;

    fn default_model() -> PropagationModel {
        PropagationModel::new(PathLossConfig::default(), &NoiseConfig::default()).unwrap()
    }

    #[test]
    fn test_noisy_readings_biased_above_clean() {
        let model = default_model();
        let mut rng = create_rng(Some(42));

        let distances = vec![30.0; 5000];
        let clean = model.clean_signal(30.0).unwrap();
        let noisy = model.distance_to_signal(&distances, &mut rng).unwrap();

        assert_eq!(noisy.len(), distances.len());
        assert!(noisy.iter().all(|&r| r >= clean));

        let mean = noisy.iter().sum::<f64>() / noisy.len() as f64;
        let expected_bias = model.noise_scale(clean);
        assert!(
            (mean - clean - expected_bias).abs() < 0.2,
            "mean bias {:.3} should approach scale {:.3}",
            mean - clean,
            expected_bias
        );
    }

    #[test]
    fn test_independent_draws_per_element() {
        let model = default_model();
        let mut rng = create_rng(Some(42));

        let noisy = model.distance_to_signal(&[25.0; 100], &mut rng).unwrap();
        let first = noisy[0];
        assert!(
            noisy.iter().any(|&r| r != first),
            "identical distances must still get independent noise"
        );
    }

    #[test]
    fn test_failed_batch_leaves_rng_untouched() {
        let model = default_model();

        let mut rng = create_rng(Some(9));
        // last element invalid: the whole call fails before sampling
        assert!(model.distance_to_signal(&[5.0, 10.0, 0.0], &mut rng).is_err());

        let mut fresh = create_rng(Some(9));
        assert_eq!(
            model.distance_to_signal(&[5.0, 10.0], &mut rng).unwrap(),
            model.distance_to_signal(&[5.0, 10.0], &mut fresh).unwrap(),
        );
    }

    #[test]
    fn test_inverse_is_deterministic() {
        let model = default_model();
        let signals = [-40.0, -55.5, -60.0, -72.25];

        let d1 = model.signal_to_distance(&signals);
        let d2 = model.signal_to_distance(&signals);
        assert_eq!(d1, d2);
        assert_eq!(d1.len(), signals.len());
    }

    #[test]
    fn test_invalid_exponent_rejected() {
        let mut path_loss = PathLossConfig::default();
        path_loss.exponent = 0.0;
        assert!(PropagationModel::new(path_loss, &NoiseConfig::default()).is_err());
    }
}
