use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Weibull};

use crate::config::{NoiseConfig, NoiseScaleConfig};
use crate::error::{Result, SimError};

/// Build the RNG used for placement and noise draws.
/// A seed gives a reproducible stream; None pulls OS entropy.
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Noise scale as a Gaussian function of the clean reading.
/// Peaks at `center` and decays for readings far from it.
pub fn noise_scale(config: &NoiseScaleConfig, clean: f64) -> f64 {
    let z = (clean - config.center) / config.width;
    config.amplitude * (-0.5 * z * z).exp()
}

/// Signal-dependent Weibull shadowing noise.
///
/// Each perturbation is `scale(clean) * w` with `w ~ Weibull(1, shape)`,
/// so the increment is always >= 0 and its expected magnitude tracks the
/// scale curve. Shape 1 makes the draw exponentially distributed.
#[derive(Debug, Clone)]
pub struct ShadowingNoise {
    scale: NoiseScaleConfig,
    weibull: Weibull<f64>,
}

impl ShadowingNoise {
    pub fn new(config: &NoiseConfig) -> Result<Self> {
        if !(config.scale.amplitude >= 0.0) {
            return Err(SimError::Config(format!(
                "noise scale amplitude must be >= 0, got {}",
                config.scale.amplitude
            )));
        }
        if !(config.scale.width > 0.0) {
            return Err(SimError::Config(format!(
                "noise scale width must be > 0, got {}",
                config.scale.width
            )));
        }
        let weibull = Weibull::new(1.0, config.weibull_shape).map_err(|e| {
            SimError::Config(format!(
                "invalid Weibull shape {}: {}",
                config.weibull_shape, e
            ))
        })?;
        Ok(Self {
            scale: config.scale,
            weibull,
        })
    }

    /// Draw one independent noise increment for a clean reading.
    pub fn perturb(&self, clean: f64, rng: &mut ChaCha8Rng) -> f64 {
        noise_scale(&self.scale, clean) * self.weibull.sample(rng)
    }

    pub fn scale_at(&self, clean: f64) -> f64 {
        noise_scale(&self.scale, clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_peaks_at_center() {
        let config = NoiseScaleConfig {
            amplitude: 2.0,
            center: -70.0,
            width: 10.0,
        };

        assert_eq!(noise_scale(&config, -70.0), 2.0);
        assert!(noise_scale(&config, -50.0) < noise_scale(&config, -60.0));
        assert!(noise_scale(&config, -90.0) < noise_scale(&config, -80.0));
        // symmetric around the center
        let lo = noise_scale(&config, -75.0);
        let hi = noise_scale(&config, -65.0);
        assert!((lo - hi).abs() < 1e-12);
    }

    #[test]
    fn test_perturbation_non_negative() {
        let noise = ShadowingNoise::new(&NoiseConfig::default()).unwrap();
        let mut rng = create_rng(Some(42));

        for _ in 0..1000 {
            let delta = noise.perturb(-70.0, &mut rng);
            assert!(delta >= 0.0, "Weibull noise must not subtract");
        }
    }

    #[test]
    fn test_mean_tracks_scale_for_shape_one() {
        // Weibull(1, 1) is Exp(1) with mean 1, so the mean perturbation
        // at the scale peak should be close to the amplitude.
        let noise = ShadowingNoise::new(&NoiseConfig::default()).unwrap();
        let mut rng = create_rng(Some(7));

        let n = 20_000;
        let mean: f64 = (0..n).map(|_| noise.perturb(-70.0, &mut rng)).sum::<f64>() / n as f64;
        assert!(
            (mean - 2.0).abs() < 0.1,
            "mean perturbation {} should approach the 2.0 dB amplitude",
            mean
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut config = NoiseConfig::default();
        config.weibull_shape = 0.0;
        assert!(ShadowingNoise::new(&config).is_err());

        let mut config = NoiseConfig::default();
        config.scale.width = 0.0;
        assert!(ShadowingNoise::new(&config).is_err());

        let mut config = NoiseConfig::default();
        config.scale.amplitude = -1.0;
        assert!(ShadowingNoise::new(&config).is_err());
    }

    #[test]
    fn test_seeded_rng_reproducibility() {
        let noise = ShadowingNoise::new(&NoiseConfig::default()).unwrap();

        let mut a = create_rng(Some(12345));
        let mut b = create_rng(Some(12345));
        for _ in 0..100 {
            assert_eq!(noise.perturb(-60.0, &mut a), noise.perturb(-60.0, &mut b));
        }
    }
}
