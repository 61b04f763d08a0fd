//! Log-distance RSSI propagation model with Weibull shadowing noise.
//!
//! Distance converts to signal strength through the log-distance
//! path-loss law; a non-negative Weibull perturbation whose scale
//! depends on the clean reading models the shadowing and multipath
//! variance seen in real BLE deployments.

mod model;
mod noise;
mod path_loss;

pub use model::PropagationModel;
pub use noise::{ShadowingNoise, create_rng, noise_scale};
pub use path_loss::{distance_at_signal, signal_at_distance};
