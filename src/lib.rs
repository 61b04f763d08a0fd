pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod observations;
pub mod output;
pub mod readers;
pub mod rssi;
pub mod simulator;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use geometry::{Position, Room};
pub use observations::ObservationMatrix;
pub use readers::ReaderSet;
pub use rssi::PropagationModel;
pub use simulator::Simulator;
