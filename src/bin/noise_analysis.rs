use rolling_stats::Stats;

use beaconsim::config::{NoiseConfig, PathLossConfig};
use beaconsim::rssi::{PropagationModel, create_rng};

const SAMPLES_PER_DISTANCE: usize = 10_000;

/// CSV sweep of the noisy-reading statistics over distance.
///
/// For each distance: the clean reading, the scale the model applies at
/// that reading, and the sample mean/std/min/max of many noisy draws.
/// With shape 1 the mean bias and std should both track the scale.
fn run_distance_sweep() {
    println!("distance_m,clean_dbm,noise_scale_db,mean_dbm,std_db,min_dbm,max_dbm");

    let model =
        PropagationModel::new(PathLossConfig::default(), &NoiseConfig::default()).unwrap();

    for distance_m in 1..=60 {
        let distance = distance_m as f64;
        let mut rng = create_rng(Some(42 + distance_m as u64));

        let clean = model.clean_signal(distance).unwrap();
        let scale = model.noise_scale(clean);

        let distances = vec![distance; SAMPLES_PER_DISTANCE];
        let noisy = model.distance_to_signal(&distances, &mut rng).unwrap();

        let mut stats: Stats<f64> = Stats::new();
        for reading in noisy {
            stats.update(reading);
        }

        println!(
            "{},{:.2},{:.3},{:.2},{:.3},{:.2},{:.2}",
            distance, clean, scale, stats.mean, stats.std_dev, stats.min, stats.max
        );
    }
}

/// CSV sweep of the Gaussian noise-scale curve over clean RSSI.
fn run_scale_curve_sweep() {
    println!("clean_dbm,noise_scale_db");

    let model =
        PropagationModel::new(PathLossConfig::default(), &NoiseConfig::default()).unwrap();

    for dbm in (-110..=-30).step_by(2) {
        let clean = dbm as f64;
        println!("{:.0},{:.4}", clean, model.noise_scale(clean));
    }
}

fn main() {
    run_distance_sweep();
    println!();
    run_scale_curve_sweep();
}
