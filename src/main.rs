use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use beaconsim::config::SimConfig;
use beaconsim::geometry::Position;
use beaconsim::output::{OutputFormat, RangePlot, create_formatter};
use beaconsim::simulator::Simulator;

#[derive(Parser, Debug)]
#[command(name = "beaconsim")]
#[command(about = "Simulate noisy RSSI observations of a transmitter for a room of readers")]
struct Args {
    /// TOML simulation configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Transmitter position as "x,y" in meters
    #[arg(short, long, default_value = "20,20")]
    transmitter: Position,

    /// Number of independent observations
    #[arg(short = 'n', long, default_value_t = 100)]
    observations: usize,

    /// Number of randomly placed readers (CLI override)
    #[arg(short, long)]
    readers: Option<usize>,

    /// Explicit reader position "x,y"; repeat per reader (skips random placement)
    #[arg(long = "reader")]
    reader_positions: Vec<Position>,

    /// RNG seed for reproducibility (CLI override)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Room width in meters (CLI override)
    #[arg(long)]
    room_width: Option<f64>,

    /// Room height in meters (CLI override)
    #[arg(long)]
    room_height: Option<f64>,

    /// Output format for observation rows
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write range-ring plot data (JSON) for an external plotting tool
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(readers) = args.readers {
        config.reader_count = readers;
    }
    if let Some(seed) = args.seed {
        config.noise.seed = Some(seed);
    }
    if let Some(width) = args.room_width {
        config.room.width = width;
    }
    if let Some(height) = args.room_height {
        config.room.height = height;
    }

    log::info!(
        "room {} x {} m, reference {} dBm at 1 m, exponent {}",
        config.room.width,
        config.room.height,
        config.path_loss.reference_signal,
        config.path_loss.exponent
    );

    let mut sim = Simulator::new(config)?;

    let readers: Vec<Position> = if args.reader_positions.is_empty() {
        sim.place_readers()?.to_vec()
    } else {
        sim.set_readers(args.reader_positions.clone())?.to_vec()
    };
    for (i, reader) in readers.iter().enumerate() {
        log::info!("reader {} at {}", i, reader);
    }

    let matrix = sim.simulate(args.transmitter, args.observations)?;

    let formatter = create_formatter(args.format);
    if let Some(header) = formatter.header(matrix.readers()) {
        println!("{}", header);
    }
    for (i, row) in matrix.rows().enumerate() {
        println!("{}", formatter.format_row(i, row));
    }

    if let Some(path) = &args.plot {
        let plot = RangePlot::new(sim.model(), &readers, args.transmitter, sim.room(), &matrix)?;
        fs::write(path, plot.to_json()?)
            .with_context(|| format!("writing plot data {}", path.display()))?;
        log::info!("wrote plot data to {}", path.display());
    }

    Ok(())
}
