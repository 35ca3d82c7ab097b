use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use kernel_bridge::TruckKernel;
use part_types::FeatureKind;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dataset_cli::{batch, prompt, BatchConfig};

#[derive(Parser)]
#[command(name = "dataset-gen", version, about = "Synthetic CAD part dataset generator")]
struct Cli {
    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(long, default_value = "dataset")]
    out: PathBuf,

    /// Number of parts to create; prompted for when omitted
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Label format (json, xml, excel); prompted for when omitted
    #[arg(long)]
    format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Standalone primitives with random dimensions
    Basic,
    /// Boxes with 1 to 3 random machining features
    Random,
    /// Boxes with one fixed feature kind
    Single {
        /// hole, fillet, chamfer, cutout, revolved, slot, extruded or pocket
        #[arg(long)]
        feature: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let count = match cli.count {
        Some(count) => count,
        None => prompt::prompt_count()?,
    };
    let raw_format = match cli.format {
        Some(format) => format,
        None => prompt::prompt_format()?,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = BatchConfig {
        count,
        raw_format,
        out_dir: cli.out,
    };
    let mut kernel = TruckKernel::new();

    match cli.command {
        Command::Basic => batch::run_basic(&mut kernel, &mut rng, &config),
        Command::Random => batch::run_random(&mut kernel, &mut rng, &config),
        Command::Single { feature } => {
            let kind = FeatureKind::parse(&feature)
                .ok_or_else(|| anyhow!("unknown feature '{}'", feature))?;
            batch::run_single(&mut kernel, &mut rng, &config, kind)
        }
    }
}
