use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use vialsort::generator::generate_vials;
use vialsort::loader::Puzzle;

/// Generates puzzles for vialsort, one JSON line on stdout.
///
/// Dimensions are unsigned at the command line, so negative values are
/// rejected before they ever reach the generator.
#[derive(Parser)]
#[command(name = "generate", about = "Generates puzzles for vialsort")]
struct Cli {
    /// Number of distinct colors that will exist in the puzzle.
    #[arg(long, default_value_t = 4)]
    num_colors: usize,

    /// Number of empty vials. More empty vials makes the puzzle easier; the
    /// puzzle will most likely be impossible without at least one or two.
    #[arg(long, default_value_t = 2)]
    num_empty_vials: usize,

    /// How many units can fit within a single vial.
    #[arg(long, default_value_t = 4)]
    vial_size: usize,

    /// Seed for the random number generator.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut vials = generate_vials(cli.num_colors, cli.vial_size, &mut rng);
    vials.extend((0..cli.num_empty_vials).map(|_| Vec::new()));

    let puzzle = Puzzle {
        vial_size: cli.vial_size,
        vials,
    };

    println!("{}", serde_json::to_string(&puzzle)?);
    Ok(())
}
