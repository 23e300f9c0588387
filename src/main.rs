use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use vialsort::gameplay::play_board;
use vialsort::loader::load_board;
use vialsort::renderer::Renderer;

/// Play vialsort puzzles in the terminal.
#[derive(Parser)]
#[command(name = "vialsort", about = "Play vialsort puzzles in the terminal")]
struct Cli {
    /// Path to the file containing puzzles, one JSON line each.
    puzzle_file: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !io::stdout().is_terminal() {
        bail!(
            "this application is interactive; its output is not meant to be \
             piped to other applications or files"
        );
    }

    let file = File::open(&cli.puzzle_file)
        .with_context(|| format!("failed to open {}", cli.puzzle_file.display()))?;

    let renderer = Renderer::new();
    let stdin = io::stdin();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;

        let mut board = load_board(&line)
            .with_context(|| format!("failed to load board from line {line_no}"))?;

        play_board(&mut board, &renderer, &mut stdin.lock(), &mut io::stderr())?;
    }

    Ok(())
}
