// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use knight_keys::geometry::constants::VOWEL_BUDGET;
use knight_keys::{runner, GridTopology, SequenceCounter, Strategy};

/// Report the number of knight-move key sequences of each given length.
#[derive(Parser)]
#[command(name = "knightkeys", about = "Count knight-move keypad sequences")]
struct Cli {
    /// Sequence lengths to count (default: 10)
    #[arg(allow_negative_numbers = true)]
    lengths: Vec<String>,

    /// Counting strategy: recursive, iterative or memoized
    #[arg(long, default_value = "memoized")]
    strategy: Strategy,

    /// Maximum number of vowel keys in a sequence
    #[arg(long, default_value_t = VOWEL_BUDGET)]
    vowel_budget: usize,

    /// Print the legal moves from every key before counting
    #[arg(long)]
    show_moves: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let topology = GridTopology::new();
    let counter = SequenceCounter::new(&topology)
        .with_strategy(cli.strategy)
        .with_vowel_budget(cli.vowel_budget);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    if cli.show_moves {
        write!(out, "{}", topology).context("writing move table")?;
    }

    let summary =
        runner::run(&counter, &cli.lengths, &mut out, &mut err).context("writing counts")?;
    out.flush().context("flushing counts")?;

    tracing::info!(
        counted = summary.counted,
        rejected = summary.rejected,
        "run complete"
    );

    if summary.rejected > 0 {
        std::process::exit(1);
    }
    Ok(())
}
