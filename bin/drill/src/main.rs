//! Drill Binary
//!
//! Range-vs-range decisions from the command line. One-shot subcommands read
//! a JSON table snapshot; `play` runs a whole hand interactively.
//!
//! Options: --seed, plus per-command --out for the updated snapshot.
mod cli;
mod play;
mod snapshot;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    rvr_core::log();
    cli::Drill::parse().run()
}
