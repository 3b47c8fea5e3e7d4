//! Command-line surface for range-vs-range drills.
//!
//! Every one-shot command reads a table snapshot (JSON) and a seat. Commands
//! that change the table print the new snapshot, or write it to `--out`.
use crate::play::Play;
use crate::snapshot;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rvr_cards::Combo;
use rvr_core::Chips;
use rvr_core::MAX_STACK;
use rvr_core::Position;
use rvr_engine::*;
use rvr_gameplay::*;
use rvr_ranges::Range;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "drill", about = "Range-vs-range poker training")]
pub struct Drill {
    /// Seed for every random draw, so a run can be replayed.
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the legal action envelope for a seat.
    Options {
        #[command(flatten)]
        spot: Spot,
    },
    /// Check a range split against a seat's range and envelope.
    Validate {
        #[command(flatten)]
        spot: Spot,
        #[command(flatten)]
        split: Split,
    },
    /// Validate, resolve, and apply a range split.
    Act {
        #[command(flatten)]
        spot: Spot,
        #[command(flatten)]
        split: Split,
        /// Where to write the updated table.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Force an action where some branches are not allowed.
    Redeal {
        #[command(flatten)]
        spot: Spot,
        #[command(flatten)]
        split: Split,
        /// Branches the forced action may realize.
        #[arg(long, default_value = "no-fold", value_parser = |s: &str| Permit::try_from(s))]
        permit: Permit,
        /// Where to write the updated table.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Which branch a concrete hand falls into.
    Classify {
        #[command(flatten)]
        spot: Spot,
        #[command(flatten)]
        split: Split,
        /// The hand to classify; defaults to the seat's dealt hand.
        #[arg(long)]
        cards: Option<String>,
    },
    /// Deal a fresh hand and play every seat interactively.
    Play {
        /// One starting range per seat, in action order.
        #[arg(long, num_args = 2.., default_values = ["anything", "anything"])]
        ranges: Vec<String>,
        #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(Chips).range(1..=MAX_STACK as i64))]
        stack: Chips,
        /// Big blind; also the opening raise increment.
        #[arg(long, default_value_t = 2)]
        blind: Chips,
        #[arg(long, default_value = "no-limit")]
        structure: String,
    },
}

/// A seat at a saved table.
#[derive(Debug, Args)]
struct Spot {
    /// Table snapshot (JSON).
    table: PathBuf,
    seat: Position,
}

/// A proposed three-way split of a seat's range.
#[derive(Debug, Args)]
struct Split {
    #[arg(long, default_value = "nothing")]
    fold: String,
    /// Checking or calling sub-range.
    #[arg(long, default_value = "nothing")]
    passive: String,
    /// Betting or raising sub-range.
    #[arg(long, default_value = "nothing")]
    aggressive: String,
    /// Total bet or raise size for the aggressive sub-range.
    #[arg(long, default_value_t = 0)]
    raise: Chips,
}

impl TryFrom<&Split> for ActionDetails {
    type Error = anyhow::Error;
    fn try_from(split: &Split) -> Result<Self, Self::Error> {
        Self::try_from((split.fold.as_str(), split.passive.as_str(), split.aggressive.as_str(), split.raise))
    }
}

impl Drill {
    pub fn run(self) -> anyhow::Result<()> {
        let ref mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        match self.command {
            Command::Options { spot } => {
                let table = snapshot::load(&spot.table)?;
                println!("{}", table.options(spot.seat)?);
            }
            Command::Validate { spot, split } => {
                let table = snapshot::load(&spot.table)?;
                let details = ActionDetails::try_from(&split)?;
                let options = table.options(spot.seat)?;
                match fits(&details, &options, table.player(spot.seat)?.range())? {
                    Verdict::Valid => println!("{}", "valid".green()),
                    Verdict::Invalid(rejection) => println!("{}", rejection.to_string().red()),
                }
            }
            Command::Act { spot, split, out } => {
                let mut table = snapshot::load(&spot.table)?;
                let details = ActionDetails::try_from(&split)?;
                match Turn::from((&mut table, spot.seat)).take(&details, rng)? {
                    Outcome::Rejected(rejection) => anyhow::bail!("{}", rejection),
                    Outcome::Resolved(result) => eprintln!("{}", paint(result)),
                }
                snapshot::save(&table, out.as_deref())?;
            }
            Command::Redeal { spot, split, permit, out } => {
                let mut table = snapshot::load(&spot.table)?;
                let details = ActionDetails::try_from(&split)?;
                let (result, ratios) = Turn::from((&mut table, spot.seat)).force(&details, permit, rng)?;
                eprintln!("{} ({})", paint(result), ratios);
                snapshot::save(&table, out.as_deref())?;
            }
            Command::Classify { spot, split, cards } => {
                let table = snapshot::load(&spot.table)?;
                let details = ActionDetails::try_from(&split)?;
                let cards = match cards {
                    Some(cards) => Combo::try_from(cards.as_str()).map_err(anyhow::Error::msg)?,
                    None => table.player(spot.seat)?.cards(),
                };
                let (range, result) = classify(&details, cards, &table.options(spot.seat)?)?;
                println!("{} {} from {}", cards, paint(result), range);
            }
            Command::Play { ranges, stack, blind, structure } => {
                let structure = Structure::try_from(structure.as_str())?;
                let seats = ranges
                    .iter()
                    .map(|r| Range::try_from(r.as_str()).map(|range| (range, stack)))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Play::new(structure, blind, seats, rng)?.run(rng)?;
            }
        }
        Ok(())
    }
}

/// Colored rendering of a resolved action.
pub fn paint(result: ActionResult) -> colored::ColoredString {
    match result {
        ActionResult::Fold => result.to_string().red(),
        ActionResult::Passive { .. } => result.to_string().yellow(),
        ActionResult::Aggressive { .. } => result.to_string().green(),
        ActionResult::Terminate => result.to_string().magenta(),
    }
}
