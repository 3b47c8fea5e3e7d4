use crate::cli::paint;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use rand::Rng;
use rvr_core::Chips;
use rvr_core::Position;
use rvr_engine::*;
use rvr_gameplay::*;
use rvr_ranges::Range;

/// An interactive hand where every seat is driven from the terminal.
///
/// Seats 0 and 1 post the blinds and action runs in seat order. Each
/// decision is either a full range split or a forced action.
pub struct Play {
    table: Table,
}

impl Play {
    /// Deals every seat from its range and posts the blinds.
    pub fn new<R: Rng>(structure: Structure, blind: Chips, seats: Vec<(Range, Chips)>, rng: &mut R) -> Result<Self, Violation> {
        let mut table = Table::deal(structure, blind, seats, rng)?;
        table.post(0, (blind / 2).max(1))?;
        table.post(1, blind)?;
        log::info!("dealt {} seats, {} {}", table.n(), structure, blind);
        Ok(Self { table })
    }

    /// Seat opening the first round: the one after the big blind.
    pub fn first(&self) -> Position {
        2 % self.table.n()
    }

    /// The dealer seat, last to act after the first round. Heads-up the
    /// small blind holds the button; otherwise it sits just before the blinds.
    pub fn button(&self) -> Position {
        match self.table.n() {
            2 => 0,
            n => n - 1,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn run<R: Rng>(mut self, rng: &mut R) -> anyhow::Result<()> {
        let mut seat = self.first();
        while !self.table.is_finished() && self.table.remaining() >= 2 {
            if self.table.is_round_over() {
                self.table.advance(rng);
                seat = self.table.next_to_act(self.button()).unwrap_or(0);
                continue;
            }
            if !self.table.player(seat)?.is_left_to_act() {
                seat = self.table.next_to_act(seat).unwrap_or(seat);
                continue;
            }
            println!("\n{}", self.table);
            self.decide(seat, rng)?;
            seat = self.table.next_to_act(seat).unwrap_or(seat);
        }
        self.summary();
        Ok(())
    }

    fn decide<R: Rng>(&mut self, seat: Position, rng: &mut R) -> anyhow::Result<()> {
        let options = self.table.options(seat)?;
        let modes = ["split range", "forced, no fold", "forced, no fold or call"];
        let mode = Select::new()
            .with_prompt(format!("SEAT {} ({})", seat, options))
            .report(false)
            .items(&modes[..])
            .default(0)
            .interact()?;
        match mode {
            0 => loop {
                let details = self.split(&options)?;
                match Turn::from((&mut self.table, seat)).take(&details, rng)? {
                    Outcome::Rejected(rejection) => println!("{}", rejection.to_string().red()),
                    Outcome::Resolved(result) => {
                        println!("seat {} {}", seat, paint(result));
                        break Ok(());
                    }
                }
            },
            _ => {
                let permit = match mode {
                    1 => Permit::NoFold,
                    _ => Permit::NoFoldNoCall,
                };
                let details = self.split(&options)?;
                let (result, ratios) = Turn::from((&mut self.table, seat)).force(&details, permit, rng)?;
                println!("seat {} {} ({})", seat, paint(result), ratios);
                Ok(())
            }
        }
    }

    /// Prompts for the three sub-ranges and, when needed, a raise size.
    fn split(&self, options: &ActionOptions) -> anyhow::Result<ActionDetails> {
        let passive = match options.can_check() {
            true => "check",
            false => "call",
        };
        let fold = Self::range("fold")?;
        let passive = Self::range(passive)?;
        let aggressive = match options.raise() {
            Some(_) => Self::range("raise")?,
            None => Range::empty(),
        };
        let raise_total = match (options.raise(), aggressive.is_empty()) {
            (Some(raise), false) if raise.min == raise.max => raise.min,
            (Some(raise), false) => Input::<Chips>::new()
                .with_prompt(format!("raise to ({}..={})", raise.min, raise.max))
                .default(raise.min)
                .validate_with(|total: &Chips| -> Result<(), &str> {
                    match options.admits(*total) {
                        true => Ok(()),
                        false => Err("out of bounds"),
                    }
                })
                .interact_text()?,
            _ => 0,
        };
        Ok(ActionDetails::new(fold, passive, aggressive, raise_total))
    }

    fn range(prompt: &str) -> anyhow::Result<Range> {
        let text = Input::<String>::new()
            .with_prompt(prompt)
            .default(String::from("nothing"))
            .validate_with(|text: &String| -> Result<(), String> {
                Range::try_from(text.as_str()).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Range::try_from(text.as_str())
    }

    fn summary(&self) {
        println!("\n{}", "HAND OVER".bold());
        println!("{}", self.table.board().on(self.table.street()));
        for (seat, player) in self.table.players().iter().enumerate() {
            let status = match player.is_folded() {
                true => "F".red(),
                false => "P".green(),
            };
            println!("  {} {} {} {}", seat, status, player.cards(), player.range());
        }
        println!("  factor {:.6}", self.table.current_factor());
        log::info!("hand over, factor {:.6}", self.table.current_factor());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn seats(ranges: &[&str]) -> Vec<(Range, Chips)> {
        ranges.iter().map(|r| (Range::try_from(*r).unwrap(), 200)).collect()
    }

    #[test]
    fn posts_blinds() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let play = Play::new(Structure::NoLimit, 2, seats(&["anything", "anything"]), rng).unwrap();
        let table = play.table();
        assert_eq!(table.player(0).unwrap().contributed(), 1);
        assert_eq!(table.player(1).unwrap().contributed(), 2);
        assert_eq!(table.pot(), 3);
        assert_eq!(play.first(), 0);
        assert_eq!(table.options(0).unwrap(), ActionOptions::new(1, true, 4, 200).unwrap());
    }

    #[test]
    fn three_handed_opens_after_big_blind() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let play = Play::new(Structure::Limit, 4, seats(&["QQ+", "QQ+", "QQ+"]), rng).unwrap();
        assert_eq!(play.first(), 2);
        assert_eq!(play.table().player(0).unwrap().contributed(), 2);
        assert_eq!(play.table().options(2).unwrap(), ActionOptions::new(4, true, 8, 8).unwrap());
    }

    #[test]
    fn button_acts_last_after_the_flop() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut heads_up = Play::new(Structure::NoLimit, 2, seats(&["anything", "anything"]), rng).unwrap();
        assert_eq!(heads_up.button(), 0);
        heads_up.table.apply(0, ActionResult::call(1)).unwrap();
        heads_up.table.apply(1, ActionResult::call(0)).unwrap();
        heads_up.table.advance(rng);
        assert_eq!(heads_up.table.street(), rvr_cards::Street::Flop);
        assert_eq!(heads_up.table.next_to_act(heads_up.button()), Some(1));

        let three = Play::new(Structure::NoLimit, 2, seats(&["anything", "anything", "anything"]), rng).unwrap();
        assert_eq!(three.button(), 2);
        assert_eq!(three.table.next_to_act(three.button()), Some(0));
    }

    #[test]
    fn undealable_ranges() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        assert!(matches!(
            Play::new(Structure::NoLimit, 2, seats(&["AA", "AA", "AA"]), rng),
            Err(Violation::NoCombos)
        ));
    }
}
