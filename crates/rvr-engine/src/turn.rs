use super::*;
use rand::Rng;
use rvr_core::Position;
use rvr_gameplay::*;

/// How a player's turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The proposal did not fit; nothing changed and the player must retry.
    Rejected(Rejection),
    /// The proposal was played and its result applied to the table.
    Resolved(ActionResult),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rejected(rejection) => write!(f, "rejected: {}", rejection),
            Self::Resolved(result) => write!(f, "{}", result),
        }
    }
}

/// One player's decision point at a table.
///
/// Ties the pieces together in order: derive the envelope, validate the
/// proposal against the player's range, resolve it, and apply the result.
pub struct Turn<'a> {
    table: &'a mut Table,
    seat: Position,
}

impl<'a> From<(&'a mut Table, Position)> for Turn<'a> {
    fn from((table, seat): (&'a mut Table, Position)) -> Self {
        Self { table, seat }
    }
}

impl Turn<'_> {
    /// The envelope the player is acting within.
    pub fn options(&self) -> Result<ActionOptions, Violation> {
        self.table.options(self.seat)
    }
    /// Plays a range-based action proposal.
    pub fn take<R: Rng>(self, details: &ActionDetails, rng: &mut R) -> Result<Outcome, Violation> {
        let options = self.options()?;
        let prior = self.table.player(self.seat)?.range().clone();
        match fits(details, &options, &prior)? {
            Verdict::Invalid(rejection) => Ok(Outcome::Rejected(rejection)),
            Verdict::Valid => {
                let result = resolve(self.table, self.seat, details, &options, rng)?;
                self.table.apply(self.seat, result)?;
                Ok(Outcome::Resolved(result))
            }
        }
    }
    /// Plays a procedural action where some branches are off the table.
    ///
    /// The proposal is not validated. The player's cards are redealt into a
    /// permitted branch, and the permitted sub-range holding them decides
    /// the action, even when a disallowed sub-range holds them too.
    /// With nothing permitted left to deal, the hand terminates.
    pub fn force<R: Rng>(self, details: &ActionDetails, permit: Permit, rng: &mut R) -> Result<(ActionResult, Ratios), Violation> {
        let options = self.options()?;
        let (redealt, ratios) = redeal(self.table, self.seat, details, permit, rng)?;
        let result = match redealt {
            Redeal::Terminate => ActionResult::terminate(),
            Redeal::Kept | Redeal::Redealt(_) => {
                let cards = self.table.player(self.seat)?.cards();
                let (range, result) = classify(&permit.restrict(details), cards, &options)?;
                self.table.player_mut(self.seat)?.reset_range(range);
                result
            }
        };
        log::info!("seat {} {} ({})", self.seat, result, ratios);
        self.table.apply(self.seat, result)?;
        Ok((result, ratios))
    }
}
