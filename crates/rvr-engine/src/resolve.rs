use rand::Rng;
use rvr_cards::Hand;
use rvr_core::Position;
use rvr_core::Probability;
use rvr_gameplay::*;
use rvr_ranges::Range;
use rvr_ranges::Weighted;

/// The three ways a range-based action can go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Fold,
    Passive,
    Aggressive,
}

impl Kind {
    pub const fn all() -> [Self; 3] {
        [Self::Fold, Self::Passive, Self::Aggressive]
    }
    /// The sub-range of `details` this kind plays.
    pub fn range<'a>(&self, details: &'a ActionDetails) -> &'a Range {
        match self {
            Self::Fold => details.fold(),
            Self::Passive => details.passive(),
            Self::Aggressive => details.aggressive(),
        }
    }
    /// The result recorded when this kind is realized.
    pub fn result(&self, details: &ActionDetails, options: &ActionOptions) -> ActionResult {
        match self {
            Self::Fold => ActionResult::fold(),
            Self::Passive => ActionResult::call(options.call_cost()),
            Self::Aggressive => ActionResult::raise_to(details.raise_total(), options.is_raise()),
        }
    }
}

/// One non-empty sub-range after card removal, and where it leads.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub kind: Kind,
    pub combos: Vec<Weighted>,
    pub result: ActionResult,
    pub continues: bool,
}

impl Branch {
    /// Total weight of the branch's live combos.
    pub fn mass(&self) -> u64 {
        rvr_ranges::mass(&self.combos)
    }
    /// Every branch with at least one combo surviving the dead cards for
    /// `seat`, in fold, passive, aggressive order.
    pub fn bough(table: &Table, seat: Position, details: &ActionDetails, options: &ActionOptions) -> Result<Vec<Self>, Violation> {
        table.player(seat)?;
        let dead = table.dead(seat);
        Ok(Kind::all()
            .into_iter()
            .map(|kind| Self {
                kind,
                combos: kind.range(details).enumerate(&dead),
                result: kind.result(details, options),
                continues: continues(table, seat, kind),
            })
            .filter(|branch| !branch.combos.is_empty())
            .inspect(|branch| {
                log::debug!(
                    "seat {} {} would {} ({} combos)",
                    seat,
                    branch.result,
                    if branch.continues { "continue" } else { "terminate" },
                    branch.combos.len()
                )
            })
            .collect())
    }
}

/// Would the hand keep going if the player in `seat` realized `kind`?
///
/// Before the river, it does while two players remain. On the river
/// somebody must also still be owed a decision, since otherwise the
/// showdown is immediate.
pub fn continues(table: &Table, seat: Position, kind: Kind) -> bool {
    let others = table
        .players()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != seat)
        .map(|(_, p)| p)
        .collect::<Vec<&Player>>();
    let remain = others.iter().filter(|p| !p.is_folded()).count()
        + match kind {
            Kind::Fold => 0,
            Kind::Passive | Kind::Aggressive => 1,
        };
    let owed = others
        .iter()
        .filter(|p| p.is_left_to_act() || (kind == Kind::Aggressive && !p.is_folded()))
        .count();
    match table.street().is_final() {
        false => remain >= 2,
        true => remain >= 2 && owed >= 1,
    }
}

/// Decides what a validated range-based action actually was.
///
/// The player's concrete hand is hidden, so the branch is picked as if it
/// were freshly dealt from the declared split, with the board and every
/// other player's dealt combo as dead cards. Combos whose branch would end
/// the hand are set aside. `current_factor` shrinks by the share of weight
/// that keeps the hand going, then one continuing combo is drawn and its
/// branch is realized. When no combo continues, the result is
/// [`ActionResult::Terminate`] and the factor is left as is.
///
/// On a realized branch the player's range becomes that branch's live
/// combos and their cards are redrawn from it, avoiding only the board.
pub fn resolve<R: Rng>(
    table: &mut Table,
    seat: Position,
    details: &ActionDetails,
    options: &ActionOptions,
    rng: &mut R,
) -> Result<ActionResult, Violation> {
    let bough = Branch::bough(table, seat, details, options)?;
    let total = bough.iter().map(Branch::mass).sum::<u64>();
    let alive = bough.iter().filter(|b| b.continues).map(Branch::mass).sum::<u64>();
    if total == 0 {
        log::error!("seat {} has no combos in any branch of {}", seat, details);
        return Err(Violation::NoCombos);
    }
    if alive == 0 {
        log::info!("seat {} terminates the hand", seat);
        return Ok(ActionResult::Terminate);
    }
    table.discount(alive as Probability / total as Probability);
    let mut slot = rng.random_range(0..alive);
    for branch in bough.into_iter().filter(|b| b.continues) {
        match rvr_ranges::pick(&branch.combos, slot) {
            None => slot -= branch.mass(),
            Some((combo, _)) => {
                log::debug!("seat {} drew {} for {}", seat, combo, branch.result);
                realize(table, seat, branch.combos, rng)?;
                log::info!("seat {} {}", seat, branch.result);
                return Ok(branch.result);
            }
        }
    }
    unreachable!("slot within continuing mass")
}

/// Narrows the player's range to the realized combos and redeals from it.
fn realize<R: Rng>(table: &mut Table, seat: Position, combos: Vec<Weighted>, rng: &mut R) -> Result<(), Violation> {
    let board = Hand::from(table.board());
    let range = Range::from(combos);
    let cards = range.deal(&board, rng).ok_or(Violation::NoCombos)?;
    let player = table.player_mut(seat)?;
    player.reset_range(range);
    player.reset_cards(cards);
    Ok(())
}
