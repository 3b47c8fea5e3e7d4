use rand::Rng;
use rvr_cards::Combo;
use rvr_core::Position;
use rvr_core::Probability;
use rvr_gameplay::ActionDetails;
use rvr_gameplay::Table;
use rvr_gameplay::Violation;
use rvr_ranges::Range;
use rvr_ranges::Weighted;

/// Which branches a forced action may realize.
///
/// Heads-up on the river, calling would already settle the pot, so a
/// procedural action there may be neither a fold nor a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Permit {
    Everything,
    NoFold,
    NoFoldNoCall,
}

impl Permit {
    pub fn can_fold(&self) -> bool {
        matches!(self, Self::Everything)
    }
    pub fn can_call(&self) -> bool {
        !matches!(self, Self::NoFoldNoCall)
    }
    /// The proposal with every disallowed sub-range emptied.
    pub fn restrict(&self, details: &ActionDetails) -> ActionDetails {
        let fold = match self.can_fold() {
            true => details.fold().clone(),
            false => Range::empty(),
        };
        let passive = match self.can_call() {
            true => details.passive().clone(),
            false => Range::empty(),
        };
        ActionDetails::new(fold, passive, details.aggressive().clone(), details.raise_total())
    }
}

impl TryFrom<&str> for Permit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "everything" | "all" => Ok(Self::Everything),
            "no-fold" => Ok(Self::NoFold),
            "no-fold-no-call" => Ok(Self::NoFoldNoCall),
            _ => Err(format!("invalid permit: {}", s)),
        }
    }
}

impl std::fmt::Display for Permit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Everything => write!(f, "everything"),
            Self::NoFold => write!(f, "no-fold"),
            Self::NoFoldNoCall => write!(f, "no-fold-no-call"),
        }
    }
}

/// Share of live weight in each sub-range. Sums to one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ratios {
    pub fold: Probability,
    pub passive: Probability,
    pub aggressive: Probability,
}

impl std::fmt::Display for Ratios {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "fold {:.3} passive {:.3} aggressive {:.3}",
            self.fold, self.passive, self.aggressive
        )
    }
}

/// What a constrained redeal did to the acting player's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redeal {
    /// Every branch was permitted; nothing redealt.
    Kept,
    /// No permitted branch has a live combo; the hand must end now.
    Terminate,
    /// The player now holds this combo from a permitted branch.
    Redealt(Combo),
}

/// Constrained resolution for actions where some branches are not allowed.
///
/// The disallowed sub-ranges are dropped, and the player's cards are
/// redrawn from whatever live weight the permitted ones keep, with the
/// board and every other player's dealt combo as dead cards. Their range is
/// left alone. Branch ratios over all three sub-ranges are returned either
/// way for bookkeeping.
pub fn redeal<R: Rng>(
    table: &mut Table,
    seat: Position,
    details: &ActionDetails,
    permit: Permit,
    rng: &mut R,
) -> Result<(Redeal, Ratios), Violation> {
    table.player(seat)?;
    let dead = table.dead(seat);
    let [fold, passive, aggressive] = details.ranges().map(|r| r.enumerate(&dead));
    let [f, p, a] = [&fold, &passive, &aggressive].map(|w| rvr_ranges::mass(w));
    let total = f + p + a;
    if total == 0 {
        log::error!("seat {} has no combos in any branch of {}", seat, details);
        return Err(Violation::NoCombos);
    }
    let ratios = Ratios {
        fold: f as Probability / total as Probability,
        passive: p as Probability / total as Probability,
        aggressive: a as Probability / total as Probability,
    };
    log::debug!("seat {} ratios {}", seat, ratios);
    if permit.can_fold() {
        return Ok((Redeal::Kept, ratios));
    }
    let pool = permitted(&fold, &passive, &aggressive, permit);
    match rvr_ranges::draw(&pool, rng) {
        None => {
            log::info!("seat {} has nothing permitted to play, hand ends", seat);
            Ok((Redeal::Terminate, ratios))
        }
        Some(&(combo, _)) => {
            table.player_mut(seat)?.reset_cards(combo);
            log::debug!("seat {} redealt {}", seat, combo);
            Ok((Redeal::Redealt(combo), ratios))
        }
    }
}

/// Live combos from the branches a permit allows.
pub fn permitted(fold: &[Weighted], passive: &[Weighted], aggressive: &[Weighted], permit: Permit) -> Vec<Weighted> {
    let mut pool = Vec::new();
    if permit.can_fold() {
        pool.extend_from_slice(fold);
    }
    if permit.can_call() {
        pool.extend_from_slice(passive);
    }
    pool.extend_from_slice(aggressive);
    pool
}
