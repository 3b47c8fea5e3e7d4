use rvr_core::Chips;
use rvr_ranges::Range;

/// A range-based action proposal.
///
/// The player's range split three ways, plus one raise-to total that applies
/// to every combo in the aggressive sub-range. Nothing here is checked: a
/// proposal has to pass validation before it is resolved.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDetails {
    fold: Range,
    passive: Range,
    aggressive: Range,
    raise_total: Chips,
}

impl ActionDetails {
    pub fn new(fold: Range, passive: Range, aggressive: Range, raise_total: Chips) -> Self {
        Self {
            fold,
            passive,
            aggressive,
            raise_total,
        }
    }
    /// Fold range.
    pub fn fold(&self) -> &Range {
        &self.fold
    }
    /// Check or call range.
    pub fn passive(&self) -> &Range {
        &self.passive
    }
    /// Bet or raise range.
    pub fn aggressive(&self) -> &Range {
        &self.aggressive
    }
    pub fn raise_total(&self) -> Chips {
        self.raise_total
    }
    /// The three sub-ranges, fold first.
    pub fn ranges(&self) -> [&Range; 3] {
        [&self.fold, &self.passive, &self.aggressive]
    }
}

/// Range texts for fold, passive, aggressive, then the raise total.
impl TryFrom<(&str, &str, &str, Chips)> for ActionDetails {
    type Error = anyhow::Error;
    fn try_from((fold, passive, aggressive, raise_total): (&str, &str, &str, Chips)) -> Result<Self, Self::Error> {
        Ok(Self::new(
            Range::try_from(fold)?,
            Range::try_from(passive)?,
            Range::try_from(aggressive)?,
            raise_total,
        ))
    }
}

impl std::fmt::Display for ActionDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "folding {}, checking or calling {}, betting or raising (to {}) {}",
            self.fold, self.passive, self.raise_total, self.aggressive
        )
    }
}
