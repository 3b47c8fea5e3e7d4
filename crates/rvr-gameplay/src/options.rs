use super::Violation;
use rvr_core::Chips;

/// The legal raise band, in raise-to totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raise {
    pub min: Chips,
    pub max: Chips,
}

/// The legal action envelope for the player to act.
///
/// `call_cost` is what checking or calling costs (zero means check).
/// The raise band is present or absent as a whole, and when present its
/// bounds are raise-to totals with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOptions {
    call_cost: Chips,
    is_raise: bool,
    raise: Option<Raise>,
}

impl ActionOptions {
    /// An envelope offering a raise between `min` and `max` inclusive.
    pub fn new(call_cost: Chips, is_raise: bool, min: Chips, max: Chips) -> Result<Self, Violation> {
        if min > max {
            log::error!("raise bounds out of order: {} > {}", min, max);
            return Err(Violation::RaiseBounds { min, max });
        }
        Ok(Self {
            call_cost,
            is_raise,
            raise: Some(Raise { min, max }),
        })
    }
    /// An envelope with no raise on offer.
    pub fn passive(call_cost: Chips) -> Self {
        Self {
            call_cost,
            is_raise: false,
            raise: None,
        }
    }
    pub fn call_cost(&self) -> Chips {
        self.call_cost
    }
    /// True when someone has already put chips in, so aggression is a raise
    /// rather than a first bet.
    pub fn is_raise(&self) -> bool {
        self.is_raise
    }
    pub fn raise(&self) -> Option<Raise> {
        self.raise
    }
    pub fn can_check(&self) -> bool {
        self.call_cost == 0
    }
    pub fn can_raise(&self) -> bool {
        self.raise.is_some()
    }
    pub fn min_raise(&self) -> Option<Chips> {
        self.raise.map(|r| r.min)
    }
    pub fn max_raise(&self) -> Option<Chips> {
        self.raise.map(|r| r.max)
    }
    /// True if `total` is a legal raise-to amount.
    pub fn admits(&self, total: Chips) -> bool {
        self.raise.is_some_and(|r| r.min <= total && total <= r.max)
    }
}

impl std::fmt::Display for ActionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.can_check() {
            true => write!(f, "check")?,
            false => write!(f, "fold, call {}", self.call_cost)?,
        }
        match (self.raise, self.is_raise) {
            (Some(Raise { min, max }), true) => write!(f, ", raise to {}..={}", min, max),
            (Some(Raise { min, max }), false) => write!(f, ", bet {}..={}", min, max),
            (None, _) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_must_be_ordered() {
        assert_eq!(
            ActionOptions::new(0, false, 10, 4),
            Err(Violation::RaiseBounds { min: 10, max: 4 })
        );
        assert!(ActionOptions::new(0, false, 4, 4).is_ok());
    }

    #[test]
    fn admits_inclusive_band() {
        let options = ActionOptions::new(0, false, 2, 194).unwrap();
        assert!(options.can_check());
        assert!(options.can_raise());
        assert!(!options.admits(1));
        assert!(options.admits(2));
        assert!(options.admits(194));
        assert!(!options.admits(195));
    }

    #[test]
    fn passive_has_no_band() {
        let options = ActionOptions::passive(6);
        assert!(!options.can_check());
        assert!(!options.can_raise());
        assert_eq!(options.min_raise(), None);
        assert!(!options.admits(6));
    }

    #[test]
    fn display() {
        assert_eq!(ActionOptions::new(0, false, 2, 194).unwrap().to_string(), "check, bet 2..=194");
        assert_eq!(ActionOptions::new(4, true, 8, 8).unwrap().to_string(), "fold, call 4, raise to 8..=8");
        assert_eq!(ActionOptions::passive(3).to_string(), "fold, call 3");
    }
}
