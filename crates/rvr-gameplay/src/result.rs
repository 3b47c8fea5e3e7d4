use rvr_core::Chips;

/// What a range-based action turned out to be.
///
/// Exactly one outcome per resolution. `Terminate` records no action at all:
/// the hand ends here and the player's declared split is never played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActionResult {
    Fold,
    /// Check when `call_cost` is zero, call otherwise.
    Passive { call_cost: Chips },
    /// Bet when nobody has put chips in yet, raise otherwise.
    Aggressive { raise_total: Chips, is_raise: bool },
    Terminate,
}

impl ActionResult {
    pub fn fold() -> Self {
        Self::Fold
    }
    pub fn call(call_cost: Chips) -> Self {
        Self::Passive { call_cost }
    }
    pub fn raise_to(raise_total: Chips, is_raise: bool) -> Self {
        Self::Aggressive {
            raise_total,
            is_raise,
        }
    }
    pub fn terminate() -> Self {
        Self::Terminate
    }
    pub fn is_terminate(&self) -> bool {
        matches!(self, Self::Terminate)
    }
}

impl std::fmt::Display for ActionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Passive { call_cost: 0 } => write!(f, "check"),
            Self::Passive { call_cost } => write!(f, "call {}", call_cost),
            Self::Aggressive {
                raise_total,
                is_raise: false,
            } => write!(f, "bet {}", raise_total),
            Self::Aggressive {
                raise_total,
                is_raise: true,
            } => write!(f, "raise to {}", raise_total),
            Self::Terminate => write!(f, "(terminate)"),
        }
    }
}
