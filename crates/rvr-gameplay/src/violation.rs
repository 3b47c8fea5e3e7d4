use rvr_cards::Combo;
use rvr_core::Chips;
use rvr_core::Position;

/// A broken contract between the engine and its caller.
///
/// Unlike a rejected proposal, a violation means an upstream bug: the caller
/// offered an action with nothing to deal, built an impossible envelope, or
/// the canonical order disagreed with itself. Never shown to the acting
/// player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("hands not equal, but can't figure out why: {left}, {right}")]
    Inexplicable { left: Combo, right: Combo },
    #[error("no combos left to deal from any branch")]
    NoCombos,
    #[error("raise bounds out of order: {min} > {max}")]
    RaiseBounds { min: Chips, max: Chips },
    #[error("hand {0} is in none of the action ranges")]
    Unclassified(Combo),
    #[error("no player in seat {0}")]
    Seat(Position),
    #[error("stack {0} is outside 0..={max}", max = rvr_core::MAX_STACK)]
    Stack(Chips),
}
