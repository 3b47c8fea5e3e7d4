use rvr_cards::Combo;
use rvr_core::Chips;
use rvr_ranges::Range;

/// A player's state at the table.
///
/// The `range` is public knowledge: everything this player has represented
/// so far. The `cards` are the concrete combo currently dealt from that
/// range, which nobody sees. It is redrawn every time the range narrows.
///
/// # Fields
///
/// - `stack` — Chips behind (not yet committed)
/// - `contributed` — Chips committed this round
/// - `folded` — Out of the hand
/// - `left_to_act` — Still owed a decision this round
/// - `range` — Current range
/// - `cards` — Concrete dealt combo (private)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    stack: Chips,
    contributed: Chips,
    folded: bool,
    left_to_act: bool,
    range: Range,
    cards: Combo,
}

impl From<(Combo, Range, Chips)> for Player {
    fn from((cards, range, stack): (Combo, Range, Chips)) -> Self {
        Self {
            stack,
            contributed: 0,
            folded: false,
            left_to_act: true,
            range,
            cards,
        }
    }
}

impl Player {
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn contributed(&self) -> Chips {
        self.contributed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_left_to_act(&self) -> bool {
        self.left_to_act
    }
    pub fn range(&self) -> &Range {
        &self.range
    }
    pub fn cards(&self) -> Combo {
        self.cards
    }
    /// Commits chips from stack to the current round.
    pub fn bet(&mut self, chips: Chips) {
        debug_assert!(chips <= self.stack);
        self.stack -= chips;
        self.contributed += chips;
    }
    /// Posts a forced bet without using up the player's turn.
    pub fn post(&mut self, chips: Chips) {
        self.bet(chips.min(self.stack));
    }
    pub fn fold(&mut self) {
        self.folded = true;
    }
    pub fn reset_left_to_act(&mut self, left_to_act: bool) {
        self.left_to_act = left_to_act;
    }
    pub fn reset_range(&mut self, range: Range) {
        self.range = range;
    }
    pub fn reset_cards(&mut self, cards: Combo) {
        self.cards = cards;
    }
    /// Starts a new round: nothing committed yet.
    pub fn reset_contributed(&mut self) {
        self.contributed = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match (self.folded, self.left_to_act) {
            (true, _) => "F",
            (false, true) => "P",
            (false, false) => "-",
        };
        write!(
            f,
            "{} {} {} {}",
            state,
            format!("${:>4}", self.stack),
            format!("(+{:>3})", self.contributed),
            self.range
        )
    }
}
