use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards dealt so far.
///
/// A board may hold fewer cards than its street implies (a flop situation can
/// start with an undealt flop), but never more than five.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Board(Hand);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    /// Adds cards to the board. Overlap with existing cards is a caller bug.
    pub fn add(&mut self, hand: Hand) {
        self.0 = Hand::add(self.0, hand);
        debug_assert!(self.0.size() <= 5);
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Labels the board with the betting round it belongs to: `flop: 2h 3c As`.
    pub fn on(&self, street: Street) -> String {
        format!("{}: {}", street, self)
    }
}

/// Board -> Hand is infallible
impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() <= 5);
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            n if n <= 5 => Ok(Self(hand)),
            n => Err(format!("board holds at most five cards, found {}", n)),
        }
    }
}
impl TryFrom<String> for Board {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Board> for String {
    fn from(b: Board) -> Self {
        b.0.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Vec::<Card>::from(self.0)
                .into_iter()
                .map(|c| format!("{}", c))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
