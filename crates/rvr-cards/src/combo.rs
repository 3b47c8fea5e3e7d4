use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// An unordered pair of distinct cards: one starting hand.
///
/// Wraps a [`Hand`] with the constraint that exactly two cards are present.
/// Every range, every dead-card check, and every redeal works in combos.
///
/// # Ordering
///
/// Combos are totally ordered by their higher card, then their lower card,
/// using the card order (rank-major, suit `c < d < h < s`). So `KhQh < AhKh`
/// (higher top card), `KhQh < KsKh` (same top rank, lower suit) and
/// `KhKc < KsKh`. Sorting by this order is how two enumerations of the same
/// range are made comparable.
///
/// # Mnemonic
///
/// `Display` renders the higher card first: `AdAc`, `7h2c`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Combo(Hand);

impl Combo {
    /// The higher of the two cards.
    pub fn hi(&self) -> Card {
        let bits = u64::from(self.0);
        Card::from((63 - bits.leading_zeros()) as u8)
    }
    /// The lower of the two cards.
    pub fn lo(&self) -> Card {
        let bits = u64::from(self.0);
        Card::from(bits.trailing_zeros() as u8)
    }
    pub fn is_pair(&self) -> bool {
        self.hi().rank() == self.lo().rank()
    }
    pub fn is_suited(&self) -> bool {
        self.hi().suit() == self.lo().suit()
    }
    /// True if either card is in `cards`.
    pub fn collides(&self, cards: &Hand) -> bool {
        self.0.intersects(cards)
    }
    /// Every one of the 1326 combos, in canonical order.
    pub fn all() -> impl Iterator<Item = Combo> {
        (1u8..52).flat_map(|hi| (0..hi).map(move |lo| Combo::from((Card::from(hi), Card::from(lo)))))
    }
    /// The six combos of a pocket pair.
    pub fn pairs(rank: Rank) -> Vec<Combo> {
        Self::all()
            .filter(|c| c.is_pair() && c.hi().rank() == rank)
            .collect()
    }
    /// The four suited combos of two distinct ranks.
    pub fn suited(hi: Rank, lo: Rank) -> Vec<Combo> {
        Self::unpaired(hi, lo).into_iter().filter(Combo::is_suited).collect()
    }
    /// The twelve offsuit combos of two distinct ranks.
    pub fn offsuit(hi: Rank, lo: Rank) -> Vec<Combo> {
        Self::unpaired(hi, lo).into_iter().filter(|c| !c.is_suited()).collect()
    }
    fn unpaired(hi: Rank, lo: Rank) -> Vec<Combo> {
        debug_assert!(hi != lo);
        let (hi, lo) = if hi > lo { (hi, lo) } else { (lo, hi) };
        Self::all()
            .filter(|c| c.hi().rank() == hi && c.lo().rank() == lo)
            .collect()
    }
}

impl Ord for Combo {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.hi()
            .cmp(&other.hi())
            .then_with(|| self.lo().cmp(&other.lo()))
    }
}
impl PartialOrd for Combo {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Combo> for Hand {
    fn from(combo: Combo) -> Self {
        combo.0
    }
}

impl From<(Card, Card)> for Combo {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

/// str isomorphism
impl TryFrom<&str> for Combo {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self::from((*a, *b))),
            [_, _] => Err(format!("combo cards must differ: {}", s)),
            _ => Err(format!("combo must contain exactly two cards: {}", s)),
        }
    }
}
impl TryFrom<String> for Combo {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Combo> for String {
    fn from(c: Combo) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi(), self.lo())
    }
}

impl rvr_core::Arbitrary for Combo {
    fn random() -> Self {
        let hi = rand::random_range(1u8..52);
        let lo = rand::random_range(0u8..hi);
        Self::from((Card::from(hi), Card::from(lo)))
    }
}
