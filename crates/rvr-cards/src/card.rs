use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. The derived ordering is therefore rank-major with the
/// suit precedence `c < d < h < s` breaking ties, which is exactly the card
/// order the combo comparator builds on.
///
/// Cards parse from two-character strings like `"As"` or `"Tc"`. Use
/// [`Card::parse`] for several concatenated cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Card::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(format!("card must be 2 characters: {}", s)),
        }
    }
}
impl TryFrom<String> for Card {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl rvr_core::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rvr_core::Arbitrary;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::random();
        assert_eq!(Card::try_from(card.to_string().as_str()), Ok(card));
    }

    #[test]
    fn rank_major_order() {
        let ah = Card::try_from("Ah").unwrap();
        let ks = Card::try_from("Ks").unwrap();
        let kh = Card::try_from("Kh").unwrap();
        assert!(ah > ks);
        assert!(ks > kh);
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As 2h3c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].to_string(), "2h");
        assert!(Card::parse("As2").is_err());
    }
}
