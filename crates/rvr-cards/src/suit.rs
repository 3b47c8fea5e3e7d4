/// Card suit: clubs, diamonds, hearts, spades.
///
/// The precedence `C < D < H < S` breaks ties between cards of equal rank and
/// therefore fixes which combo of a pair renders first in diagnostics
/// (`AdAc` is the lowest pair of aces).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::C),
            'd' | '♦' => Ok(Suit::D),
            'h' | '♥' => Ok(Suit::H),
            's' | '♠' => Ok(Suit::S),
            _ => Err(format!("invalid suit char: {}", c)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::D;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn precedence() {
        assert!(Suit::C < Suit::D);
        assert!(Suit::D < Suit::H);
        assert!(Suit::H < Suit::S);
    }

    #[test]
    fn symbols_parse() {
        assert_eq!(Suit::try_from("♠"), Ok(Suit::S));
        assert_eq!(Suit::try_from("H"), Ok(Suit::H));
        assert!(Suit::try_from("x").is_err());
    }
}
