use rvr_cards::Combo;
use rvr_cards::Rank;

/// A strategic hand class: the 169 cells of a preflop chart.
///
/// Ordered high to low the way a chart is read: `AA`, `AKs`, `AKo`, ...,
/// `KK`, `KQs`, ... Within one top rank the pair comes first, then
/// descending kickers, suited before offsuit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Class {
    Pair(Rank),
    Suited(Rank, Rank),
    Offsuit(Rank, Rank),
}

impl Class {
    /// Every combo belonging to this class, in canonical order.
    pub fn combos(&self) -> Vec<Combo> {
        match *self {
            Class::Pair(r) => Combo::pairs(r),
            Class::Suited(hi, lo) => Combo::suited(hi, lo),
            Class::Offsuit(hi, lo) => Combo::offsuit(hi, lo),
        }
    }
    /// Number of combos in the class: 6, 4, or 12.
    pub fn size(&self) -> usize {
        match self {
            Class::Pair(_) => 6,
            Class::Suited(..) => 4,
            Class::Offsuit(..) => 12,
        }
    }
    fn key(&self) -> (Rank, Rank, u8) {
        match *self {
            Class::Pair(r) => (r, r, 2),
            Class::Suited(hi, lo) => (hi, lo, 1),
            Class::Offsuit(hi, lo) => (hi, lo, 0),
        }
    }
}

impl From<Combo> for Class {
    fn from(combo: Combo) -> Self {
        let hi = combo.hi().rank();
        let lo = combo.lo().rank();
        if combo.is_pair() {
            Class::Pair(hi)
        } else if combo.is_suited() {
            Class::Suited(hi, lo)
        } else {
            Class::Offsuit(hi, lo)
        }
    }
}

/// Chart order: descending by top rank, then kicker, pair > suited > offsuit.
impl Ord for Class {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.key().cmp(&self.key())
    }
}
impl PartialOrd for Class {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Class::Pair(r) => write!(f, "{}{}", r, r),
            Class::Suited(hi, lo) => write!(f, "{}{}s", hi, lo),
            Class::Offsuit(hi, lo) => write!(f, "{}{}o", hi, lo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_order() {
        let mut classes = vec![
            Class::Offsuit(Rank::Ace, Rank::King),
            Class::Pair(Rank::King),
            Class::Suited(Rank::Ace, Rank::King),
            Class::Pair(Rank::Ace),
        ];
        classes.sort();
        let names = classes.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["AA", "AKs", "AKo", "KK"]);
    }

    #[test]
    fn classify_combo() {
        assert_eq!(Class::from(Combo::try_from("7h2c").unwrap()), Class::Offsuit(Rank::Seven, Rank::Two));
        assert_eq!(Class::from(Combo::try_from("2d2c").unwrap()), Class::Pair(Rank::Two));
        assert_eq!(Class::from(Combo::try_from("KhAh").unwrap()), Class::Suited(Rank::Ace, Rank::King));
    }

    #[test]
    fn sizes_match_combos() {
        for class in [
            Class::Pair(Rank::Nine),
            Class::Suited(Rank::Nine, Rank::Eight),
            Class::Offsuit(Rank::Nine, Rank::Eight),
        ] {
            assert_eq!(class.combos().len(), class.size());
        }
    }
}
