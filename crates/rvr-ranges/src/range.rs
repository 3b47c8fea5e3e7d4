use super::Weighted;
use super::class::Class;
use super::draw;
use super::parse;
use rand::Rng;
use rvr_cards::Combo;
use rvr_cards::Hand;
use rvr_core::Weight;
use std::collections::BTreeMap;

/// A weighted set of combos: everything a player might be holding.
///
/// Each combo appears at most once, with a positive integer weight (its
/// multiplicity when dealing). Ranges parse from and render to the range
/// language, and the rendering round-trips through the parser.
///
/// Ranges are never merged during play. Each range-based action replaces the
/// player's range with the realized sub-range.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Range(BTreeMap<Combo, Weight>);

impl Range {
    pub fn empty() -> Self {
        Self::default()
    }
    /// All 1326 combos at weight one.
    pub fn full() -> Self {
        Combo::all().map(|c| (c, rvr_core::DEFAULT_WEIGHT)).collect()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Number of distinct combos.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn contains(&self, combo: &Combo) -> bool {
        self.0.contains_key(combo)
    }
    pub fn weight(&self, combo: &Combo) -> Option<Weight> {
        self.0.get(combo).copied()
    }
    /// Inserts or overwrites a combo's weight.
    pub fn insert(&mut self, combo: Combo, weight: Weight) {
        debug_assert!(weight > 0);
        self.0.insert(combo, weight);
    }
    /// Combos that share no card with `dead`, with their weights, in
    /// canonical order.
    pub fn enumerate(&self, dead: &Hand) -> Vec<Weighted> {
        self.0
            .iter()
            .filter(|(c, _)| !c.collides(dead))
            .map(|(c, w)| (*c, *w))
            .collect()
    }
    /// Every combo with its weight, ignoring card removal.
    pub fn entries(&self) -> Vec<Weighted> {
        self.enumerate(&Hand::empty())
    }
    /// Deals one concrete combo, weight-proportionally, avoiding `dead`.
    /// `None` when card removal leaves nothing to deal.
    pub fn deal<R: Rng>(&self, dead: &Hand, rng: &mut R) -> Option<Combo> {
        draw(&self.enumerate(dead), rng).map(|(c, _)| *c)
    }
    /// Canonical range-language text for this range.
    ///
    /// Complete classes of uniform weight collapse to `AA`, `AKs`, `AKo`, or
    /// `AK`; everything else is listed combo by combo. Classes run high to low.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return parse::NOTHING.to_string();
        }
        let mut classes = BTreeMap::<Class, Vec<Weighted>>::new();
        for (combo, weight) in self.0.iter().rev() {
            classes.entry(Class::from(*combo)).or_default().push((*combo, *weight));
        }
        let mut terms = Vec::new();
        let mut iter = classes.iter().peekable();
        while let Some((class, members)) = iter.next() {
            let whole = Self::uniform(class, members);
            if let (Class::Suited(hi, lo), Some(w)) = (class, whole) {
                let offsuit = Class::Offsuit(*hi, *lo);
                if let Some((next, members)) = iter.peek() {
                    if **next == offsuit && Self::uniform(&offsuit, members) == Some(w) {
                        terms.push(Self::term(format!("{}{}", hi, lo), w));
                        iter.next();
                        continue;
                    }
                }
            }
            match whole {
                Some(w) => terms.push(Self::term(class.to_string(), w)),
                None => terms.extend(members.iter().map(|(c, w)| Self::term(c.to_string(), *w))),
            }
        }
        terms.join(",")
    }
    /// The shared weight of a class present in full, if it is.
    fn uniform(class: &Class, members: &[Weighted]) -> Option<Weight> {
        let w = members.first()?.1;
        (members.len() == class.size() && members.iter().all(|(_, x)| *x == w)).then_some(w)
    }
    fn term(hand: String, weight: Weight) -> String {
        match weight {
            rvr_core::DEFAULT_WEIGHT => hand,
            w => format!("{}({})", hand, w),
        }
    }
}

impl FromIterator<Weighted> for Range {
    fn from_iter<I: IntoIterator<Item = Weighted>>(iter: I) -> Self {
        let mut range = Self::empty();
        for (combo, weight) in iter {
            range.insert(combo, weight);
        }
        range
    }
}

/// Re-serializes an enumerated list back into a range.
impl From<Vec<Weighted>> for Range {
    fn from(entries: Vec<Weighted>) -> Self {
        entries.into_iter().collect()
    }
}

/// str isomorphism, through the range language
impl TryFrom<&str> for Range {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse::parse(s).map(Self::from)
    }
}
impl TryFrom<String> for Range {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Range> for String {
    fn from(r: Range) -> Self {
        r.describe()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn range(s: &str) -> Range {
        Range::try_from(s).unwrap()
    }

    #[test]
    fn later_terms_overwrite() {
        let r = range("AA,AsAh(4)");
        assert_eq!(r.len(), 6);
        assert_eq!(r.weight(&Combo::try_from("AsAh").unwrap()), Some(4));
        assert_eq!(r.weight(&Combo::try_from("AdAc").unwrap()), Some(1));
    }

    #[test]
    fn enumerate_removes_dead_cards() {
        let r = range("QQ,KK,AA");
        let dead = Hand::try_from("As2h3cQsQh").unwrap();
        let live = r.enumerate(&dead);
        assert_eq!(live.len(), 1 + 6 + 3);
        assert!(live.iter().all(|(c, _)| !c.collides(&dead)));
        assert!(live.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn describe_collapses_classes() {
        assert_eq!(range("22,AA(5),72o").describe(), "AA(5),72o,22");
        assert_eq!(range("AKs,AKo").describe(), "AK");
        assert_eq!(range("AKs(2),AKo").describe(), "AKs(2),AKo");
        assert_eq!(range("AKs,AQo").describe(), "AKs,AQo");
        assert_eq!(range("nothing").describe(), "nothing");
    }

    #[test]
    fn describe_lists_partial_classes() {
        let r = range("AA").enumerate(&Hand::try_from("As").unwrap());
        assert_eq!(Range::from(r).describe(), "AhAd,AhAc,AdAc");
    }

    #[test]
    fn describe_round_trips() {
        for text in ["AA(5),22,72o", "TT+,AQs+,KJo(3)", "AsKd,7h2c(2),QQ", "anything", "nothing"] {
            let r = range(text);
            assert_eq!(range(&r.describe()), r, "round trip of {}", text);
        }
    }

    #[test]
    fn deal_avoids_dead_cards() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let r = range("AA,KK");
        let dead = Hand::try_from("AsKsKh").unwrap();
        for _ in 0..200 {
            let combo = r.deal(&dead, rng).unwrap();
            assert!(!combo.collides(&dead));
        }
        let all_dead = Hand::try_from("AsAhAdKsKhKd").unwrap();
        assert_eq!(r.deal(&all_dead, rng), None);
    }

    #[test]
    fn full_range() {
        assert_eq!(Range::full().len(), 1326);
        assert_eq!(Range::full().describe(), range("anything").describe());
    }
}
