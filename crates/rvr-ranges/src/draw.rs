use super::Weighted;
use rand::Rng;

/// Total weight of a list of weighted combos.
pub fn mass(entries: &[Weighted]) -> u64 {
    entries.iter().map(|(_, w)| *w as u64).sum()
}

/// Draws one entry with probability proportional to its weight.
///
/// A single uniform integer draw over the total weight: a weight-3 combo
/// owns three consecutive slots. `None` iff the list carries no weight.
pub fn draw<'a, R: Rng>(entries: &'a [Weighted], rng: &mut R) -> Option<&'a Weighted> {
    match mass(entries) {
        0 => None,
        total => pick(entries, rng.random_range(0..total)),
    }
}

/// The entry owning `slot` when each entry spans as many slots as its weight.
pub fn pick(entries: &[Weighted], mut slot: u64) -> Option<&Weighted> {
    for entry in entries {
        let w = entry.1 as u64;
        if slot < w {
            return Some(entry);
        }
        slot -= w;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rvr_cards::Combo;

    #[test]
    fn empty_draws_nothing() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!(draw(&[], rng).is_none());
    }

    #[test]
    fn weight_is_multiplicity() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let heavy = Combo::try_from("AsAh").unwrap();
        let light = Combo::try_from("KsKh").unwrap();
        let entries = vec![(heavy, 3), (light, 1)];
        let n = 40_000;
        let hits = (0..n)
            .filter_map(|_| draw(&entries, rng))
            .filter(|(c, _)| *c == heavy)
            .count();
        let freq = hits as f64 / n as f64;
        assert!((freq - 0.75).abs() < 0.01, "heavy drawn {}", freq);
    }

    #[test]
    fn pick_walks_slots() {
        let a = Combo::try_from("AsAh").unwrap();
        let k = Combo::try_from("KsKh").unwrap();
        let entries = vec![(a, 2), (k, 1)];
        assert_eq!(pick(&entries, 0), Some(&(a, 2)));
        assert_eq!(pick(&entries, 1), Some(&(a, 2)));
        assert_eq!(pick(&entries, 2), Some(&(k, 1)));
        assert_eq!(pick(&entries, 3), None);
    }

    #[test]
    fn mass_sums_weights() {
        let a = Combo::try_from("AsAh").unwrap();
        let k = Combo::try_from("KsKh").unwrap();
        assert_eq!(mass(&[(a, 5), (k, 2)]), 7);
    }
}
