use super::Kind;
use rvr_cards::Combo;
use rvr_gameplay::*;
use rvr_ranges::Range;

/// Which sub-range holds a known hand, and the action it leads to.
///
/// The deterministic counterpart to [`resolve`](super::resolve): when the
/// player's concrete combo is already fixed (after a constrained
/// [`redeal`](super::redeal), say), their action is whatever sub-range
/// contains it. Sub-ranges are checked fold, passive, aggressive, so a
/// combo in several of them takes the first. A combo in none is a
/// violation.
pub fn classify(details: &ActionDetails, cards: Combo, options: &ActionOptions) -> Result<(Range, ActionResult), Violation> {
    Kind::all()
        .into_iter()
        .find(|kind| kind.range(details).contains(&cards))
        .map(|kind| (kind.range(details).clone(), kind.result(details, options)))
        .ok_or_else(|| {
            log::error!("hand {} is in none of {}", cards, details);
            Violation::Unclassified(cards)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(s: &str) -> Combo {
        Combo::try_from(s).unwrap()
    }

    #[test]
    fn with_raise_range() {
        let details = ActionDetails::try_from(("72o", "22(3)", "AA", 40)).unwrap();
        let check = ActionOptions::new(0, false, 2, 196).unwrap();
        let call = ActionOptions::new(10, true, 20, 196).unwrap();

        let (range, result) = classify(&details, combo("7h2c"), &check).unwrap();
        assert_eq!(result, ActionResult::fold());
        assert_eq!(range.to_string(), "72o");
        let (range, result) = classify(&details, combo("2h2c"), &check).unwrap();
        assert_eq!(result, ActionResult::call(0));
        assert_eq!(range.to_string(), "22(3)");
        let (_, result) = classify(&details, combo("AhAc"), &check).unwrap();
        assert_eq!(result, ActionResult::raise_to(40, false));
        assert_eq!(
            classify(&details, combo("7h2h"), &check),
            Err(Violation::Unclassified(combo("7h2h")))
        );

        assert_eq!(classify(&details, combo("7h2c"), &call).unwrap().1, ActionResult::fold());
        assert_eq!(classify(&details, combo("2h2c"), &call).unwrap().1, ActionResult::call(10));
        assert_eq!(classify(&details, combo("AhAc"), &call).unwrap().1, ActionResult::raise_to(40, true));
        assert!(classify(&details, combo("7h2h"), &call).is_err());
    }

    #[test]
    fn without_raise_range() {
        let details = ActionDetails::try_from(("22,72o", "AA", "nothing", 0)).unwrap();
        let check = ActionOptions::new(0, false, 2, 196).unwrap();
        let passive = ActionOptions::passive(196);

        assert_eq!(classify(&details, combo("7h2c"), &check).unwrap().1, ActionResult::fold());
        assert_eq!(classify(&details, combo("2h2c"), &check).unwrap().1, ActionResult::fold());
        assert_eq!(classify(&details, combo("AhAc"), &check).unwrap().1, ActionResult::call(0));
        assert_eq!(classify(&details, combo("AhAc"), &passive).unwrap().1, ActionResult::call(196));
        assert!(classify(&details, combo("7h2h"), &passive).is_err());
    }
}
