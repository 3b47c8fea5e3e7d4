use super::Weighted;
use rvr_cards::Combo;
use std::cmp::Ordering;

/// Canonical combo order: higher top card first decides, then the lower card.
pub fn compare(a: &Combo, b: &Combo) -> Ordering {
    a.cmp(b)
}

/// Orders weighted combos by combo alone.
///
/// Equal combos with different weights compare equal, so after a stable sort
/// they sit next to each other and a single merge pass can spot a changed
/// weight.
pub fn compare_weighted(a: &Weighted, b: &Weighted) -> Ordering {
    compare(&a.0, &b.0)
}

/// Sorts weighted combos canonically (stable).
pub fn sorted(mut entries: Vec<Weighted>) -> Vec<Weighted> {
    entries.sort_by(compare_weighted);
    entries
}
