use rvr_cards::Combo;
use rvr_core::Chips;
use rvr_core::Weight;
use rvr_gameplay::ActionDetails;
use rvr_gameplay::ActionOptions;
use rvr_gameplay::Violation;
use rvr_ranges::Range;
use rvr_ranges::Weighted;
use std::cmp::Ordering;

/// Why a proposal was turned down. Shown to the acting player as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("hand in original range but not in action ranges: {0}")]
    Missing(Combo),
    #[error("hand in action ranges but not in original range: {0}")]
    Extra(Combo),
    #[error("hand in multiple ranges: {0}")]
    Duplicate(Combo),
    #[error("weight changed from {old} to {new} for hand {combo}")]
    Reweighted { combo: Combo, old: Weight, new: Weight },
    #[error("there was a raising range, but raising was not an option")]
    NoRaise,
    #[error("raise total must be between {min} and {max}")]
    RaiseSize { min: Chips, max: Chips },
}

/// The outcome of validating a proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Rejection),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
    /// The diagnostic for an invalid proposal.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(rejection) => Some(rejection.to_string()),
        }
    }
}

impl From<Option<Rejection>> for Verdict {
    fn from(rejection: Option<Rejection>) -> Self {
        rejection.map_or(Self::Valid, Self::Invalid)
    }
}

/// Is `details` an acceptable response to `options` from a player holding
/// `prior`?
///
/// The three sub-ranges must reconstitute `prior` exactly (same combos,
/// same weights, no combo twice), and a non-empty aggressive range needs a
/// raise on offer with `raise_total` inside the band. An empty aggressive
/// range makes `raise_total` irrelevant. Only the first discrepancy is
/// reported.
pub fn fits(details: &ActionDetails, options: &ActionOptions, prior: &Range) -> Result<Verdict, Violation> {
    if let Some(rejection) = partition(details, prior)? {
        log::debug!("partition rejected: {}", rejection);
        return Ok(Verdict::Invalid(rejection));
    }
    if details.aggressive().is_empty() {
        return Ok(Verdict::Valid);
    }
    Ok(Verdict::from(match options.raise() {
        None => Some(Rejection::NoRaise),
        Some(_) if options.admits(details.raise_total()) => None,
        Some(raise) => Some(Rejection::RaiseSize {
            min: raise.min,
            max: raise.max,
        }),
    }))
}

/// First place where the sub-ranges fail to add up to `prior`, if any.
///
/// Both sides are sorted canonically by combo and walked in lock-step with
/// one cursor each; a side that runs out compares greater than anything.
/// Dead cards play no part here.
pub fn partition(details: &ActionDetails, prior: &Range) -> Result<Option<Rejection>, Violation> {
    let left = rvr_ranges::sorted(prior.entries());
    let right = rvr_ranges::sorted(details.ranges().iter().flat_map(|r| r.entries()).collect());
    let mut i = 0;
    let mut j = 0;
    let mut prev = None::<Combo>;
    loop {
        match (left.get(i), right.get(j)) {
            (None, None) => return Ok(None),
            (Some(l), None) => return Ok(Some(Rejection::Missing(l.0))),
            (None, Some(r)) => return Ok(Some(Rejection::Extra(r.0))),
            (Some(l), Some(r)) if l == r => {
                prev = Some(r.0);
                i += 1;
                j += 1;
            }
            (Some(l), Some(r)) => return mismatch(l, r, prev).map(Some),
        }
    }
}

fn mismatch(left: &Weighted, right: &Weighted, prev: Option<Combo>) -> Result<Rejection, Violation> {
    if prev == Some(right.0) {
        return Ok(Rejection::Duplicate(right.0));
    }
    match rvr_ranges::compare(&right.0, &left.0) {
        Ordering::Greater => Ok(Rejection::Missing(left.0)),
        Ordering::Less => Ok(Rejection::Extra(right.0)),
        Ordering::Equal if left.1 != right.1 => Ok(Rejection::Reweighted {
            combo: left.0,
            old: left.1,
            new: right.1,
        }),
        Ordering::Equal => {
            let violation = Violation::Inexplicable {
                left: left.0,
                right: right.0,
            };
            log::error!("{}", violation);
            Err(violation)
        }
    }
}
