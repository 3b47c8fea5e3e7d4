//! The textual range language.
//!
//! ```text
//! range  := "nothing" | "anything" | term ("," term)*
//! term   := hand weight?
//! hand   := combo | class "+"?
//! combo  := rank suit rank suit            AsKd
//! class  := rank rank ("s" | "o")?         AA, AKs, AKo, AK
//! weight := "(" digits ")"                 AA(5)
//! ```
//!
//! `TT+` climbs pairs up to aces; `ATs+` climbs the kicker up to one below
//! the top card. Whitespace is ignored and rank/suit letters are
//! case-insensitive.
use super::Weighted;
use super::class::Class;
use anyhow::Context;
use rvr_cards::Combo;
use rvr_cards::Rank;
use rvr_cards::Suit;
use rvr_core::DEFAULT_WEIGHT;
use rvr_core::Weight;

pub const NOTHING: &str = "nothing";
pub const ANYTHING: &str = "anything";

/// Parses range text into weighted combos, in term order.
/// A combo named by several terms appears several times; the last one wins.
pub fn parse(text: &str) -> anyhow::Result<Vec<Weighted>> {
    let text = text.replace(char::is_whitespace, "");
    let mut entries = Vec::new();
    for term in text.split(',').filter(|t| !t.is_empty()) {
        let (hand, weight) = split_weight(term)?;
        let combos = expand(hand).with_context(|| format!("invalid range term: {}", term))?;
        entries.extend(combos.into_iter().map(|c| (c, weight)));
    }
    Ok(entries)
}

fn split_weight(term: &str) -> anyhow::Result<(&str, Weight)> {
    match term.find('(') {
        None => Ok((term, DEFAULT_WEIGHT)),
        Some(i) => {
            let digits = term[i + 1..]
                .strip_suffix(')')
                .ok_or_else(|| anyhow::anyhow!("unclosed weight in {}", term))?;
            let weight = digits
                .parse::<Weight>()
                .with_context(|| format!("invalid weight in {}", term))?;
            anyhow::ensure!(weight >= 1, "weight must be positive in {}", term);
            Ok((&term[..i], weight))
        }
    }
}

fn expand(hand: &str) -> anyhow::Result<Vec<Combo>> {
    if hand.eq_ignore_ascii_case(NOTHING) {
        return Ok(vec![]);
    }
    if hand.eq_ignore_ascii_case(ANYTHING) {
        return Ok(Combo::all().collect());
    }
    let chars = hand.chars().collect::<Vec<char>>();
    match chars.as_slice() {
        [_, s1, _, s2] if Suit::try_from(*s1).is_ok() && Suit::try_from(*s2).is_ok() => {
            Combo::try_from(hand).map(|c| vec![c]).map_err(anyhow::Error::msg)
        }
        [r1, r2, rest @ ..] => {
            let r1 = Rank::try_from(*r1).map_err(anyhow::Error::msg)?;
            let r2 = Rank::try_from(*r2).map_err(anyhow::Error::msg)?;
            let (hi, lo) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
            let (kinds, plus) = match rest {
                [] => (Kinds::Any, false),
                ['+'] => (Kinds::Any, true),
                [k] => (Kinds::try_from(*k)?, false),
                [k, '+'] => (Kinds::try_from(*k)?, true),
                _ => anyhow::bail!("unexpected suffix"),
            };
            classes(hi, lo, kinds, plus).map(|cs| cs.iter().flat_map(Class::combos).collect())
        }
        _ => anyhow::bail!("unrecognized hand"),
    }
}

#[derive(Clone, Copy)]
enum Kinds {
    Any,
    Suited,
    Offsuit,
}

impl TryFrom<char> for Kinds {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            's' => Ok(Kinds::Suited),
            'o' => Ok(Kinds::Offsuit),
            _ => Err(anyhow::anyhow!("suffix must be s or o, found {}", c)),
        }
    }
}

fn classes(hi: Rank, lo: Rank, kinds: Kinds, plus: bool) -> anyhow::Result<Vec<Class>> {
    if hi == lo {
        anyhow::ensure!(matches!(kinds, Kinds::Any), "pairs take no suit suffix");
        let tops = if plus { Rank::span(hi, Rank::Ace).chain([Rank::Ace]).collect() } else { vec![hi] };
        return Ok(tops.into_iter().map(Class::Pair).collect());
    }
    let kickers = if plus { Rank::span(lo, hi).collect() } else { vec![lo] };
    Ok(kickers
        .into_iter()
        .flat_map(|k| match kinds {
            Kinds::Any => vec![Class::Suited(hi, k), Class::Offsuit(hi, k)],
            Kinds::Suited => vec![Class::Suited(hi, k)],
            Kinds::Offsuit => vec![Class::Offsuit(hi, k)],
        })
        .collect())
}
