//! Weighted hand ranges.
//!
//! A [`Range`] maps each [`Combo`](rvr_cards::Combo) a player could hold to a
//! positive integer weight. Everything the training engine does with hidden
//! hands goes through the operations here:
//!
//! - [`Range::enumerate`] — `(combo, weight)` pairs that survive a dead-card set
//! - [`Range::deal`] — weight-proportional draw of one concrete combo
//! - [`compare`] / [`compare_weighted`] — the canonical orderings used to diff ranges
//! - parsing and describing the textual range language (`AA(5),22,72o`)
mod class;
mod draw;
mod order;
mod parse;
mod range;

pub use class::*;
pub use draw::*;
pub use order::*;
pub use range::*;

/// A combo paired with its weight in some range.
pub type Weighted = (rvr_cards::Combo, rvr_core::Weight);
