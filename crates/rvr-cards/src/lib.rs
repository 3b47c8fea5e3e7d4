//! Card representation for range-vs-range play.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`] — An unordered set of cards as a 64-bit bitmask (boards, dead cards)
//! - [`Combo`] — An unordered pair of distinct cards; the unit of every range
//! - [`Board`] — The community cards dealt so far
//!
//! ## Ordering
//!
//! Cards order rank-major, suit-minor with the fixed precedence `c < d < h < s`.
//! Combos order by their higher card, then their lower card. This canonical
//! order is what makes two independently built enumerations of the same range
//! compare equal.
//!
//! ## Street Progression
//!
//! [`Street`] encodes the four betting rounds: preflop → flop → turn → river.
mod board;
mod card;
mod combo;
mod hand;
mod rank;
mod street;
mod suit;

pub use board::*;
pub use card::*;
pub use combo::*;
pub use hand::*;
pub use rank::*;
pub use street::*;
pub use suit::*;
