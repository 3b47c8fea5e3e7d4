//! Range-based action engine.
//!
//! A player with a hidden hand acts by splitting their whole range into
//! fold, check/call, and bet/raise sub-ranges. This crate decides whether
//! such a split is acceptable and what it resolves to.
//!
//! ## Pipeline
//!
//! - [`fits`] — does the split exactly reconstitute the prior range, and is
//!   the raise size legal? Rejections carry a user-facing [`Rejection`].
//! - [`resolve`] — pick the realized branch with card-removal-correct odds,
//!   narrow the player's range, redeal their hand, shrink `current_factor`.
//! - [`redeal`] — the constrained variant for procedural actions where
//!   folding (or calling) is not allowed.
//! - [`classify`] — the deterministic variant for a known concrete hand.
//! - [`Turn`] — envelope, validation, resolution, and state transition in
//!   one call.
//!
//! Randomness always comes from the caller's [`rand::Rng`], so a seeded
//! generator replays a hand exactly.
mod classify;
mod redeal;
mod resolve;
mod turn;
mod validate;

pub use classify::*;
pub use redeal::*;
pub use resolve::*;
pub use turn::*;
pub use validate::*;
