//! Range-vs-range poker training.
//!
//! This facade crate re-exports the workspace crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and logging setup
//! - [`cards`] — Cards, hands, combos, streets, and boards
//! - [`ranges`] — Weighted ranges, range notation, and weighted draws
//! - [`gameplay`] — Table state, betting envelope, and state transitions
//! - [`engine`] — Partition validation and range-based resolution

pub use rvr_core     as core;
pub use rvr_cards    as cards;
pub use rvr_ranges   as ranges;
pub use rvr_gameplay as gameplay;
pub use rvr_engine   as engine;
