//! Table state and range-based actions.
//!
//! ## Core Types
//!
//! - [`Table`] — One hand in progress: players, board, betting-round bookkeeping
//! - [`Player`] — Stack, contribution, range, and hidden dealt combo
//! - [`ActionOptions`] — The legal envelope for the player to act
//! - [`ActionDetails`] — A proposed fold / call / raise split of a range
//! - [`ActionResult`] — What a split resolved to
//!
//! ## Transitions
//!
//! [`Table::options`] derives the envelope from table state and
//! [`Table::apply`] commits a resolved [`ActionResult`]. Deciding *which*
//! result a split resolves to lives in `rvr-engine`.
//!
//! ## Errors
//!
//! [`Violation`] marks a broken caller contract. It is never a user mistake.
mod details;
mod options;
mod player;
mod result;
mod structure;
mod table;
mod violation;

pub use details::*;
pub use options::*;
pub use player::*;
pub use result::*;
pub use structure::*;
pub use table::*;
pub use violation::*;
