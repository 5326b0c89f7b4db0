//! Core library for atelier: the content model, selection state, and
//! target-agnostic view descriptions behind the portfolio browser.
//!
//! Nothing in this crate touches a display surface. The [`content`] module
//! holds the read-only catalogue loaded once from a fixture, [`state`] owns
//! the single mutable [`state::Selection`], and [`view`] turns the two into
//! plain view-description values that an adapter (the terminal UI in the
//! `atelier` binary) draws. [`schedule`] sequences the short timed
//! transitions between views without letting stale timers win races.

pub mod content;
pub mod schedule;
pub mod state;
pub mod view;

pub use content::{Catalogue, ContentError};
pub use state::Selection;
