//! poker-ledger: chip, pot and turn bookkeeping for live poker games
//!
//! The cards stay on the felt. This crate keeps the money straight:
//! - Blinds, raises, calls, checks, folds and all-ins against per-seat stacks
//! - Turn rotation and betting-round closing, including the big blind's option
//! - Awarding the pot to one or more winners, floored to the cent
//!
//! ## Quick start: a hand that ends with a fold
//! ```
//! use poker_ledger::chips::Chips;
//! use poker_ledger::table::{ActionOutcome, Table};
//!
//! let mut table = Table::new(Chips::from_major(1), Chips::from_major(2)).unwrap();
//! table.add_player("Ann", Chips::from_major(100)).unwrap();
//! table.add_player("Ben", Chips::from_major(100)).unwrap();
//!
//! table.post_blind("Ann").unwrap();
//! table.post_blind("Ben").unwrap();
//! assert_eq!(table.fold("Ann").unwrap(), ActionOutcome::HandComplete);
//!
//! table.toggle_player_selected("Ben").unwrap();
//! let summary = table.award_pot().unwrap();
//! assert_eq!(summary.reward, Chips::from_major(3));
//! assert_eq!(table.players()[1].stack(), Chips::from_major(101));
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin poker-ledger -- --player Ann=100 --player Ben=100
//! ```

pub mod chips;
pub mod config;
pub mod engine;
pub mod registration;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
