//! Command-line configuration for the `poker-ledger` binary.

use crate::chips::Chips;
use crate::registration::{self, RegistrationError};
use crate::table::{ActionError, Table};
use clap::Parser;
use core::str::FromStr;
use log::LevelFilter;
use std::path::PathBuf;

/// A player seated at start-up, written as `NAME=BUYIN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSpec {
    pub name: String,
    pub buy_in: String,
}

impl FromStr for SeatSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('=') {
            Some((name, buy_in)) => {
                Ok(SeatSpec { name: name.to_string(), buy_in: buy_in.to_string() })
            }
            None => Err(format!("expected NAME=BUYIN, got {s:?}")),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "poker-ledger", version, about = "Chip and turn scorekeeper for live poker")]
pub struct Config {
    /// Small blind, e.g. 0.50
    #[arg(long, default_value = "1")]
    pub small_blind: Chips,

    /// Big blind, e.g. 1.00
    #[arg(long, default_value = "2")]
    pub big_blind: Chips,

    /// Seat a player before the first hand (repeatable), e.g. --player Ben=100
    #[arg(long = "player", value_name = "NAME=BUYIN")]
    pub players: Vec<SeatSpec>,

    /// Write logs to this file; logging is off without it
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// UI poll interval in milliseconds
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Registration(#[from] RegistrationError),
    #[error("could not seat player: {0}")]
    Table(#[from] ActionError),
}

impl Config {
    /// Builds the starting table, validating through the same rules as the
    /// on-screen forms.
    pub fn build_table(&self) -> Result<Table, ConfigError> {
        let blinds = registration::check_blind_order(self.small_blind, self.big_blind)?;
        let mut table = Table::new(blinds.small, blinds.big)?;
        for seat in &self.players {
            let names: Vec<&str> = table.players().iter().map(|p| p.name()).collect();
            let player = registration::validate_player(&seat.name, &seat.buy_in, &names)?;
            table.add_player(&player.name, player.buy_in)?;
        }
        Ok(table)
    }
}
