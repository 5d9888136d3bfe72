//! Validation for the add-player and change-blinds forms.
//!
//! These run before anything reaches the table so the operator gets
//! field-level messages instead of engine rejections.

use crate::chips::{AmountParseError, Chips};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistrationError {
    #[error("Name is required")]
    EmptyName,
    #[error("Cannot duplicate names")]
    DuplicateName(String),
    #[error("{field}: {source}")]
    InvalidAmount {
        field: &'static str,
        #[source]
        source: AmountParseError,
    },
    #[error("{field}: must be greater than 0")]
    NotPositive { field: &'static str },
    #[error("big blind must be at least the small blind")]
    BigBlindBelowSmall,
}

impl RegistrationError {
    /// Which form field the message belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            RegistrationError::EmptyName | RegistrationError::DuplicateName(_) => "name",
            RegistrationError::InvalidAmount { field, .. }
            | RegistrationError::NotPositive { field } => *field,
            RegistrationError::BigBlindBelowSmall => "big blind",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub buy_in: Chips,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
}

fn positive_amount(field: &'static str, raw: &str) -> Result<Chips, RegistrationError> {
    let amount = raw
        .parse::<Chips>()
        .map_err(|source| RegistrationError::InvalidAmount { field, source })?;
    if amount.is_zero() {
        return Err(RegistrationError::NotPositive { field });
    }
    Ok(amount)
}

/// Checks a name and buy-in against the names already seated.
pub fn validate_player(
    name: &str,
    buy_in: &str,
    existing: &[&str],
) -> Result<NewPlayer, RegistrationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistrationError::EmptyName);
    }
    if existing.contains(&name) {
        return Err(RegistrationError::DuplicateName(name.to_string()));
    }
    let buy_in = positive_amount("buy-in", buy_in)?;
    Ok(NewPlayer { name: name.to_string(), buy_in })
}

pub fn validate_blinds(small: &str, big: &str) -> Result<Blinds, RegistrationError> {
    let small = positive_amount("small blind", small)?;
    let big = positive_amount("big blind", big)?;
    check_blind_order(small, big)
}

/// Blinds already parsed elsewhere, e.g. from the command line.
pub fn check_blind_order(small: Chips, big: Chips) -> Result<Blinds, RegistrationError> {
    if small.is_zero() {
        return Err(RegistrationError::NotPositive { field: "small blind" });
    }
    if big.is_zero() {
        return Err(RegistrationError::NotPositive { field: "big blind" });
    }
    if big < small {
        return Err(RegistrationError::BigBlindBelowSmall);
    }
    Ok(Blinds { small, big })
}
