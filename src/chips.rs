//! Chip amounts in currency minor units.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

/// Number of minor units (cents) in one major currency unit.
pub const MINOR_PER_MAJOR: u64 = 100;

/// An amount of chips, counted in cents so that splits floor exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);
    pub const MAX: Chips = Chips(u64::MAX);

    /// Creates an amount from a raw count of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Chips(cents)
    }

    /// Creates an amount from whole currency units.
    pub const fn from_major(units: u64) -> Self {
        Chips(units.saturating_mul(MINOR_PER_MAJOR))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Plain decimal form without symbol or separators, e.g. `1234.56`.
    pub fn to_decimal_string(self) -> String {
        format!("{}.{:02}", self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR)
    }

    pub fn checked_add(self, other: Chips) -> Option<Chips> {
        self.0.checked_add(other.0).map(Chips)
    }

    pub fn saturating_sub(self, other: Chips) -> Chips {
        Chips(self.0.saturating_sub(other.0))
    }

    pub fn checked_sub(self, other: Chips) -> Option<Chips> {
        self.0.checked_sub(other.0).map(Chips)
    }

    /// Splits the amount evenly across `ways`, returning `(share, remainder)`.
    ///
    /// Shares are floored to the cent and the remainder is what is left after
    /// paying every share, so `share * ways + remainder == self`.
    pub fn split(self, ways: usize) -> Option<(Chips, Chips)> {
        if ways == 0 {
            return None;
        }
        let ways = ways as u64;
        let share = self.0 / ways;
        Some((Chips(share), Chips(self.0 - share * ways)))
    }
}

// Both directions saturate; callers that must reject overflow use `checked_add`.
impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Chips {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Chips {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Chips {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    /// Formats as `$1,234.56`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = (self.0 / MINOR_PER_MAJOR).to_string();
        let minor = self.0 % MINOR_PER_MAJOR;
        let mut grouped = String::with_capacity(major.len() + major.len() / 3);
        for (i, ch) in major.chars().enumerate() {
            if i > 0 && (major.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${grouped}.{minor:02}")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount: {0}")]
    Invalid(String),
    #[error("at most two decimal places are allowed: {0}")]
    TooPrecise(String),
    #[error("amount is too large: {0}")]
    Overflow(String),
}

impl FromStr for Chips {
    type Err = AmountParseError;

    /// Parses `12`, `12.5`, `$1,200.50` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('$').unwrap_or(trimmed).replace(',', "");
        if body.is_empty() {
            return Err(AmountParseError::Empty);
        }
        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body.as_str(), ""),
        };
        let digits_only = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
            return Err(AmountParseError::Invalid(trimmed.to_string()));
        }
        if frac.len() > 2 {
            return Err(AmountParseError::TooPrecise(trimmed.to_string()));
        }
        let overflow = || AmountParseError::Overflow(trimmed.to_string());
        let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| overflow())? };
        let minor: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => frac.parse().map_err(|_| overflow())?,
        };
        whole
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|c| c.checked_add(minor))
            .map(Chips)
            .ok_or_else(overflow)
    }
}
