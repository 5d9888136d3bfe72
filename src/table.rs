//! The table engine: chip, pot and turn bookkeeping for one live game.
//!
//! A [`Table`] owns every player record and all betting state. Every operation
//! is a single transition over that state: it is validated first and only then
//! applied, so a rejected action leaves the table untouched.

use crate::chips::Chips;
use std::collections::{HashMap, VecDeque};

mod actions;
mod award;
mod legal;
mod rotation;

pub use award::AwardSummary;
pub use legal::LegalActions;

/// Where the current hand stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// The dealer seat owes the small blind.
    AwaitingSmallBlind,
    /// The seat after the small blind owes the big blind.
    AwaitingBigBlind,
    /// Regular betting; see [`Table::round`] for which betting round.
    Betting,
    /// Nobody can bet any more; the pot waits to be awarded.
    HandComplete,
}

/// What an accepted action led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionOutcome {
    /// Action passed to `seat` within the same betting round.
    Advanced { seat: usize },
    /// The betting round closed; bets were swept and `round` opened at `seat`.
    RoundClosed { round: u32, seat: usize },
    /// Bets were swept and no further betting is possible this hand.
    HandComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryVerb {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
    Win,
    Split,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::SmallBlind => "SB",
            HistoryVerb::BigBlind => "BB",
            HistoryVerb::Fold => "Fold",
            HistoryVerb::Check => "Check",
            HistoryVerb::Call => "Call",
            HistoryVerb::Raise => "Raise by",
            HistoryVerb::AllIn => "All in",
            HistoryVerb::Win => "Win",
            HistoryVerb::Split => "Split",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub seat: usize,
    pub name: String,
    pub verb: HistoryVerb,
    pub amount: Option<Chips>,
    pub round: u32,
}

/// Reasons the engine refuses an operation. A refused operation changes nothing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("it is not {0}'s turn")]
    OutOfTurn(String),
    #[error("raise too small: min {min}, got {got}")]
    BelowMinimumRaise { min: Chips, got: Chips },
    #[error("insufficient stack: needs {needed}, has {available}")]
    InsufficientStack { needed: Chips, available: Chips },
    #[error("no player named {0}")]
    UnknownPlayer(String),
    #[error("a player named {0} is already seated")]
    DuplicateName(String),
    #[error("player name must not be empty")]
    EmptyName,
    #[error("buy-in must be greater than zero")]
    InvalidBuyIn,
    #[error("buy-in of {0} is more than the table can hold")]
    BuyInTooLarge(Chips),
    #[error("blinds must satisfy 0 < small ({small}) <= big ({big})")]
    InvalidBlinds { small: Chips, big: Chips },
    #[error("at least two players are needed to play a hand")]
    NotEnoughPlayers,
    #[error("the blind must be posted first")]
    BlindDue,
    #[error("no blind is due")]
    NoBlindDue,
    #[error("cannot check while facing {to_call}")]
    CannotCheck { to_call: Chips },
    #[error("nothing to call")]
    CallNotAvailable,
    #[error("a player is all in: only fold or all in are allowed")]
    AllInOnly,
    #[error("the hand is complete: award the pot")]
    HandComplete,
    #[error("{0} has folded")]
    PlayerFolded(String),
    #[error("no winners are selected")]
    NoWinnersSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) stack: Chips,
    pub(crate) bet: Chips,
    pub(crate) committed: Chips,
    pub(crate) folded: bool,
    pub(crate) selected: bool,
    pub(crate) all_in: bool,
}

impl Player {
    fn new(name: String, buy_in: Chips, sitting_out: bool) -> Self {
        Self {
            name,
            stack: buy_in,
            bet: Chips::ZERO,
            committed: Chips::ZERO,
            folded: sitting_out,
            selected: false,
            all_in: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chips behind, not counting what is staged in the current round.
    pub fn stack(&self) -> Chips {
        self.stack
    }

    /// Chips committed in the current betting round.
    pub fn current_amount_bet(&self) -> Chips {
        self.bet
    }

    /// Chips committed over the whole hand, including swept rounds.
    pub fn committed(&self) -> Chips {
        self.committed
    }

    pub fn folded(&self) -> bool {
        self.folded
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn all_in(&self) -> bool {
        self.all_in
    }

    pub(crate) fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }
}

/// Whether a blinds change took effect now or waits for the next hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlindsUpdate {
    Applied,
    Deferred,
}

/// Oldest history entries are dropped once this many are kept.
pub const HISTORY_LIMIT: usize = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Table {
    pub(crate) small_blind: Chips,
    pub(crate) big_blind: Chips,
    pub(crate) pending_blinds: Option<(Chips, Chips)>,

    pub(crate) players: Vec<Player>,
    seats: HashMap<String, usize>,
    pub(crate) pot: Chips,
    pub(crate) dealer: usize,
    pub(crate) turn: usize,
    pub(crate) round: u32,
    pub(crate) phase: Phase,

    pub(crate) amount_to_call: Chips,
    pub(crate) min_raise: Chips,
    /// No action has happened yet in the current betting round.
    pub(crate) first_turn: bool,
    pub(crate) bb_seat: Option<usize>,
    /// The big blind has not yet acted voluntarily in round one.
    pub(crate) bb_option: bool,
    pub(crate) all_in: bool,
    pub(crate) eff_all_in: Option<Chips>,
    history: VecDeque<HistoryEntry>,
}

impl Default for Table {
    fn default() -> Self {
        Self::with_blinds(Chips::from_major(1), Chips::from_major(2))
    }
}

impl Table {
    /// Creates an empty table, rejecting blinds unless `0 < small <= big`.
    pub fn new(small_blind: Chips, big_blind: Chips) -> Result<Self, ActionError> {
        validate_blinds(small_blind, big_blind)?;
        Ok(Self::with_blinds(small_blind, big_blind))
    }

    fn with_blinds(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            pending_blinds: None,
            players: Vec::new(),
            seats: HashMap::new(),
            pot: Chips::ZERO,
            dealer: 0,
            turn: 0,
            round: 1,
            phase: Phase::AwaitingSmallBlind,
            amount_to_call: Chips::ZERO,
            min_raise: small_blind,
            first_turn: true,
            bb_seat: None,
            bb_option: false,
            all_in: false,
            eff_all_in: None,
            history: VecDeque::new(),
        }
    }

    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    /// Blinds waiting to take effect at the next hand, if any.
    pub fn pending_blinds(&self) -> Option<(Chips, Chips)> {
        self.pending_blinds
    }

    /// Players in seat order; the seat index doubles as turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.seats.get(name).map(|&seat| &self.players[seat])
    }

    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.seats.get(name).copied()
    }

    /// Chips swept from completed betting rounds.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Seat whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn amount_to_call(&self) -> Chips {
        self.amount_to_call
    }

    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }

    pub fn first_turn(&self) -> bool {
        self.first_turn
    }

    /// Seat that posted the big blind this hand.
    pub fn big_blind_seat(&self) -> Option<usize> {
        self.bb_seat
    }

    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Smallest total any all-in player has committed this hand.
    pub fn effective_all_in(&self) -> Option<Chips> {
        self.eff_all_in
    }

    /// How much `seat` still has to put in to stay in the round.
    pub fn to_call(&self, seat: usize) -> Chips {
        self.players
            .get(seat)
            .map(|p| self.amount_to_call.saturating_sub(p.bet))
            .unwrap_or(Chips::ZERO)
    }

    /// Players who have not folded this hand.
    pub fn players_still_in(&self) -> usize {
        self.players.iter().filter(|p| !p.folded).count()
    }

    /// `pot + Σ stack + Σ current bet`; constant between pot awards.
    pub fn chips_in_play(&self) -> Chips {
        self.pot + self.players.iter().map(|p| p.stack + p.bet).sum::<Chips>()
    }

    /// True once any chip has been committed in the current hand.
    pub fn hand_in_progress(&self) -> bool {
        self.phase != Phase::AwaitingSmallBlind
    }

    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        self.history_recent_offset(n, 0)
    }

    /// Up to `n` entries ending `offset` entries before the most recent one.
    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        let len = self.history.len();
        if n == 0 || len == 0 {
            return Vec::new();
        }
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.history.range(start..end).cloned().collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Seats a new player at the end of the turn order.
    ///
    /// A player joining while a hand is in progress sits out until the next
    /// hand. Returns the new seat.
    pub fn add_player(&mut self, name: &str, buy_in: Chips) -> Result<usize, ActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::EmptyName);
        }
        if buy_in.is_zero() {
            return Err(ActionError::InvalidBuyIn);
        }
        if self.seats.contains_key(name) {
            return Err(ActionError::DuplicateName(name.to_string()));
        }
        if self.chips_in_play().checked_add(buy_in).is_none() {
            return Err(ActionError::BuyInTooLarge(buy_in));
        }
        let seat = self.players.len();
        let sitting_out = self.hand_in_progress();
        self.players.push(Player::new(name.to_string(), buy_in, sitting_out));
        self.seats.insert(name.to_string(), seat);
        if !sitting_out {
            self.align_dealer_to_eligible();
            self.turn = self.dealer;
        }
        log::info!("seated {name} at seat {seat} with {buy_in}");
        Ok(seat)
    }

    /// Flips the winner mark on a player. Folded players cannot be marked.
    pub fn toggle_player_selected(&mut self, name: &str) -> Result<bool, ActionError> {
        let seat = self.require_seat(name)?;
        let player = &self.players[seat];
        if player.folded && !player.selected {
            return Err(ActionError::PlayerFolded(player.name.clone()));
        }
        let player = &mut self.players[seat];
        player.selected = !player.selected;
        Ok(player.selected)
    }

    /// Changes the blinds now if no chips are in the current hand, otherwise
    /// at the next pot award.
    pub fn set_blinds(&mut self, small: Chips, big: Chips) -> Result<BlindsUpdate, ActionError> {
        validate_blinds(small, big)?;
        if self.hand_in_progress() {
            self.pending_blinds = Some((small, big));
            log::info!("blinds {small}/{big} deferred to next hand");
            return Ok(BlindsUpdate::Deferred);
        }
        self.small_blind = small;
        self.big_blind = big;
        self.min_raise = small;
        self.pending_blinds = None;
        log::info!("blinds set to {small}/{big}");
        Ok(BlindsUpdate::Applied)
    }

    pub(crate) fn require_seat(&self, name: &str) -> Result<usize, ActionError> {
        self.seat_of(name).ok_or_else(|| ActionError::UnknownPlayer(name.to_string()))
    }

    /// Moves the button forward onto the first seat that is in the hand.
    pub(crate) fn align_dealer_to_eligible(&mut self) {
        let n = self.players.len();
        if n == 0 {
            return;
        }
        let mut dealer = self.dealer % n;
        for _ in 0..n {
            if !self.players[dealer].folded {
                break;
            }
            dealer = (dealer + 1) % n;
        }
        self.dealer = dealer;
    }

    pub(crate) fn record_history(&mut self, seat: usize, verb: HistoryVerb, amount: Option<Chips>) {
        let entry = HistoryEntry {
            seat,
            name: self.players[seat].name.clone(),
            verb,
            amount,
            round: self.round,
        };
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(entry);
    }
}

fn validate_blinds(small: Chips, big: Chips) -> Result<(), ActionError> {
    if small.is_zero() || big < small {
        return Err(ActionError::InvalidBlinds { small, big });
    }
    Ok(())
}
