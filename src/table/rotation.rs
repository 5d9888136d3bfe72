//! Turn rotation and round closing.
//!
//! [`Table::after_action`] is the one place that moves play forward. Every
//! accepted action, blind posts included, ends by calling it.

use super::{ActionOutcome, Phase, Table};
use crate::chips::Chips;

impl Table {
    /// Seat that opens every betting round after the first: the one after the
    /// big blind.
    pub(crate) fn first_to_act_seat(&self) -> usize {
        let n = self.players.len().max(1);
        match self.bb_seat {
            Some(bb) => (bb + 1) % n,
            None => (self.dealer + 2) % n,
        }
    }

    /// Next seat after `from` that is still in the hand, ignoring all-in state.
    pub(crate) fn next_in_hand(&self, from: usize) -> usize {
        let n = self.players.len();
        let mut seat = from;
        for _ in 0..n {
            seat = (seat + 1) % n;
            if !self.players[seat].folded {
                return seat;
            }
        }
        from
    }

    /// Scans forward from `from` to the next seat that can act.
    ///
    /// Also reports whether the scan passed the first-to-act seat, which is
    /// how a round of checks is detected as complete.
    fn scan_next_actor(&self, from: usize) -> (usize, bool) {
        let n = self.players.len();
        let first = self.first_to_act_seat();
        let mut seat = from;
        let mut went_past_first = false;
        for _ in 0..n {
            seat = (seat + 1) % n;
            if seat == first {
                went_past_first = true;
            }
            if self.players[seat].can_act() {
                return (seat, went_past_first);
            }
        }
        (from, went_past_first)
    }

    /// First seat at or after `start` that can act.
    fn first_actor_from(&self, start: usize) -> usize {
        let n = self.players.len();
        (0..n).map(|i| (start + i) % n).find(|&s| self.players[s].can_act()).unwrap_or(start)
    }

    /// Everyone still in has matched the bet, or is all in for less.
    pub(crate) fn all_players_have_called(&self) -> bool {
        self.players
            .iter()
            .filter(|p| !p.folded)
            .all(|p| p.all_in || p.bet == self.amount_to_call)
    }

    fn players_able_to_act(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Progresses the table after `actor` acted.
    ///
    /// `voluntary` is false only for blind posts, which never use up the big
    /// blind's option.
    pub(crate) fn after_action(&mut self, actor: usize, voluntary: bool) -> ActionOutcome {
        if self.phase == Phase::AwaitingBigBlind {
            self.turn = self.next_in_hand(actor);
            self.first_turn = false;
            return ActionOutcome::Advanced { seat: self.turn };
        }
        if voluntary && self.round == 1 && self.bb_seat == Some(actor) {
            self.bb_option = false;
        }

        let all_called = self.all_players_have_called();
        if self.players_still_in() <= 1 || (all_called && self.players_able_to_act() <= 1) {
            return self.complete_hand();
        }

        let (next, went_past_first) = self.scan_next_actor(actor);
        let all_bet = all_called && (self.amount_to_call > Chips::ZERO || went_past_first);
        if all_bet && !self.first_turn && !self.bb_option {
            return self.close_round();
        }

        self.turn = next;
        self.first_turn = false;
        log::debug!("turn passes to seat {next}");
        ActionOutcome::Advanced { seat: next }
    }

    /// Moves every staged bet into the pot.
    pub(crate) fn sweep_bets(&mut self) {
        let mut swept = Chips::ZERO;
        for p in &mut self.players {
            swept += p.bet;
            p.bet = Chips::ZERO;
        }
        self.pot += swept;
    }

    fn close_round(&mut self) -> ActionOutcome {
        self.sweep_bets();
        self.round += 1;
        self.amount_to_call = Chips::ZERO;
        self.min_raise = self.big_blind;
        self.first_turn = true;
        self.bb_option = false;
        self.turn = self.first_actor_from(self.first_to_act_seat());
        log::info!("round {} opens at seat {}, pot {}", self.round, self.turn, self.pot);
        ActionOutcome::RoundClosed { round: self.round, seat: self.turn }
    }

    fn complete_hand(&mut self) -> ActionOutcome {
        self.sweep_bets();
        self.amount_to_call = Chips::ZERO;
        self.bb_option = false;
        self.phase = Phase::HandComplete;
        log::info!("hand complete, pot {} awaits award", self.pot);
        ActionOutcome::HandComplete
    }
}
