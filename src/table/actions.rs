//! Player actions. Each handler validates against the current state, then
//! applies its change and hands over to [`Table::after_action`].

use super::{ActionError, ActionOutcome, HistoryVerb, Phase, Table};
use crate::chips::Chips;

impl Table {
    fn ensure_enough_players(&self) -> Result<(), ActionError> {
        if self.players.iter().filter(|p| !p.folded).count() < 2 && !self.hand_in_progress() {
            return Err(ActionError::NotEnoughPlayers);
        }
        Ok(())
    }

    fn ensure_turn(&self, name: &str) -> Result<usize, ActionError> {
        self.ensure_enough_players()?;
        let seat = self.require_seat(name)?;
        if self.phase == Phase::HandComplete {
            return Err(ActionError::HandComplete);
        }
        if seat != self.turn {
            return Err(ActionError::OutOfTurn(name.to_string()));
        }
        Ok(seat)
    }

    /// Checks that `name` may take a regular betting action right now.
    fn ensure_can_bet(&self, name: &str) -> Result<usize, ActionError> {
        let seat = self.ensure_turn(name)?;
        match self.phase {
            Phase::AwaitingSmallBlind | Phase::AwaitingBigBlind => Err(ActionError::BlindDue),
            _ => Ok(seat),
        }
    }

    /// Moves `pay` from the seat's stack into its current bet.
    fn commit(&mut self, seat: usize, pay: Chips) {
        let p = &mut self.players[seat];
        p.stack -= pay;
        p.bet += pay;
        p.committed += pay;
        if p.stack.is_zero() {
            self.mark_all_in(seat, pay);
        }
    }

    /// `size` is the stack the player had left when going all in.
    fn mark_all_in(&mut self, seat: usize, size: Chips) {
        self.players[seat].all_in = true;
        self.all_in = true;
        self.eff_all_in = Some(self.eff_all_in.map_or(size, |eff| eff.min(size)));
    }

    /// Lifts the amount to call to `seat`'s bet if it is now the highest,
    /// raising the minimum raise to the size of the increment if larger.
    fn raise_bar_to(&mut self, seat: usize) {
        let bet = self.players[seat].bet;
        if bet > self.amount_to_call {
            let increment = bet - self.amount_to_call;
            if increment > self.min_raise {
                self.min_raise = increment;
            }
            self.amount_to_call = bet;
        }
    }

    /// Posts whichever blind is due. A short stack posts what it has.
    pub fn post_blind(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        let seat = self.ensure_turn(name)?;
        let (target, verb) = match self.phase {
            Phase::AwaitingSmallBlind => (self.small_blind, HistoryVerb::SmallBlind),
            Phase::AwaitingBigBlind => (self.big_blind, HistoryVerb::BigBlind),
            _ => return Err(ActionError::NoBlindDue),
        };
        let pay = target.saturating_sub(self.players[seat].bet).min(self.players[seat].stack);
        self.commit(seat, pay);
        self.raise_bar_to(seat);
        self.record_history(seat, verb, Some(pay));
        log::debug!("{name} posts {} {pay}", verb.label());

        if verb == HistoryVerb::SmallBlind {
            self.phase = Phase::AwaitingBigBlind;
        } else {
            self.phase = Phase::Betting;
            self.round = 1;
            self.bb_seat = Some(seat);
            self.bb_option = !self.players[seat].all_in;
        }
        Ok(self.after_action(seat, false))
    }

    /// Raises by `amount` on top of the amount to call.
    pub fn raise(&mut self, name: &str, amount: Chips) -> Result<ActionOutcome, ActionError> {
        let seat = self.ensure_can_bet(name)?;
        if self.all_in {
            return Err(ActionError::AllInOnly);
        }
        if amount < self.min_raise {
            return Err(ActionError::BelowMinimumRaise { min: self.min_raise, got: amount });
        }
        let p = &self.players[seat];
        let available = p.stack;
        let pay = self.amount_to_call.saturating_sub(p.bet).checked_add(amount);
        let pay = match pay {
            Some(pay) if pay <= available => pay,
            needed => {
                let needed = needed.unwrap_or(Chips::MAX);
                return Err(ActionError::InsufficientStack { needed, available });
            }
        };

        if amount > self.min_raise {
            self.min_raise = amount;
        }
        self.amount_to_call += amount;
        self.commit(seat, pay);
        self.record_history(seat, HistoryVerb::Raise, Some(amount));
        log::debug!("{name} raises by {amount}, {} to call", self.amount_to_call);
        Ok(self.after_action(seat, true))
    }

    /// Matches the amount to call.
    pub fn call(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        let seat = self.ensure_can_bet(name)?;
        if self.all_in {
            return Err(ActionError::AllInOnly);
        }
        let to_call = self.to_call(seat);
        if to_call.is_zero() {
            return Err(ActionError::CallNotAvailable);
        }
        let available = self.players[seat].stack;
        if to_call > available {
            return Err(ActionError::InsufficientStack { needed: to_call, available });
        }
        self.commit(seat, to_call);
        self.record_history(seat, HistoryVerb::Call, Some(to_call));
        log::debug!("{name} calls {to_call}");
        Ok(self.after_action(seat, true))
    }

    /// Passes the turn without betting; only allowed when nothing is owed.
    pub fn check(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        let seat = self.ensure_can_bet(name)?;
        if self.all_in {
            return Err(ActionError::AllInOnly);
        }
        let to_call = self.to_call(seat);
        if !to_call.is_zero() {
            return Err(ActionError::CannotCheck { to_call });
        }
        self.record_history(seat, HistoryVerb::Check, None);
        log::debug!("{name} checks");
        Ok(self.after_action(seat, true))
    }

    /// Folds for the rest of the hand. Staged chips stay on the table.
    pub fn fold(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        let seat = self.ensure_can_bet(name)?;
        let p = &mut self.players[seat];
        p.folded = true;
        p.selected = false;
        self.record_history(seat, HistoryVerb::Fold, None);
        log::debug!("{name} folds");
        Ok(self.after_action(seat, true))
    }

    /// Commits the player's whole stack.
    pub fn go_all_in(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        let seat = self.ensure_can_bet(name)?;
        let pay = self.players[seat].stack;
        if pay.is_zero() {
            return Err(ActionError::InsufficientStack {
                needed: Chips::from_cents(1),
                available: Chips::ZERO,
            });
        }
        self.commit(seat, pay);
        self.raise_bar_to(seat);
        let bet = self.players[seat].bet;
        self.record_history(seat, HistoryVerb::AllIn, Some(bet));
        log::debug!("{name} is all in for {bet}");
        Ok(self.after_action(seat, true))
    }
}

#[cfg(test)]
mod tests {
    use crate::chips::Chips;
    use crate::table::{ActionError, Phase, Table};

    fn d(n: u64) -> Chips {
        Chips::from_major(n)
    }

    fn three_handed() -> Table {
        let mut t = Table::default();
        for n in ["A", "B", "C"] {
            t.add_player(n, d(100)).unwrap();
        }
        t
    }

    #[test]
    fn blinds_must_come_first() {
        let mut t = three_handed();
        assert_eq!(t.call("A"), Err(ActionError::BlindDue));
        assert_eq!(t.post_blind("B"), Err(ActionError::OutOfTurn("B".into())));
        t.post_blind("A").unwrap();
        assert_eq!(t.phase(), Phase::AwaitingBigBlind);
        assert_eq!(t.turn(), 1);
        t.post_blind("B").unwrap();
        assert_eq!(t.phase(), Phase::Betting);
        assert_eq!(t.amount_to_call(), d(2));
        assert_eq!(t.players()[1].stack(), d(98));
        assert_eq!(t.post_blind("C"), Err(ActionError::NoBlindDue));
    }

    #[test]
    fn raise_sets_new_bar() {
        let mut t = three_handed();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        t.raise("C", d(6)).unwrap();
        assert_eq!(t.amount_to_call(), d(8));
        assert_eq!(t.min_raise(), d(6));
        assert_eq!(t.players()[2].current_amount_bet(), d(8));
        assert_eq!(
            t.raise("A", d(5)),
            Err(ActionError::BelowMinimumRaise { min: d(6), got: d(5) })
        );
    }

    #[test]
    fn raise_beyond_stack_is_rejected() {
        let mut t = three_handed();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        let err = t.raise("C", d(99)).unwrap_err();
        assert_eq!(err, ActionError::InsufficientStack { needed: d(101), available: d(100) });
    }

    #[test]
    fn check_requires_nothing_owed() {
        let mut t = three_handed();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        assert_eq!(t.check("C"), Err(ActionError::CannotCheck { to_call: d(2) }));
    }

    #[test]
    fn all_in_locks_other_players_to_fold_or_shove() {
        let mut t = three_handed();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        t.go_all_in("C").unwrap();
        assert!(t.is_all_in());
        assert_eq!(t.amount_to_call(), d(100));
        assert_eq!(t.effective_all_in(), Some(d(100)));
        assert_eq!(t.call("A"), Err(ActionError::AllInOnly));
        t.fold("A").unwrap();
        assert_eq!(t.turn(), 1);
    }

    #[test]
    fn emptying_call_flags_all_in() {
        let mut t = Table::default();
        t.add_player("A", d(100)).unwrap();
        t.add_player("B", d(10)).unwrap();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        t.raise("A", d(8)).unwrap();
        t.call("B").unwrap();
        assert!(t.players()[1].all_in());
        assert_eq!(t.effective_all_in(), Some(d(8)));
        assert_eq!(t.phase(), Phase::HandComplete);
        assert_eq!(t.pot(), d(20));
    }

    #[test]
    fn effective_all_in_is_the_stack_shoved() {
        let mut t = three_handed();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        t.raise("C", d(18)).unwrap();
        t.call("A").unwrap();
        t.call("B").unwrap();
        assert_eq!(t.round(), 2);
        let shover = t.players()[t.turn()].name().to_string();
        t.go_all_in(&shover).unwrap();
        assert_eq!(t.effective_all_in(), Some(d(80)));
    }

    #[test]
    fn oversized_raise_is_rejected_without_change() {
        let mut t = three_handed();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        let before = t.clone();
        let huge: Chips = "184467440737095516.15".parse().unwrap();
        assert_eq!(
            t.raise("C", huge),
            Err(ActionError::InsufficientStack { needed: Chips::MAX, available: d(100) })
        );
        assert_eq!(t, before);
        assert_eq!(t.min_raise(), d(1));
        assert_eq!(t.amount_to_call(), d(2));

        let near_max = Chips::from_cents(u64::MAX - 100);
        let err = t.raise("C", near_max).unwrap_err();
        assert!(matches!(err, ActionError::InsufficientStack { .. }));
        assert_eq!(t, before);
    }
}
