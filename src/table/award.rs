//! Pot award and the reset into the next hand.

use super::{ActionError, HistoryVerb, Phase, Table};
use crate::chips::Chips;

/// Result of [`Table::award_pot`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct AwardSummary {
    /// What each winner received.
    pub reward: Chips,
    /// Indivisible remainder carried into the next hand's pot.
    pub change: Chips,
    pub winners: Vec<String>,
}

impl Table {
    /// Splits the pot equally among the selected players and starts the next
    /// hand with the button one seat further on.
    pub fn award_pot(&mut self) -> Result<AwardSummary, ActionError> {
        let winners: Vec<usize> =
            (0..self.players.len()).filter(|&i| self.players[i].selected).collect();
        if winners.is_empty() {
            return Err(ActionError::NoWinnersSelected);
        }
        self.sweep_bets();
        let Some((reward, change)) = self.pot.split(winners.len()) else {
            return Err(ActionError::NoWinnersSelected);
        };

        let verb = if winners.len() > 1 { HistoryVerb::Split } else { HistoryVerb::Win };
        for &seat in &winners {
            self.players[seat].stack += reward;
            self.record_history(seat, verb, Some(reward));
        }
        let names = winners.iter().map(|&s| self.players[s].name.clone()).collect();
        log::info!("awarded {} as {reward} x {}, {change} carried", self.pot, winners.len());

        self.pot = change;
        self.start_next_hand();
        Ok(AwardSummary { reward, change, winners: names })
    }

    fn start_next_hand(&mut self) {
        for p in &mut self.players {
            p.selected = false;
            p.bet = Chips::ZERO;
            p.committed = Chips::ZERO;
            p.all_in = false;
            // Busted players sit out.
            p.folded = p.stack.is_zero();
        }
        if let Some((small, big)) = self.pending_blinds.take() {
            self.small_blind = small;
            self.big_blind = big;
        }
        self.round = 1;
        self.phase = Phase::AwaitingSmallBlind;
        if !self.players.is_empty() {
            self.dealer = (self.dealer + 1) % self.players.len();
        }
        self.align_dealer_to_eligible();
        self.turn = self.dealer;
        self.amount_to_call = Chips::ZERO;
        self.min_raise = self.small_blind;
        self.first_turn = true;
        self.bb_seat = None;
        self.bb_option = false;
        self.all_in = false;
        self.eff_all_in = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::chips::Chips;
    use crate::table::{ActionError, Phase, Table};

    #[test]
    fn award_needs_a_winner() {
        let mut t = Table::default();
        t.add_player("A", Chips::from_major(10)).unwrap();
        t.add_player("B", Chips::from_major(10)).unwrap();
        t.post_blind("A").unwrap();
        let before = t.clone();
        assert_eq!(t.award_pot(), Err(ActionError::NoWinnersSelected));
        assert_eq!(t, before);
    }

    #[test]
    fn award_sweeps_staged_bets() {
        let mut t = Table::default();
        t.add_player("A", Chips::from_major(10)).unwrap();
        t.add_player("B", Chips::from_major(10)).unwrap();
        t.post_blind("A").unwrap();
        t.post_blind("B").unwrap();
        t.toggle_player_selected("B").unwrap();
        let summary = t.award_pot().unwrap();
        assert_eq!(summary.reward, Chips::from_major(3));
        assert_eq!(summary.winners, vec!["B".to_string()]);
        assert_eq!(t.players()[1].stack(), Chips::from_major(11));
        assert_eq!(t.pot(), Chips::ZERO);
        assert_eq!(t.phase(), Phase::AwaitingSmallBlind);
        assert_eq!(t.dealer(), 1);
        assert_eq!(t.turn(), 1);
    }

    #[test]
    fn busted_player_sits_out_and_button_skips_them() {
        let mut t = Table::default();
        for n in ["A", "B", "C"] {
            t.add_player(n, Chips::from_major(10)).unwrap();
        }
        t.players[1].stack = Chips::ZERO;
        t.toggle_player_selected("A").unwrap();
        t.award_pot().unwrap();
        assert!(t.players()[1].folded());
        assert_eq!(t.dealer(), 2);
    }
}
