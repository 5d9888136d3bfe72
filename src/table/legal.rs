use super::{Phase, Table};

/// The buttons a seat may press right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalActions {
    pub fold: bool,
    pub check: bool,
    pub call: bool,
    pub raise: bool,
    pub all_in: bool,
    pub small_blind: bool,
    pub big_blind: bool,
}

impl LegalActions {
    pub const NONE: LegalActions = LegalActions {
        fold: false,
        check: false,
        call: false,
        raise: false,
        all_in: false,
        small_blind: false,
        big_blind: false,
    };

    pub fn any(&self) -> bool {
        *self != Self::NONE
    }
}

impl Table {
    /// Actions available to `name` sitting at `seat`.
    ///
    /// Everything is false unless it is that seat's turn. The first two
    /// actions of a hand are forced blind posts.
    pub fn compute_legal_actions(&self, name: &str, seat: usize) -> LegalActions {
        let mut options = LegalActions::NONE;
        if seat != self.turn || self.seat_of(name) != Some(seat) {
            return options;
        }
        if self.players_still_in() < 2 && !self.hand_in_progress() {
            return options;
        }
        let player = &self.players[seat];
        if !player.can_act() {
            return options;
        }

        match self.phase {
            Phase::AwaitingSmallBlind => {
                options.small_blind = true;
                return options;
            }
            Phase::AwaitingBigBlind => {
                options.big_blind = true;
                return options;
            }
            Phase::HandComplete => return options,
            Phase::Betting => {}
        }

        options.fold = true;
        if self.all_in {
            options.all_in = true;
            return options;
        }

        let to_call = self.to_call(seat);
        options.check = to_call.is_zero();
        options.call = !to_call.is_zero() && to_call <= player.stack;
        options.raise = player.stack >= to_call + self.min_raise;
        options.all_in = true;
        options
    }

    /// [`Table::compute_legal_actions`] for whoever sits at `seat`.
    pub fn legal_actions_at(&self, seat: usize) -> LegalActions {
        match self.players.get(seat) {
            Some(p) => self.compute_legal_actions(&p.name, seat),
            None => LegalActions::NONE,
        }
    }
}
