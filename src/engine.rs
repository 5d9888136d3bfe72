// Table engine API boundary. Front ends (the TUI, tests, scripted sessions)
// drive the table through this trait so they never write player fields
// directly. It is implemented for the core `Table` type.

use crate::chips::Chips;
use crate::table::{
    ActionError, ActionOutcome, AwardSummary, BlindsUpdate, LegalActions, Phase, Player, Table,
};

pub trait TableEngine {
    // Seating and hand lifecycle
    fn add_player(&mut self, name: &str, buy_in: Chips) -> Result<usize, ActionError>;
    fn set_blinds(&mut self, small: Chips, big: Chips) -> Result<BlindsUpdate, ActionError>;
    fn toggle_player_selected(&mut self, name: &str) -> Result<bool, ActionError>;
    fn award_pot(&mut self) -> Result<AwardSummary, ActionError>;

    // Player actions
    fn post_blind(&mut self, name: &str) -> Result<ActionOutcome, ActionError>;
    fn raise(&mut self, name: &str, amount: Chips) -> Result<ActionOutcome, ActionError>;
    fn call(&mut self, name: &str) -> Result<ActionOutcome, ActionError>;
    fn fold(&mut self, name: &str) -> Result<ActionOutcome, ActionError>;
    fn check_and_advance(&mut self, name: &str) -> Result<ActionOutcome, ActionError>;
    fn go_all_in(&mut self, name: &str) -> Result<ActionOutcome, ActionError>;

    // Queries
    fn compute_legal_actions(&self, name: &str, seat: usize) -> LegalActions;
    fn players(&self) -> &[Player];
    fn pot(&self) -> Chips;
    fn turn(&self) -> usize;
    fn dealer(&self) -> usize;
    fn round(&self) -> u32;
    fn phase(&self) -> Phase;
    fn amount_to_call(&self) -> Chips;
    fn min_raise(&self) -> Chips;
}

impl TableEngine for Table {
    fn add_player(&mut self, name: &str, buy_in: Chips) -> Result<usize, ActionError> {
        self.add_player(name, buy_in)
    }
    fn set_blinds(&mut self, small: Chips, big: Chips) -> Result<BlindsUpdate, ActionError> {
        self.set_blinds(small, big)
    }
    fn toggle_player_selected(&mut self, name: &str) -> Result<bool, ActionError> {
        self.toggle_player_selected(name)
    }
    fn award_pot(&mut self) -> Result<AwardSummary, ActionError> {
        self.award_pot()
    }

    fn post_blind(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        self.post_blind(name)
    }
    fn raise(&mut self, name: &str, amount: Chips) -> Result<ActionOutcome, ActionError> {
        self.raise(name, amount)
    }
    fn call(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        self.call(name)
    }
    fn fold(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        self.fold(name)
    }
    fn check_and_advance(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        self.check(name)
    }
    fn go_all_in(&mut self, name: &str) -> Result<ActionOutcome, ActionError> {
        self.go_all_in(name)
    }

    fn compute_legal_actions(&self, name: &str, seat: usize) -> LegalActions {
        self.compute_legal_actions(name, seat)
    }
    fn players(&self) -> &[Player] {
        self.players()
    }
    fn pot(&self) -> Chips {
        self.pot()
    }
    fn turn(&self) -> usize {
        self.turn()
    }
    fn dealer(&self) -> usize {
        self.dealer()
    }
    fn round(&self) -> u32 {
        self.round()
    }
    fn phase(&self) -> Phase {
        self.phase()
    }
    fn amount_to_call(&self) -> Chips {
        self.amount_to_call()
    }
    fn min_raise(&self) -> Chips {
        self.min_raise()
    }
}

/// A seat-level action as pressed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    PostBlind,
    Check,
    Call,
    Raise(Chips),
    AllIn,
    Fold,
}

impl Command {
    /// Runs the command for the player called `name`.
    pub fn apply(
        self,
        engine: &mut dyn TableEngine,
        name: &str,
    ) -> Result<ActionOutcome, ActionError> {
        match self {
            Command::PostBlind => engine.post_blind(name),
            Command::Check => engine.check_and_advance(name),
            Command::Call => engine.call(name),
            Command::Raise(amount) => engine.raise(name, amount),
            Command::AllIn => engine.go_all_in(name),
            Command::Fold => engine.fold(name),
        }
    }

    /// Whether `legal` offers this command.
    pub fn is_offered(self, legal: &LegalActions) -> bool {
        match self {
            Command::PostBlind => legal.small_blind || legal.big_blind,
            Command::Check => legal.check,
            Command::Call => legal.call,
            Command::Raise(_) => legal.raise,
            Command::AllIn => legal.all_in,
            Command::Fold => legal.fold,
        }
    }
}
