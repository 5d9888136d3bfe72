use crate::chips::Chips;
use crate::engine::{Command, TableEngine};
use crate::registration;
use crate::table::{ActionOutcome, Table};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    PostBlind,
    Check,
    Call,
    AllIn,
    Fold,
    RaiseOpen,
    ToggleWinner,
    AwardPot,
    AddPlayerOpen,
    EntryChar(char),
    EntryBackspace,
    EntryNextField,
    EntryInc,
    EntryDec,
    EntrySubmit,
    EntryCancel,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
    FocusTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Name,
    BuyIn,
}

/// A popup form being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Raise { amount: String },
    AddPlayer { name: String, buy_in: String, field: PlayerField },
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub table: Table,
    // Seat the operator is acting for; follows the turn after each action
    pub focus: usize,
    // Blinds menu being edited
    pub menu_index: usize,
    pub cfg_small_blind: Chips,
    pub cfg_big_blind: Chips,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    entry: Option<Entry>,
    entry_error: Option<String>,
    notice: Option<Notice>,
}

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    is_error: bool,
    at: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Table::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const NOTICE_TTL: Duration = Duration::from_secs(3);
    const ENTRY_MAX_LEN: usize = 24;

    pub fn new(table: Table) -> Self {
        let focus = table.turn();
        Self {
            scene: Scene::Table,
            cfg_small_blind: table.small_blind(),
            cfg_big_blind: table.big_blind(),
            table,
            focus,
            menu_index: 0,
            help_open: false,
            history_open: false,
            history_offset: 0,
            entry: None,
            entry_error: None,
            notice: None,
        }
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    pub fn entry_active(&self) -> bool {
        self.entry.is_some()
    }

    pub fn entry_error(&self) -> Option<&str> {
        self.entry_error.as_deref()
    }

    /// The latest notice and whether it reports a rejection.
    pub fn notice(&self) -> Option<(&str, bool)> {
        self.notice.as_ref().map(|n| (n.text.as_str(), n.is_error))
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub(crate) fn set_notice(&mut self, text: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice { text: text.into(), is_error, at: Instant::now() });
    }

    fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// All table mutations from the UI go through the engine boundary.
    pub(crate) fn engine(&mut self) -> &mut dyn TableEngine {
        &mut self.table
    }

    fn focused_name(&self) -> Option<String> {
        self.table.players().get(self.focus).map(|p| p.name().to_string())
    }

    /// Sends `command` to the engine on behalf of the focused seat.
    fn act(&mut self, command: Command) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        let Some(name) = self.focused_name() else {
            return false;
        };
        match command.apply(self.engine(), &name) {
            Ok(outcome) => {
                match outcome {
                    ActionOutcome::Advanced { .. } => self.clear_notice(),
                    ActionOutcome::RoundClosed { round, .. } => {
                        self.set_notice(format!("Betting round {round}"), false)
                    }
                    ActionOutcome::HandComplete => self
                        .set_notice("Hand complete: mark winners with W, award with P", false),
                }
                self.focus = self.table.turn();
                true
            }
            Err(err) => {
                log::debug!("rejected {command:?} for {name}: {err}");
                self.set_notice(err.to_string(), true);
                false
            }
        }
    }

    fn toggle_winner(&mut self) {
        let Some(name) = self.focused_name() else {
            return;
        };
        if let Err(err) = self.engine().toggle_player_selected(&name) {
            self.set_notice(err.to_string(), true);
        }
    }

    fn award_pot(&mut self) -> bool {
        match self.engine().award_pot() {
            Ok(summary) => {
                let mut text =
                    format!("{} each to {}", summary.reward, summary.winners.join(", "));
                if !summary.change.is_zero() {
                    text.push_str(&format!(" ({} carried)", summary.change));
                }
                self.set_notice(text, false);
                self.focus = self.table.turn();
                true
            }
            Err(err) => {
                self.set_notice(err.to_string(), true);
                false
            }
        }
    }

    fn open_raise_entry(&mut self) -> bool {
        if self.scene != Scene::Table || !self.table.legal_actions_at(self.focus).raise {
            return false;
        }
        self.entry = Some(Entry::Raise { amount: self.table.min_raise().to_decimal_string() });
        self.entry_error = None;
        true
    }

    fn open_add_player(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        self.entry = Some(Entry::AddPlayer {
            name: String::new(),
            buy_in: String::new(),
            field: PlayerField::Name,
        });
        self.entry_error = None;
        true
    }

    fn entry_push(&mut self, c: char) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        let buf = match entry {
            Entry::Raise { amount } => {
                if !(c.is_ascii_digit() || c == '.') {
                    return;
                }
                amount
            }
            Entry::AddPlayer { name, field: PlayerField::Name, .. } => {
                if c.is_control() {
                    return;
                }
                name
            }
            Entry::AddPlayer { buy_in, field: PlayerField::BuyIn, .. } => {
                if !(c.is_ascii_digit() || c == '.' || c == ',') {
                    return;
                }
                buy_in
            }
        };
        if buf.chars().count() < Self::ENTRY_MAX_LEN {
            buf.push(c);
        }
        self.entry_error = None;
    }

    fn entry_backspace(&mut self) {
        match self.entry.as_mut() {
            Some(Entry::Raise { amount }) => {
                amount.pop();
            }
            Some(Entry::AddPlayer { name, field: PlayerField::Name, .. }) => {
                name.pop();
            }
            Some(Entry::AddPlayer { buy_in, field: PlayerField::BuyIn, .. }) => {
                buy_in.pop();
            }
            None => {}
        }
        self.entry_error = None;
    }

    fn entry_next_field(&mut self) {
        if let Some(Entry::AddPlayer { field, .. }) = self.entry.as_mut() {
            *field = match field {
                PlayerField::Name => PlayerField::BuyIn,
                PlayerField::BuyIn => PlayerField::Name,
            };
        }
    }

    /// Steps the raise amount by one minimum raise.
    fn entry_adjust(&mut self, up: bool) {
        let step = self.table.min_raise();
        if let Some(Entry::Raise { amount }) = self.entry.as_mut() {
            let cur = amount.parse::<Chips>().unwrap_or(Chips::ZERO);
            let next = if up { cur + step } else { cur.saturating_sub(step).max(step) };
            *amount = next.to_decimal_string();
        }
        self.entry_error = None;
    }

    fn entry_submit(&mut self) -> bool {
        match self.entry.clone() {
            Some(Entry::Raise { amount }) => self.submit_raise(&amount),
            Some(Entry::AddPlayer { name, buy_in, .. }) => self.submit_player(&name, &buy_in),
            None => false,
        }
    }

    fn submit_raise(&mut self, raw: &str) -> bool {
        let amount = match raw.parse::<Chips>() {
            Ok(v) => v,
            Err(err) => {
                self.entry_error = Some(err.to_string());
                return false;
            }
        };
        let min = self.table.min_raise();
        if amount < min {
            self.entry_error = Some(format!("Min raise is {min}"));
            return false;
        }
        if self.act(Command::Raise(amount)) {
            self.entry = None;
            self.entry_error = None;
            return true;
        }
        self.entry_error = self.notice().map(|(text, _)| text.to_string());
        false
    }

    fn submit_player(&mut self, name: &str, buy_in: &str) -> bool {
        let names: Vec<&str> = self.table.players().iter().map(|p| p.name()).collect();
        let player = match registration::validate_player(name, buy_in, &names) {
            Ok(p) => p,
            Err(err) => {
                self.entry_error = Some(err.to_string());
                return false;
            }
        };
        match self.engine().add_player(&player.name, player.buy_in) {
            Ok(seat) => {
                let note = if self.table.players()[seat].folded() {
                    format!("{} joins next hand", player.name)
                } else {
                    format!("{} seated with {}", player.name, player.buy_in)
                };
                self.set_notice(note, false);
                self.focus = self.table.turn();
                self.entry = None;
                self.entry_error = None;
                true
            }
            Err(err) => {
                self.entry_error = Some(err.to_string());
                false
            }
        }
    }

    fn entry_cancel(&mut self) {
        self.entry = None;
        self.entry_error = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.table.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::PostBlind => self.act(Command::PostBlind),
            InputAction::Check => self.act(Command::Check),
            InputAction::Call => self.act(Command::Call),
            InputAction::AllIn => self.act(Command::AllIn),
            InputAction::Fold => self.act(Command::Fold),
            InputAction::RaiseOpen => self.open_raise_entry(),
            InputAction::ToggleWinner => {
                if self.scene == Scene::Table {
                    self.toggle_winner();
                }
                false
            }
            InputAction::AwardPot => self.scene == Scene::Table && self.award_pot(),
            InputAction::AddPlayerOpen => self.open_add_player(),
            InputAction::EntryChar(c) => {
                self.entry_push(c);
                false
            }
            InputAction::EntryBackspace => {
                self.entry_backspace();
                false
            }
            InputAction::EntryNextField => {
                self.entry_next_field();
                false
            }
            InputAction::EntryInc => {
                self.entry_adjust(true);
                false
            }
            InputAction::EntryDec => {
                self.entry_adjust(false);
                false
            }
            InputAction::EntrySubmit => self.entry_submit(),
            InputAction::EntryCancel => {
                self.entry_cancel();
                false
            }
            InputAction::FocusNext => {
                if self.scene == Scene::Table {
                    self.focus_next();
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Table {
                    self.focus_prev();
                }
                false
            }
            InputAction::FocusSeat(idx) => {
                if self.scene == Scene::Table {
                    self.set_focus(idx);
                }
                false
            }
            InputAction::FocusTurn => {
                if self.scene == Scene::Table {
                    self.focus = self.table.turn();
                }
                false
            }
        }
    }

    pub fn focus_next(&mut self) {
        if self.table.players().is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.table.players().len();
    }

    pub fn focus_prev(&mut self) {
        if self.table.players().is_empty() {
            return;
        }
        let n = self.table.players().len();
        self.focus = (self.focus + n - 1) % n;
    }

    pub fn set_focus(&mut self, idx: usize) {
        let n = self.table.players().len();
        if idx < n {
            self.focus = idx;
        }
    }

    /// Periodic housekeeping: expires old notices.
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.at.elapsed() >= Self::NOTICE_TTL {
                self.clear_notice();
            }
        }
    }
}
