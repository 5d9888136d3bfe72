use crate::chips::Chips;
use crate::table::BlindsUpdate;

use super::{AppState, Scene};

const BLIND_STEP: Chips = Chips::from_cents(25);

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    SmallBlind,
    BigBlind,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::SmallBlind, MenuItem::BigBlind];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::SmallBlind => format!("Small Blind: {}", app.cfg_small_blind),
            MenuItem::BigBlind => format!("Big Blind: {}", app.cfg_big_blind),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::SmallBlind => {
                app.cfg_small_blind += BLIND_STEP;
                if app.cfg_big_blind < app.cfg_small_blind {
                    app.cfg_big_blind = app.cfg_small_blind;
                }
            }
            MenuItem::BigBlind => {
                app.cfg_big_blind += BLIND_STEP;
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::SmallBlind => {
                let lowered = app.cfg_small_blind.saturating_sub(BLIND_STEP);
                app.cfg_small_blind = lowered.max(BLIND_STEP);
            }
            MenuItem::BigBlind => {
                app.cfg_big_blind = app.cfg_big_blind.saturating_sub(BLIND_STEP).max(BLIND_STEP);
                if app.cfg_big_blind < app.cfg_small_blind {
                    app.cfg_small_blind = app.cfg_big_blind;
                }
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        if self.scene == Scene::Menu {
            self.cancel_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        let (small, big) = self
            .table
            .pending_blinds()
            .unwrap_or((self.table.small_blind(), self.table.big_blind()));
        self.cfg_small_blind = small;
        self.cfg_big_blind = big;
        self.scene = Scene::Menu;
    }

    /// Hands the edited blinds to the table; mid-hand they wait for the next deal.
    pub fn apply_menu(&mut self) {
        let (small, big) = (self.cfg_small_blind, self.cfg_big_blind);
        match self.engine().set_blinds(small, big) {
            Ok(BlindsUpdate::Applied) => {
                let text = format!("Blinds now {}/{}", self.cfg_small_blind, self.cfg_big_blind);
                self.set_notice(text, false);
            }
            Ok(BlindsUpdate::Deferred) => {
                let text = format!(
                    "Blinds {}/{} start next hand",
                    self.cfg_small_blind, self.cfg_big_blind
                );
                self.set_notice(text, false);
            }
            Err(err) => {
                self.set_notice(err.to_string(), true);
                return;
            }
        }
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
