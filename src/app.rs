use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::demo;
use crate::form::{FormField, TeamDraft};
use crate::ranking::{RankedTeam, rank_teams};
use crate::state::{Action, TeamId, TeamStore, apply_action};

const MAX_LOGS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Board,
}

pub struct App {
    pub config: Config,
    pub store: TeamStore,
    pub ranking: Vec<RankedTeam>,
    pub draft: TeamDraft,
    pub focus: Focus,
    pub selected: usize,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            config,
            store: TeamStore::new(),
            ranking: Vec::new(),
            draft: TeamDraft::new(),
            focus: Focus::Form,
            selected: 0,
            logs: VecDeque::new(),
            help_overlay: false,
            should_quit: false,
        };
        if app.config.demo {
            let store = std::mem::take(&mut app.store);
            app.store = demo::seed_demo_teams(store);
            app.refresh_ranking(None);
            app.push_log(format!("[INFO] Seeded {} demo teams", app.store.len()));
        }
        app
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.help_overlay = false;
            }
            return;
        }
        match self.focus {
            Focus::Form => self.on_form_key(key),
            Focus::Board => self.on_board_key(key),
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_draft(),
            KeyCode::Esc => self.focus = Focus::Board,
            KeyCode::Tab => {
                let leaving = self.draft.field == FormField::Score;
                self.draft.focus_next();
                if leaving {
                    self.focus = Focus::Board;
                }
            }
            KeyCode::BackTab => self.draft.focus_prev(),
            KeyCode::Backspace => self.draft.backspace(),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.draft.push_char(ch)
            }
            _ => {}
        }
    }

    fn on_board_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::Increment(id));
                }
            }
            KeyCode::Char('-') | KeyCode::Left => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::Decrement(id));
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::Delete(id));
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => self.focus = Focus::Form,
            KeyCode::Char('?') => self.help_overlay = true,
            _ => {}
        }
    }

    fn submit_draft(&mut self) {
        let Some(new_team) = self.draft.submit() else {
            return;
        };
        self.dispatch(Action::Add {
            name: new_team.name,
            code: new_team.code,
            score: new_team.score,
        });
    }

    /// Applies one store action, then re-derives the ranking from the new
    /// snapshot.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.store.clone();
        let added_id = self.store.peek_next_id();
        let store = std::mem::take(&mut self.store);
        self.store = apply_action(store, action.clone());

        if self.store == before {
            return;
        }

        let anchor = match &action {
            Action::Add { .. } => Some(added_id),
            Action::Delete(_) => None,
            Action::SetScore { id, .. } | Action::Increment(id) | Action::Decrement(id) => {
                Some(*id)
            }
        };
        self.refresh_ranking(anchor);
        self.log_action(&before, &action, added_id);
    }

    /// Recomputes the ranking. Selection moves to `anchor` when given,
    /// otherwise it is clamped to the new row count.
    pub fn refresh_ranking(&mut self, anchor: Option<TeamId>) {
        self.ranking = rank_teams(&self.store);
        if let Some(id) = anchor
            && let Some(pos) = self.ranking.iter().position(|row| row.id() == id)
        {
            self.selected = pos;
            return;
        }
        self.clamp_selection();
    }

    fn log_action(&mut self, before: &TeamStore, action: &Action, added_id: TeamId) {
        let msg = match action {
            Action::Add { .. } => match self.store.get(added_id) {
                Some(team) => format!("[INFO] Added {} ({}) at {}", team.name, team.code, team.score),
                None => return,
            },
            Action::Delete(id) => match before.get(*id) {
                Some(team) => format!("[INFO] Deleted {} ({})", team.name, team.code),
                None => return,
            },
            Action::SetScore { id, .. } | Action::Increment(id) | Action::Decrement(id) => {
                match (before.get(*id), self.store.get(*id)) {
                    (Some(old), Some(new)) => {
                        format!("[INFO] {} score {} -> {}", new.name, old.score, new.score)
                    }
                    _ => return,
                }
            }
        };
        self.push_log(msg);
    }

    pub fn selected_team(&self) -> Option<&RankedTeam> {
        self.ranking.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<TeamId> {
        self.selected_team().map(RankedTeam::id)
    }

    pub fn select_next(&mut self) {
        let total = self.ranking.len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.ranking.len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.ranking.len();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.logs.push_back(format!("{stamp} {}", msg.into()));
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}
