//! Highlight tracking for menus and the card grid.
//!
//! The cursor is frontend state only; the session never sees it. On the card
//! grid it moves in 2D and wraps around each edge.

use crate::core::GameSnapshot;
use crate::map::InputCommand;
use crate::types::{CardId, Difficulty, GameAction, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    menu_index: usize,
    card: usize,
    stage: Stage,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted menu entry (difficulty or category list).
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Highlighted card on the grid.
    pub fn card(&self) -> CardId {
        self.card as CardId
    }

    /// Apply a command against the current screen.
    ///
    /// Returns the game action to send to the session, if any.
    pub fn apply(
        &mut self,
        cmd: InputCommand,
        snap: &GameSnapshot,
        categories: &[String],
    ) -> Option<GameAction> {
        self.sync_stage(snap.stage);

        if cmd == InputCommand::Reset {
            return Some(GameAction::Reset);
        }

        match snap.stage {
            Stage::ChoosingDifficulty => {
                let entries = Difficulty::ALL.len();
                self.menu(cmd, entries)
                    .map(|i| GameAction::ChooseDifficulty(Difficulty::ALL[i]))
            }
            Stage::ChoosingCategory => self
                .menu(cmd, categories.len())
                .map(|i| GameAction::ChooseCategory(categories[i].clone())),
            Stage::Playing => self.grid(cmd, snap),
            Stage::Finished => match cmd {
                InputCommand::Select => Some(GameAction::Reset),
                _ => None,
            },
        }
    }

    /// Reset the highlight when the screen changes.
    pub fn sync_stage(&mut self, stage: Stage) {
        if stage != self.stage {
            self.stage = stage;
            self.menu_index = 0;
            if stage == Stage::Playing {
                self.card = 0;
            }
        }
    }

    /// Move within a vertical list; returns the chosen index on confirm.
    fn menu(&mut self, cmd: InputCommand, entries: usize) -> Option<usize> {
        if entries == 0 {
            return None;
        }
        self.menu_index = self.menu_index.min(entries - 1);
        match cmd {
            InputCommand::Up | InputCommand::Left => {
                self.menu_index = (self.menu_index + entries - 1) % entries;
                None
            }
            InputCommand::Down | InputCommand::Right => {
                self.menu_index = (self.menu_index + 1) % entries;
                None
            }
            InputCommand::Select => Some(self.menu_index),
            InputCommand::Pick(n) => {
                let i = (n as usize).checked_sub(1)?;
                if i < entries {
                    self.menu_index = i;
                    Some(i)
                } else {
                    None
                }
            }
            InputCommand::Reset => None,
        }
    }

    fn grid(&mut self, cmd: InputCommand, snap: &GameSnapshot) -> Option<GameAction> {
        let len = snap.cards.len();
        let cols = snap.columns as usize;
        if len == 0 || cols == 0 {
            return None;
        }
        let rows = snap.rows();
        self.card = self.card.min(len - 1);

        let (mut x, mut y) = (self.card % cols, self.card / cols);
        match cmd {
            InputCommand::Left => x = (x + cols - 1) % cols,
            InputCommand::Right => x = (x + 1) % cols,
            InputCommand::Up => y = (y + rows - 1) % rows,
            InputCommand::Down => y = (y + 1) % rows,
            InputCommand::Select => return Some(GameAction::SelectCard(self.card as CardId)),
            InputCommand::Pick(_) | InputCommand::Reset => return None,
        }
        self.card = (y * cols + x).min(len - 1);
        None
    }
}
