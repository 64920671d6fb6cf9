//! Launcher menu

/// What a menu entry does when confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartTetris,
    Quit,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

/// Menu state
#[derive(Debug, Clone)]
pub struct Menu {
    pub selected: usize,
    pub items: Vec<MenuItem>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        Self {
            selected: 0,
            items: vec![
                MenuItem {
                    label: "Tetris",
                    action: MenuAction::StartTetris,
                },
                MenuItem {
                    label: "Quit",
                    action: MenuAction::Quit,
                },
            ],
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn select(&self) -> Option<MenuAction> {
        self.items.get(self.selected).map(|item| item.action)
    }
}
