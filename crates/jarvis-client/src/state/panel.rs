use std::fmt;

/// Which form a panel or submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Login => write!(f, "Login"),
            FormKind::Signup => write!(f, "Signup"),
        }
    }
}

/// Vertical slot a panel is drawn in; the top one is the active form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Top,
    Bottom,
}

/// Login/signup panel switcher.
///
/// Exactly one panel is active at a time. Showing the panel that is already
/// active changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelToggle {
    active: FormKind,
}

impl Default for PanelToggle {
    fn default() -> Self {
        Self {
            active: FormKind::Login,
        }
    }
}

impl PanelToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_login(&mut self) {
        self.show(FormKind::Login);
    }

    pub fn show_signup(&mut self) {
        self.show(FormKind::Signup);
    }

    pub fn show(&mut self, panel: FormKind) {
        if self.active != panel {
            tracing::debug!("Switching to {} panel", panel);
            self.active = panel;
        }
    }

    pub fn active(&self) -> FormKind {
        self.active
    }

    pub fn is_active(&self, panel: FormKind) -> bool {
        self.active == panel
    }

    pub fn placement(&self, panel: FormKind) -> Placement {
        if self.is_active(panel) {
            Placement::Top
        } else {
            Placement::Bottom
        }
    }
}
