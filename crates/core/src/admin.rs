//! Admin/debug toggles, independent of the round state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdminState {
    is_enabled: bool,
    show_answers: bool,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Whether the current answer is exposed outside normal game flow.
    pub fn show_answers(&self) -> bool {
        self.show_answers
    }

    pub fn toggle_admin(&mut self) {
        self.is_enabled = !self.is_enabled;
    }

    pub fn toggle_show_answers(&mut self) {
        self.show_answers = !self.show_answers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_independent() {
        let mut admin = AdminState::new();
        assert!(!admin.is_enabled());
        assert!(!admin.show_answers());

        admin.toggle_admin();
        assert!(admin.is_enabled());
        assert!(!admin.show_answers());

        admin.toggle_show_answers();
        admin.toggle_admin();
        assert!(!admin.is_enabled());
        assert!(admin.show_answers());
    }
}
