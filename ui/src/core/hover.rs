//! Hover highlight tracking for the desktop navigation group.

/// Which side the highlight should slide in from when it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Nothing was highlighted before; fade in place.
    Appear,
    FromLeft,
    FromRight,
}

impl Slide {
    pub fn css_class(self) -> &'static str {
        match self {
            Slide::Appear => "nav-cover--appear",
            Slide::FromLeft => "nav-cover--from-left",
            Slide::FromRight => "nav-cover--from-right",
        }
    }
}

/// At most one entry is highlighted at a time. `previous` is only used to pick
/// the slide direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    active: Option<usize>,
    previous: Option<usize>,
}

impl HoverState {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn enter(&mut self, index: usize) {
        if self.active == Some(index) {
            return;
        }
        self.previous = self.active;
        self.active = Some(index);
    }

    /// Pointer left the whole menu group.
    pub fn leave(&mut self) {
        self.previous = None;
        self.active = None;
    }

    pub fn slide(&self) -> Slide {
        match (self.previous, self.active) {
            (Some(prev), Some(cur)) if prev < cur => Slide::FromLeft,
            (Some(prev), Some(cur)) if prev > cur => Slide::FromRight,
            _ => Slide::Appear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_highlighted() {
        let state = HoverState::default();
        assert_eq!(state.active(), None);
        assert!(!state.is_highlighted(0));
    }

    #[test]
    fn enter_then_leave_clears() {
        let mut state = HoverState::default();
        state.enter(2);
        assert!(state.is_highlighted(2));
        state.leave();
        assert_eq!(state.active(), None);
    }

    #[test]
    fn moving_between_entries_highlights_exactly_one() {
        let mut state = HoverState::default();
        state.enter(1);
        state.enter(3);
        assert_eq!(state.active(), Some(3));
        assert!(!state.is_highlighted(1));
        assert_eq!((0..5).filter(|i| state.is_highlighted(*i)).count(), 1);
    }

    #[test]
    fn slide_direction_follows_movement() {
        let mut state = HoverState::default();
        state.enter(1);
        assert_eq!(state.slide(), Slide::Appear);
        state.enter(3);
        assert_eq!(state.slide(), Slide::FromLeft);
        state.enter(0);
        assert_eq!(state.slide(), Slide::FromRight);
    }

    #[test]
    fn re_entering_same_entry_keeps_direction() {
        let mut state = HoverState::default();
        state.enter(0);
        state.enter(2);
        state.enter(2);
        assert_eq!(state.slide(), Slide::FromLeft);
    }

    #[test]
    fn leaving_resets_direction() {
        let mut state = HoverState::default();
        state.enter(0);
        state.enter(2);
        state.leave();
        state.enter(1);
        assert_eq!(state.slide(), Slide::Appear);
    }
}
