use content::{ANCHOR_ABOUT, ANCHOR_CONTACT, ANCHOR_EXPERIENCE, ANCHOR_WORK};

// navigation state
//
// two independent pieces: the window's vertical scroll offset, projected on arrival to
// a scrolled/not-scrolled flag, and the mobile drawer.  there is no debounce or
// hysteresis on the flag, it flips on the exact crossing
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Work",
        anchor: ANCHOR_WORK,
    },
    NavItem {
        label: "About",
        anchor: ANCHOR_ABOUT,
    },
    NavItem {
        label: "Experience",
        anchor: ANCHOR_EXPERIENCE,
    },
    NavItem {
        label: "Contact",
        anchor: ANCHOR_CONTACT,
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Drawer {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    drawer: Drawer,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn drawer(&self) -> Drawer {
        self.drawer
    }

    pub fn is_open(&self) -> bool {
        self.drawer == Drawer::Open
    }

    // record a new offset, returning whether the scrolled flag flipped.  offsets on the
    // same side of the threshold leave the state untouched
    pub fn scroll_to(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let flipped = scrolled != self.scrolled;
        self.scrolled = scrolled;
        flipped
    }

    pub fn toggle(&mut self) {
        if !self.close() {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.drawer = Drawer::Open;
    }

    // returns whether anything changed, closing a closed drawer is a no-op
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.drawer = Drawer::Closed;
        was_open
    }

    // following a link from the drawer both navigates and dismisses it
    pub fn activate_link(&mut self) -> bool {
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top_with_drawer_closed() {
        let state = NavState::default();

        assert!(!state.scrolled());
        assert_eq!(state.drawer(), Drawer::Closed);
    }

    #[test]
    fn scrolled_is_strictly_past_threshold() {
        let mut state = NavState::default();

        state.scroll_to(49.0);
        assert!(!state.scrolled());
        state.scroll_to(50.0);
        assert!(!state.scrolled());
        state.scroll_to(51.0);
        assert!(state.scrolled());
        state.scroll_to(50.5);
        assert!(state.scrolled());
    }

    #[test]
    fn scroll_reports_only_flag_flips() {
        let mut state = NavState::default();

        assert!(!state.scroll_to(10.0));
        assert!(!state.scroll_to(50.0));
        assert!(state.scroll_to(51.0));
        assert!(!state.scroll_to(400.0));
        assert!(state.scroll_to(0.0));
    }

    #[test]
    fn scrolling_within_one_side_leaves_state_unchanged() {
        let mut state = NavState::default();
        state.toggle();

        let below = state;
        for offset in [0.0, 12.5, 49.0, 50.0] {
            assert!(!state.scroll_to(offset));
            assert_eq!(state, below);
        }

        assert!(state.scroll_to(51.0));
        let above = state;
        for offset in [51.0, 120.0, 2400.0] {
            assert!(!state.scroll_to(offset));
            assert_eq!(state, above);
        }
    }

    #[test]
    fn open_is_idempotent() {
        let mut state = NavState::default();

        state.open();
        state.open();
        assert!(state.is_open());
        assert!(state.close());
    }

    #[test]
    fn toggle_round_trips() {
        let mut state = NavState::default();

        state.toggle();
        assert_eq!(state.drawer(), Drawer::Open);
        state.toggle();
        assert_eq!(state.drawer(), Drawer::Closed);
    }

    #[test]
    fn link_activation_closes_and_is_idempotent() {
        let mut state = NavState::default();

        state.open();
        assert!(state.is_open());
        assert!(state.activate_link());
        assert_eq!(state.drawer(), Drawer::Closed);

        assert!(!state.activate_link());
        assert_eq!(state.drawer(), Drawer::Closed);
    }

    #[test]
    fn drawer_and_scroll_are_independent() {
        let mut state = NavState::default();

        state.toggle();
        state.scroll_to(300.0);
        assert!(state.is_open());
        assert!(state.scrolled());

        state.close();
        assert!(state.scrolled());
    }

    #[test]
    fn nav_items_point_at_unique_anchors() {
        let anchors: Vec<&str> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        assert_eq!(anchors, vec!["work", "about", "experience", "contact"]);
    }
}
