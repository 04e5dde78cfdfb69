//! Page header state machine
//!
//! Two independent axes: the scroll axis switches the header between a
//! transparent and an opaque background, the menu axis opens and closes the
//! mobile navigation. Everything here is pure so it can be driven from
//! browser events or from tests alike.

/// Scroll offset (in CSS pixels) the page must exceed before the header turns opaque
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Media query matching the wide (desktop) layout; below it the mobile menu is used
pub const WIDE_LAYOUT_QUERY: &str = "(min-width: 768px)";

/// Input events for [`HeaderState::next`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderEvent {
    /// Vertical scroll offset of the page
    Scrolled(f64),
    /// The menu button was pressed
    ToggleMenu,
    /// A navigation link was followed
    NavSelected,
    /// The viewport crossed the mobile/desktop breakpoint
    LayoutChanged { compact: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub compact_layout: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            compact_layout: true,
        }
    }
}

/// Which glyph the menu button shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

/// Render-ready view of a [`HeaderState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderPresentation {
    pub header_class: &'static str,
    pub toggle_icon: MenuIcon,
    pub show_mobile_nav: bool,
}

#[cfg(test)]
const HEADER_BASE: &str = "fixed w-full transition-all duration-300 z-50";
const HEADER_OPAQUE: &str = "fixed w-full transition-all duration-300 z-50 bg-purple-900 shadow-lg";
const HEADER_TRANSPARENT: &str = "fixed w-full transition-all duration-300 z-50 bg-transparent";

impl HeaderState {
    /// Compute the state that follows `event`
    pub fn next(self, event: HeaderEvent) -> HeaderState {
        match event {
            HeaderEvent::Scrolled(offset) if offset.is_finite() => HeaderState {
                scrolled: offset > SCROLL_THRESHOLD,
                ..self
            },
            HeaderEvent::Scrolled(_) => self,
            HeaderEvent::ToggleMenu if self.compact_layout => HeaderState {
                menu_open: !self.menu_open,
                ..self
            },
            HeaderEvent::ToggleMenu => self,
            HeaderEvent::NavSelected => HeaderState {
                menu_open: false,
                ..self
            },
            HeaderEvent::LayoutChanged { compact } => HeaderState {
                compact_layout: compact,
                menu_open: self.menu_open && compact,
                ..self
            },
        }
    }

    /// Apply a sequence of events in order
    pub fn replay<I>(self, events: I) -> HeaderState
    where
        I: IntoIterator<Item = HeaderEvent>,
    {
        events.into_iter().fold(self, HeaderState::next)
    }

    pub fn presentation(&self) -> HeaderPresentation {
        HeaderPresentation {
            header_class: if self.scrolled {
                HEADER_OPAQUE
            } else {
                HEADER_TRANSPARENT
            },
            toggle_icon: if self.menu_open {
                MenuIcon::Close
            } else {
                MenuIcon::Menu
            },
            show_mobile_nav: self.menu_open && self.compact_layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = HeaderState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
        assert_eq!(state.presentation().toggle_icon, MenuIcon::Menu);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let state = HeaderState::default();
        assert!(!state.next(HeaderEvent::Scrolled(0.0)).scrolled);
        assert!(!state.next(HeaderEvent::Scrolled(49.0)).scrolled);
        assert!(!state.next(HeaderEvent::Scrolled(50.0)).scrolled);
        assert!(state.next(HeaderEvent::Scrolled(51.0)).scrolled);
        assert!(state.next(HeaderEvent::Scrolled(50.5)).scrolled);
    }

    #[test]
    fn test_scroll_back_up_turns_transparent() {
        let state = HeaderState::default().replay([
            HeaderEvent::Scrolled(0.0),
            HeaderEvent::Scrolled(51.0),
            HeaderEvent::Scrolled(10.0),
        ]);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_non_finite_offset_is_ignored() {
        let scrolled = HeaderState::default().next(HeaderEvent::Scrolled(120.0));
        assert!(scrolled.next(HeaderEvent::Scrolled(f64::NAN)).scrolled);
        assert!(scrolled.next(HeaderEvent::Scrolled(f64::INFINITY)).scrolled);
    }

    #[test]
    fn test_header_class_follows_scroll() {
        let transparent = HeaderState::default().presentation().header_class;
        let opaque = HeaderState::default()
            .next(HeaderEvent::Scrolled(200.0))
            .presentation()
            .header_class;

        assert!(transparent.starts_with(HEADER_BASE));
        assert!(transparent.contains("bg-transparent"));
        assert!(opaque.starts_with(HEADER_BASE));
        assert!(opaque.contains("bg-purple-900"));
        assert!(!opaque.contains("bg-transparent"));
    }

    #[test]
    fn test_toggle_opens_and_nav_closes() {
        let open = HeaderState::default().next(HeaderEvent::ToggleMenu);
        assert!(open.menu_open);
        assert!(open.presentation().show_mobile_nav);
        assert_eq!(open.presentation().toggle_icon, MenuIcon::Close);

        let closed = open.next(HeaderEvent::NavSelected);
        assert!(!closed.menu_open);
        assert!(!closed.presentation().show_mobile_nav);
    }

    #[test]
    fn test_toggle_twice_closes() {
        let state = HeaderState::default().replay([HeaderEvent::ToggleMenu, HeaderEvent::ToggleMenu]);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_nav_selected_when_closed_stays_closed() {
        let state = HeaderState::default().next(HeaderEvent::NavSelected);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_menu_cannot_open_on_wide_layout() {
        let state = HeaderState::default().replay([
            HeaderEvent::LayoutChanged { compact: false },
            HeaderEvent::ToggleMenu,
        ]);
        assert!(!state.menu_open);
        assert!(!state.presentation().show_mobile_nav);
    }

    #[test]
    fn test_widening_layout_closes_menu() {
        let state = HeaderState::default().replay([
            HeaderEvent::ToggleMenu,
            HeaderEvent::LayoutChanged { compact: false },
            HeaderEvent::LayoutChanged { compact: true },
        ]);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_axes_are_independent() {
        let state = HeaderState::default().replay([
            HeaderEvent::ToggleMenu,
            HeaderEvent::Scrolled(300.0),
        ]);
        assert!(state.menu_open);
        assert!(state.scrolled);

        let state = state.next(HeaderEvent::NavSelected);
        assert!(state.scrolled);
        assert!(!state.menu_open);
    }
}
