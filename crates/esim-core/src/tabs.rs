//! Tab bar state
//!
//! A fixed, ordered list of tabs. The current route is the only source of
//! truth for which tab is active; activating a tab pulses the haptics motor
//! and navigates.

use std::collections::HashSet;

use crate::error::{ShopError, ShopResult};
use crate::haptics::{HapticPattern, Haptics};

/// Icon shown in a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIcon {
    Globe,
    Sim,
    User,
}

/// One entry in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: &'static str,
    pub icon: TabIcon,
    pub label: &'static str,
    pub route: &'static str,
}

/// Tabs shown at the bottom of the shop
pub const DEFAULT_TABS: [TabDescriptor; 3] = [
    TabDescriptor {
        id: "shop",
        icon: TabIcon::Globe,
        label: "Shop",
        route: "/",
    },
    TabDescriptor {
        id: "esims",
        icon: TabIcon::Sim,
        label: "My eSIMs",
        route: "/esims",
    },
    TabDescriptor {
        id: "profile",
        icon: TabIcon::User,
        label: "Profile",
        route: "/profile",
    },
];

/// Readable and settable current route
pub trait Router {
    fn current_route(&self) -> String;
    fn navigate(&mut self, route: &str);
}

/// Maps routes to tab state
#[derive(Debug, Clone, PartialEq)]
pub struct TabBar {
    tabs: Vec<TabDescriptor>,
}

impl Default for TabBar {
    fn default() -> Self {
        Self {
            tabs: DEFAULT_TABS.to_vec(),
        }
    }
}

impl TabBar {
    /// Build a tab bar, rejecting duplicate ids or routes
    pub fn new(tabs: Vec<TabDescriptor>) -> ShopResult<Self> {
        let mut ids = HashSet::new();
        let mut routes = HashSet::new();
        for tab in &tabs {
            if !ids.insert(tab.id) {
                return Err(ShopError::DuplicateTab(tab.id.to_string()));
            }
            if !routes.insert(tab.route) {
                return Err(ShopError::DuplicateTab(tab.route.to_string()));
            }
        }
        Ok(Self { tabs })
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// The tab whose route exactly equals `route`
    pub fn active(&self, route: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.route == route)
    }

    pub fn is_active(&self, id: &str, route: &str) -> bool {
        self.active(route).is_some_and(|tab| tab.id == id)
    }

    /// Pulse haptics and navigate to the tab's route
    pub fn activate(
        &self,
        id: &str,
        router: &mut dyn Router,
        haptics: &dyn Haptics,
    ) -> ShopResult<&TabDescriptor> {
        let tab = self
            .tabs
            .iter()
            .find(|tab| tab.id == id)
            .ok_or_else(|| ShopError::UnknownTab(id.to_string()))?;

        haptics.pulse(HapticPattern::Selection);
        tracing::debug!(tab = tab.id, route = tab.route, "Tab activated");
        router.navigate(tab.route);
        Ok(tab)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct MemoryRouter {
        route: String,
        history: Vec<String>,
    }

    impl MemoryRouter {
        fn at(route: &str) -> Self {
            Self {
                route: route.to_string(),
                history: Vec::new(),
            }
        }
    }

    impl Router for MemoryRouter {
        fn current_route(&self) -> String {
            self.route.clone()
        }

        fn navigate(&mut self, route: &str) {
            self.history.push(route.to_string());
            self.route = route.to_string();
        }
    }

    #[derive(Default)]
    struct RecordingHaptics {
        pulses: RefCell<Vec<HapticPattern>>,
    }

    impl Haptics for RecordingHaptics {
        fn pulse(&self, pattern: HapticPattern) {
            self.pulses.borrow_mut().push(pattern);
        }
    }

    #[test]
    fn exactly_one_tab_active_on_match() {
        let bar = TabBar::default();
        for tab in bar.tabs() {
            let active: Vec<_> = bar
                .tabs()
                .iter()
                .filter(|t| bar.is_active(t.id, tab.route))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].id, tab.id);
        }
    }

    #[test]
    fn no_tab_active_on_other_routes() {
        let bar = TabBar::default();
        for route in ["/country/JP", "/esims/", "", "/PROFILE", "/profile?x=1"] {
            assert!(bar.active(route).is_none(), "{route} should match nothing");
            assert!(bar.tabs().iter().all(|t| !bar.is_active(t.id, route)));
        }
    }

    #[test]
    fn activate_pulses_and_navigates() {
        let bar = TabBar::default();
        let mut router = MemoryRouter::at("/");
        let haptics = RecordingHaptics::default();

        let tab = bar.activate("profile", &mut router, &haptics).unwrap();
        assert_eq!(tab.route, "/profile");
        assert_eq!(router.current_route(), "/profile");
        assert_eq!(router.history, vec!["/profile"]);
        assert_eq!(*haptics.pulses.borrow(), vec![HapticPattern::Selection]);
        assert!(bar.is_active("profile", &router.current_route()));
    }

    #[test]
    fn activate_unknown_tab() {
        let bar = TabBar::default();
        let mut router = MemoryRouter::at("/");
        let haptics = RecordingHaptics::default();

        let err = bar.activate("cart", &mut router, &haptics).unwrap_err();
        assert!(matches!(err, ShopError::UnknownTab(_)));
        assert!(router.history.is_empty());
        assert!(haptics.pulses.borrow().is_empty());
    }

    #[test]
    fn navigation_works_without_haptics() {
        let bar = TabBar::default();
        let mut router = MemoryRouter::at("/profile");
        bar.activate("shop", &mut router, &crate::haptics::NoHaptics)
            .unwrap();
        assert_eq!(router.current_route(), "/");
    }

    #[test]
    fn rejects_duplicates() {
        let mut tabs = DEFAULT_TABS.to_vec();
        tabs.push(TabDescriptor {
            id: "shop",
            icon: TabIcon::Globe,
            label: "Again",
            route: "/again",
        });
        assert!(matches!(TabBar::new(tabs), Err(ShopError::DuplicateTab(_))));

        let mut tabs = DEFAULT_TABS.to_vec();
        tabs.push(TabDescriptor {
            id: "other",
            icon: TabIcon::Globe,
            label: "Other",
            route: "/",
        });
        assert!(matches!(TabBar::new(tabs), Err(ShopError::DuplicateTab(_))));
    }
}
