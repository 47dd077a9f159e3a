use serde::Serialize;

use crate::screens::Screen;
use crate::stack::{self, StackNavigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconFamily {
    Ionicons,
    MaterialIcons,
    FontAwesome5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub family: IconFamily,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TabTarget {
    Stack(&'static StackNavigator),
    Screen(Screen),
}

impl TabTarget {
    pub fn initial_screen(&self) -> Screen {
        match self {
            TabTarget::Stack(nav) => nav.initial_route().screen,
            TabTarget::Screen(screen) => *screen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub name: &'static str,
    pub target: TabTarget,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabBarStyle {
    pub padding_bottom: u16,
    pub padding_top: u16,
    pub height: u16,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TabNavigator {
    pub name: &'static str,
    pub header_shown: bool,
    pub active_tint: &'static str,
    pub inactive_tint: &'static str,
    pub style: TabBarStyle,
    pub tabs: &'static [Tab],
}

impl TabNavigator {
    pub fn tint(&self, focused: bool) -> &'static str {
        if focused {
            self.active_tint
        } else {
            self.inactive_tint
        }
    }

    pub fn tab(&self, name: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.name == name)
    }

    pub fn tab_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tabs.iter().map(|t| t.name)
    }

    // A tab name selects the tab's first screen. Other names are searched
    // in the tab stacks, first tab wins.
    pub fn resolve(&self, route: &str) -> Option<Screen> {
        if let Some(tab) = self.tab(route) {
            return Some(tab.target.initial_screen());
        }
        self.tabs.iter().find_map(|t| match t.target {
            TabTarget::Stack(nav) => nav.resolve(route),
            TabTarget::Screen(_) => None,
        })
    }
}

pub const MAIN: TabNavigator = TabNavigator {
    name: "MainApp",
    header_shown: false,
    active_tint: "#4361ee",
    inactive_tint: "#8d99ae",
    style: TabBarStyle {
        padding_bottom: 5,
        padding_top: 5,
        height: 60,
    },
    tabs: &[
        Tab {
            name: "Home",
            target: TabTarget::Stack(&stack::HOME),
            icon: Icon {
                family: IconFamily::Ionicons,
                glyph: "home",
            },
        },
        Tab {
            name: "Matches",
            target: TabTarget::Stack(&stack::MATCHES),
            icon: Icon {
                family: IconFamily::MaterialIcons,
                glyph: "sports-esports",
            },
        },
        Tab {
            name: "Teams",
            target: TabTarget::Stack(&stack::TEAMS),
            icon: Icon {
                family: IconFamily::FontAwesome5,
                glyph: "users",
            },
        },
        Tab {
            name: "Store",
            target: TabTarget::Screen(Screen::Store),
            icon: Icon {
                family: IconFamily::FontAwesome5,
                glyph: "shopping-cart",
            },
        },
        Tab {
            name: "Profile",
            target: TabTarget::Stack(&stack::PROFILE),
            icon: Icon {
                family: IconFamily::FontAwesome5,
                glyph: "user",
            },
        },
    ],
};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tab_order() {
        assert_eq!(
            MAIN.tab_names().collect::<Vec<_>>(),
            vec!["Home", "Matches", "Teams", "Store", "Profile"]
        );
        let initial = MAIN
            .tabs
            .iter()
            .map(|t| t.target.initial_screen())
            .collect::<Vec<_>>();
        assert_eq!(
            initial,
            vec![
                Screen::Home,
                Screen::RegisteredMatches,
                Screen::Teams,
                Screen::Store,
                Screen::Profile
            ]
        );
    }

    #[test]
    fn test_tint() {
        assert_eq!(MAIN.tint(true), "#4361ee");
        assert_eq!(MAIN.tint(false), "#8d99ae");
    }

    #[test]
    fn test_icons() {
        let store = MAIN.tab("Store").expect("Store tab is missing");
        assert_eq!(store.icon.family, IconFamily::FontAwesome5);
        assert_eq!(store.icon.glyph, "shopping-cart");
        let matches = MAIN.tab("Matches").expect("Matches tab is missing");
        assert_eq!(matches.icon.family, IconFamily::MaterialIcons);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(MAIN.resolve("Store"), Some(Screen::Store));
        assert_eq!(MAIN.resolve("Profile"), Some(Screen::Profile));
        assert_eq!(MAIN.resolve("Wallet"), Some(Screen::Wallet));
        assert_eq!(MAIN.resolve("LiveMatch"), Some(Screen::LiveMatch));
        assert_eq!(MAIN.resolve("MatchDetails"), Some(Screen::MatchDetails));
        assert_eq!(MAIN.resolve("AdminDashboard"), None);
        assert_eq!(MAIN.resolve("Login"), None);
    }
}
