use serde::Serialize;

use crate::screens::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub name: &'static str,
    pub screen: Screen,
}

const fn route(name: &'static str, screen: Screen) -> Route {
    Route { name, screen }
}

/// An ordered screen stack. The first route is the one shown on mount.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StackNavigator {
    pub name: &'static str,
    pub header_shown: bool,
    pub routes: &'static [Route],
}

impl StackNavigator {
    pub fn resolve(&self, name: &str) -> Option<Screen> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.screen)
    }

    pub fn initial_route(&self) -> &Route {
        // Every navigator below is declared with at least one route.
        &self.routes[0]
    }

    pub fn route_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|r| r.name)
    }
}

pub const AUTH: StackNavigator = StackNavigator {
    name: "Auth",
    header_shown: false,
    routes: &[
        route("Splash", Screen::Splash),
        route("Login", Screen::Login),
        route("Signup", Screen::Signup),
    ],
};

pub const HOME: StackNavigator = StackNavigator {
    name: "HomeStack",
    header_shown: false,
    routes: &[
        route("HomeScreen", Screen::Home),
        route("GameSelection", Screen::GameSelection),
        route("TournamentList", Screen::TournamentList),
        route("TournamentDetails", Screen::TournamentDetails),
        route("Register", Screen::Register),
        route("MatchDetails", Screen::MatchDetails),
    ],
};

pub const MATCHES: StackNavigator = StackNavigator {
    name: "MatchesStack",
    header_shown: false,
    routes: &[
        route("RegisteredMatches", Screen::RegisteredMatches),
        route("MatchDetails", Screen::MatchDetails),
        route("MatchSchedule", Screen::MatchSchedule),
        route("LobbyDetails", Screen::LobbyDetails),
        route("LiveMatch", Screen::LiveMatch),
        route("Leaderboard", Screen::Leaderboard),
        route("TournamentResults", Screen::TournamentResults),
    ],
};

pub const TEAMS: StackNavigator = StackNavigator {
    name: "TeamsStack",
    header_shown: false,
    routes: &[
        route("TeamsMain", Screen::Teams),
        route("TeamManagement", Screen::TeamManagement),
        route("CreateTeam", Screen::CreateTeam),
        route("TeamChat", Screen::TeamChat),
    ],
};

pub const PROFILE: StackNavigator = StackNavigator {
    name: "ProfileStack",
    header_shown: false,
    routes: &[
        route("ProfileMain", Screen::Profile),
        route("Wallet", Screen::Wallet),
        route("Withdrawal", Screen::Withdrawal),
        route("Settings", Screen::Settings),
        route("Notifications", Screen::Notifications),
        route("PrivacySecurity", Screen::PrivacySecurity),
        route("HelpSupport", Screen::HelpSupport),
    ],
};

pub const ADMIN: StackNavigator = StackNavigator {
    name: "AdminStack",
    header_shown: false,
    routes: &[
        route("AdminDashboard", Screen::AdminDashboard),
        route("TournamentManagement", Screen::TournamentManagement),
        route("UserManagement", Screen::UserManagement),
        route("Advertisement", Screen::Advertisement),
    ],
};

pub const ALL: [&StackNavigator; 6] = [&AUTH, &HOME, &MATCHES, &TEAMS, &PROFILE, &ADMIN];

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_names_unique_per_navigator() {
        for nav in ALL {
            let names = nav.route_names().collect::<HashSet<_>>();
            assert_eq!(
                names.len(),
                nav.routes.len(),
                "Duplicate route name in {}",
                nav.name
            );
            assert!(!nav.header_shown);
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(AUTH.resolve("Login"), Some(Screen::Login));
        assert_eq!(AUTH.initial_route().screen, Screen::Splash);
        assert_eq!(HOME.resolve("HomeScreen"), Some(Screen::Home));
        assert_eq!(TEAMS.resolve("TeamsMain"), Some(Screen::Teams));
        assert_eq!(PROFILE.resolve("HelpSupport"), Some(Screen::HelpSupport));
        assert_eq!(ADMIN.resolve("Advertisement"), Some(Screen::Advertisement));
        assert_eq!(ADMIN.resolve("Wallet"), None);
        // Shared between the home and matches stacks.
        assert_eq!(HOME.resolve("MatchDetails"), Some(Screen::MatchDetails));
        assert_eq!(MATCHES.resolve("MatchDetails"), Some(Screen::MatchDetails));
    }

    #[test]
    fn test_store_is_not_in_any_stack() {
        let stacked = ALL
            .iter()
            .flat_map(|n| n.routes.iter().map(|r| r.screen))
            .collect::<HashSet<_>>();
        let unstacked = Screen::ALL
            .iter()
            .filter(|s| !stacked.contains(s))
            .collect::<Vec<_>>();
        assert_eq!(unstacked, vec![&Screen::Store]);
    }
}
