use serde::Serialize;

// Views are rendered elsewhere; the registry only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    Splash,
    Login,
    Signup,
    Home,
    GameSelection,
    TournamentList,
    TournamentDetails,
    Register,
    RegisteredMatches,
    MatchDetails,
    MatchSchedule,
    LobbyDetails,
    LiveMatch,
    Leaderboard,
    TournamentResults,
    Profile,
    Wallet,
    Withdrawal,
    Teams,
    TeamManagement,
    CreateTeam,
    TeamChat,
    Store,
    AdminDashboard,
    TournamentManagement,
    UserManagement,
    Advertisement,
    Settings,
    Notifications,
    PrivacySecurity,
    HelpSupport,
}

impl Screen {
    pub const ALL: [Screen; 31] = [
        Screen::Splash,
        Screen::Login,
        Screen::Signup,
        Screen::Home,
        Screen::GameSelection,
        Screen::TournamentList,
        Screen::TournamentDetails,
        Screen::Register,
        Screen::RegisteredMatches,
        Screen::MatchDetails,
        Screen::MatchSchedule,
        Screen::LobbyDetails,
        Screen::LiveMatch,
        Screen::Leaderboard,
        Screen::TournamentResults,
        Screen::Profile,
        Screen::Wallet,
        Screen::Withdrawal,
        Screen::Teams,
        Screen::TeamManagement,
        Screen::CreateTeam,
        Screen::TeamChat,
        Screen::Store,
        Screen::AdminDashboard,
        Screen::TournamentManagement,
        Screen::UserManagement,
        Screen::Advertisement,
        Screen::Settings,
        Screen::Notifications,
        Screen::PrivacySecurity,
        Screen::HelpSupport,
    ];

    /// Key of the view component implementing this screen.
    pub fn view(self) -> &'static str {
        match self {
            Screen::Splash => "auth/SplashScreen",
            Screen::Login => "auth/LoginScreen",
            Screen::Signup => "auth/SignupScreen",
            Screen::Home => "HomeScreen",
            Screen::GameSelection => "GameSelectionScreen",
            Screen::TournamentList => "tournament/TournamentListScreen",
            Screen::TournamentDetails => "tournament/TournamentDetailsScreen",
            Screen::Register => "tournament/RegisterScreen",
            Screen::RegisteredMatches => "matches/RegisteredMatchesScreen",
            Screen::MatchDetails => "matches/MatchDetailsScreen",
            Screen::MatchSchedule => "matches/MatchScheduleScreen",
            Screen::LobbyDetails => "matches/LobbyDetailsScreen",
            Screen::LiveMatch => "matches/LiveMatchScreen",
            Screen::Leaderboard => "matches/LeaderboardScreen",
            Screen::TournamentResults => "matches/TournamentResultsScreen",
            Screen::Profile => "profile/ProfileScreen",
            Screen::Wallet => "profile/WalletScreen",
            Screen::Withdrawal => "profile/WithdrawalScreen",
            Screen::Teams => "teams/TeamsScreen",
            Screen::TeamManagement => "teams/TeamManagementScreen",
            Screen::CreateTeam => "teams/CreateTeamScreen",
            Screen::TeamChat => "teams/TeamChatScreen",
            Screen::Store => "store/StoreScreen",
            Screen::AdminDashboard => "admin/AdminDashboardScreen",
            Screen::TournamentManagement => "admin/TournamentManagementScreen",
            Screen::UserManagement => "admin/UserManagementScreen",
            Screen::Advertisement => "admin/AdvertisementScreen",
            Screen::Settings => "settings/SettingsScreen",
            Screen::Notifications => "settings/NotificationsScreen",
            Screen::PrivacySecurity => "settings/PrivacySecurityScreen",
            Screen::HelpSupport => "settings/HelpSupportScreen",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_views_are_distinct() {
        let views = Screen::ALL
            .iter()
            .map(|s| s.view())
            .collect::<HashSet<_>>();
        assert_eq!(views.len(), Screen::ALL.len());
    }
}
