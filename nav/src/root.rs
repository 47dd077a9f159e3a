use serde::Serialize;

use crate::screens::Screen;
use crate::stack::{self, StackNavigator};
use crate::tabs::{self, TabNavigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootFlow {
    Auth,
    AdminFlow,
    MainFlow,
}

impl RootFlow {
    // Not being authenticated wins over the admin flag.
    pub fn resolve(is_authenticated: bool, is_admin: bool) -> RootFlow {
        match (is_authenticated, is_admin) {
            (false, _) => RootFlow::Auth,
            (true, true) => RootFlow::AdminFlow,
            (true, false) => RootFlow::MainFlow,
        }
    }

    pub fn route_name(self) -> &'static str {
        match self {
            RootFlow::Auth => "Auth",
            RootFlow::AdminFlow => "AdminStack",
            RootFlow::MainFlow => "MainApp",
        }
    }

    pub fn navigator(self) -> Mounted {
        match self {
            RootFlow::Auth => Mounted::Stack(&stack::AUTH),
            RootFlow::AdminFlow => Mounted::Stack(&stack::ADMIN),
            RootFlow::MainFlow => Mounted::Tabs(&tabs::MAIN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mounted {
    Stack(&'static StackNavigator),
    Tabs(&'static TabNavigator),
}

impl Mounted {
    pub fn resolve(&self, route: &str) -> Option<Screen> {
        match self {
            Mounted::Stack(nav) => nav.resolve(route),
            Mounted::Tabs(nav) => nav.resolve(route),
        }
    }

    pub fn initial_screen(&self) -> Screen {
        match self {
            Mounted::Stack(nav) => nav.initial_route().screen,
            Mounted::Tabs(nav) => nav.tabs[0].target.initial_screen(),
        }
    }
}
