use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::root::{Mounted, RootFlow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserStatus {
    pub is_authenticated: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AuthError {
    #[display(fmt = "Authentication provider unavailable: {_0}")]
    Unavailable(String),

    #[display(fmt = "Session rejected: {_0}")]
    Rejected(String),
}

impl std::error::Error for AuthError {}

#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    async fn check_current_user(&self) -> Result<UserStatus, AuthError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Player,
    Admin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SessionState {
    // Nothing is known until the authentication check returns.
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(Role),
}

impl From<UserStatus> for SessionState {
    fn from(status: UserStatus) -> Self {
        match RootFlow::resolve(status.is_authenticated, status.is_admin) {
            RootFlow::Auth => SessionState::Unauthenticated,
            RootFlow::AdminFlow => SessionState::Authenticated(Role::Admin),
            RootFlow::MainFlow => SessionState::Authenticated(Role::Player),
        }
    }
}

impl SessionState {
    pub fn flow(self) -> Option<RootFlow> {
        match self {
            SessionState::Unknown => None,
            SessionState::Unauthenticated => Some(RootFlow::Auth),
            SessionState::Authenticated(Role::Admin) => Some(RootFlow::AdminFlow),
            SessionState::Authenticated(Role::Player) => Some(RootFlow::MainFlow),
        }
    }
}

/// Selects the navigator subtree for the current session.
///
/// No flow is produced while the session is `Unknown`, so the auth screens
/// are never shown just because the check has not returned yet.
#[derive(Debug, Default)]
pub struct RootRouter {
    state: SessionState,
    checked: bool,
    last_error: Option<AuthError>,
}

impl RootRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the authentication check once. Later calls are no-ops; session
    /// changes after mount are fed through `observe`.
    pub async fn mount(&mut self, auth: &dyn Authenticator) {
        if self.checked {
            return;
        }
        self.checked = true;
        let result = auth.check_current_user().await;
        self.observe(result);
    }

    pub fn observe(&mut self, result: Result<UserStatus, AuthError>) {
        match result {
            Ok(status) => {
                self.state = status.into();
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Authentication check failed, routing to sign-in: {e}");
                self.state = SessionState::Unauthenticated;
                self.last_error = Some(e);
            }
        }
        log::debug!("Session state is now {:?}", self.state);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn last_error(&self) -> Option<&AuthError> {
        self.last_error.as_ref()
    }

    pub fn flow(&self) -> Option<RootFlow> {
        self.state.flow()
    }

    pub fn mounted(&self) -> Option<Mounted> {
        self.flow().map(RootFlow::navigator)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeAuth {
        result: Result<UserStatus, AuthError>,
        calls: AtomicUsize,
    }

    impl FakeAuth {
        fn new(result: Result<UserStatus, AuthError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Authenticator for FakeAuth {
        async fn check_current_user(&self) -> Result<UserStatus, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn status(is_authenticated: bool, is_admin: bool) -> UserStatus {
        UserStatus {
            is_authenticated,
            is_admin,
        }
    }

    #[test]
    fn test_unknown_mounts_nothing() {
        let router = RootRouter::new();
        assert_eq!(router.state(), SessionState::Unknown);
        assert_eq!(router.flow(), None);
        assert_eq!(router.mounted(), None);
    }

    #[test]
    fn test_state_from_status() {
        assert_eq!(
            SessionState::from(status(false, true)),
            SessionState::Unauthenticated
        );
        assert_eq!(
            SessionState::from(status(true, true)),
            SessionState::Authenticated(Role::Admin)
        );
        assert_eq!(
            SessionState::from(status(true, false)),
            SessionState::Authenticated(Role::Player)
        );
    }

    #[tokio::test]
    async fn test_mount_checks_once() {
        let auth = FakeAuth::new(Ok(status(true, false)));
        let mut router = RootRouter::new();
        router.mount(&auth).await;
        router.mount(&auth).await;
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
        assert_eq!(router.flow(), Some(RootFlow::MainFlow));
        assert_eq!(router.last_error(), None);
    }

    #[tokio::test]
    async fn test_failed_check_routes_to_auth() {
        let auth = FakeAuth::new(Err(AuthError::Unavailable("timeout".to_owned())));
        let mut router = RootRouter::new();
        router.mount(&auth).await;
        assert_eq!(router.state(), SessionState::Unauthenticated);
        assert_eq!(router.flow(), Some(RootFlow::Auth));
        assert_eq!(
            router.last_error(),
            Some(&AuthError::Unavailable("timeout".to_owned()))
        );
    }

    #[test]
    fn test_observe_is_memoryless() {
        let mut router = RootRouter::new();
        router.observe(Ok(status(true, true)));
        assert_eq!(router.flow(), Some(RootFlow::AdminFlow));
        router.observe(Err(AuthError::Rejected("expired".to_owned())));
        assert_eq!(router.flow(), Some(RootFlow::Auth));
        router.observe(Ok(status(true, false)));
        assert_eq!(router.flow(), Some(RootFlow::MainFlow));
        assert_eq!(router.last_error(), None);
        router.observe(Ok(status(false, true)));
        assert_eq!(router.flow(), Some(RootFlow::Auth));
    }
}
