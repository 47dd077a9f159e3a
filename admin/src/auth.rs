use frenzy_nav::session::{AuthError, Authenticator, UserStatus};

use crate::config::AccessControl;

/// Reports the session fixed in the config. Without one, every check fails
/// and the shell lands on the sign-in flow.
pub struct ConfiguredAuthenticator {
    session: Option<UserStatus>,
}

impl ConfiguredAuthenticator {
    pub fn new(access_control: &AccessControl) -> Self {
        Self {
            session: access_control.insecure_session,
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for ConfiguredAuthenticator {
    async fn check_current_user(&self) -> Result<UserStatus, AuthError> {
        self.session.ok_or_else(|| {
            AuthError::Unavailable("no session provider is configured".to_owned())
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use frenzy_nav::root::RootFlow;
    use frenzy_nav::session::RootRouter;

    #[tokio::test]
    async fn test_configured_session() {
        let auth = ConfiguredAuthenticator::new(&AccessControl {
            insecure_session: Some(UserStatus {
                is_authenticated: true,
                is_admin: false,
            }),
        });
        let mut router = RootRouter::new();
        router.mount(&auth).await;
        assert_eq!(router.flow(), Some(RootFlow::MainFlow));
    }

    #[tokio::test]
    async fn test_missing_session() {
        let auth = ConfiguredAuthenticator::new(&AccessControl::default());
        let mut router = RootRouter::new();
        router.mount(&auth).await;
        assert_eq!(router.flow(), Some(RootFlow::Auth));
        assert!(matches!(
            router.last_error(),
            Some(AuthError::Unavailable(_))
        ));
    }
}
