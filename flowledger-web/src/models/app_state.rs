use flowledger_shared::models::{AuthStatus, LoginResponse, UserRole};
use yewdux::Store;

/// The signed-in identity, held in memory only for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub role: UserRole,
}

impl Session {
    /// Build a session from a login answer. Anything short of a fully
    /// populated success leaves the current state untouched.
    pub fn from_login(response: &LoginResponse) -> Option<Self> {
        if !response.success {
            return None;
        }
        Some(Self {
            user_id: response.user_id?,
            username: response.username.clone()?,
            role: response.role?,
        })
    }

    /// Build a session from the startup probe.
    pub fn from_status(status: &AuthStatus) -> Option<Self> {
        if !status.logged_in {
            return None;
        }
        Some(Self {
            user_id: status.user_id?,
            username: status.username.clone()?,
            role: status.role?,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Application store: the only shared mutable state on the client.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Option<Session>,
}

impl AppState {
    /// State after a successful login or probe.
    pub fn logged_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// State after logout. Used unconditionally: the server call's outcome
    /// never keeps a session alive.
    pub fn cleared() -> Self {
        Self { session: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_response() -> LoginResponse {
        LoginResponse {
            success: true,
            user_id: Some(3),
            username: Some("zhang".to_string()),
            role: Some(UserRole::Customer),
            message: None,
        }
    }

    #[test]
    fn login_success_creates_session() {
        let session = Session::from_login(&success_response()).unwrap();
        assert_eq!(session.user_id, 3);
        assert_eq!(session.username, "zhang");
        assert!(!session.is_admin());

        let state = AppState::logged_in(session);
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn login_failure_creates_nothing() {
        let response = LoginResponse {
            success: false,
            user_id: None,
            username: None,
            role: None,
            message: Some("用户名或密码错误".to_string()),
        };
        assert!(Session::from_login(&response).is_none());
    }

    #[test]
    fn login_success_without_identity_is_rejected() {
        let mut response = success_response();
        response.user_id = None;
        assert!(Session::from_login(&response).is_none());
    }

    #[test]
    fn probe_maps_to_session_only_when_logged_in() {
        let status = AuthStatus {
            logged_in: true,
            user_id: Some(1),
            username: Some("admin".to_string()),
            role: Some(UserRole::Admin),
        };
        let session = Session::from_status(&status).unwrap();
        assert!(session.is_admin());

        let logged_out = AuthStatus {
            logged_in: false,
            user_id: None,
            username: None,
            role: None,
        };
        assert!(Session::from_status(&logged_out).is_none());
    }

    #[test]
    fn cleared_state_drops_the_session() {
        let state = AppState::logged_in(Session {
            user_id: 9,
            username: "li".to_string(),
            role: UserRole::Admin,
        });
        assert!(state.is_authenticated());

        let cleared = AppState::cleared();
        assert!(!cleared.is_authenticated());
        assert!(!cleared.is_admin());
        assert!(cleared.session.is_none());
    }
}
