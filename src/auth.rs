//! Authentication state.
//!
//! Authentication is account selection over a list of known users; there are
//! no passwords. Logging out resets the role to [`Role::Guest`].

use crate::error::{Result, SeminarError};
use crate::session::{Role, UserAccount};

/// Access to the current authentication state.
pub trait AuthService {
    /// Log in as a known user, returning their role.
    fn login(&mut self, username: &str) -> Result<Role>;

    /// Clear authentication. Logging out while logged out is a no-op.
    fn logout(&mut self);

    fn current_user(&self) -> Option<&UserAccount>;

    /// Role of the current user, or `Guest` when nobody is logged in.
    fn current_role(&self) -> Role {
        self.current_user().map(|u| u.role).unwrap_or_default()
    }

    fn accounts(&self) -> &[UserAccount];
}

/// Auth service backed by a fixed list of accounts.
#[derive(Debug, Clone, Default)]
pub struct LocalAuthService {
    accounts: Vec<UserAccount>,
    current: Option<usize>,
}

impl LocalAuthService {
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts,
            current: None,
        }
    }
}

impl AuthService for LocalAuthService {
    fn login(&mut self, username: &str) -> Result<Role> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.username == username)
            .ok_or_else(|| SeminarError::UnknownUser(username.to_string()))?;
        self.current = Some(index);
        let role = self.accounts[index].role;
        tracing::info!("Logged in as {} ({})", username, role.label());
        Ok(role)
    }

    fn logout(&mut self) {
        if let Some(user) = self.current_user() {
            tracing::info!("Logged out {}", user.username);
        }
        self.current = None;
    }

    fn current_user(&self) -> Option<&UserAccount> {
        self.current.and_then(|i| self.accounts.get(i))
    }

    fn accounts(&self) -> &[UserAccount] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_users;

    #[test]
    fn test_starts_as_guest() {
        let auth = LocalAuthService::new(sample_users());
        assert!(auth.current_user().is_none());
        assert_eq!(auth.current_role(), Role::Guest);
    }

    #[test]
    fn test_login_and_logout() {
        let mut auth = LocalAuthService::new(sample_users());
        assert_eq!(auth.login("coord").unwrap(), Role::Coordinator);
        assert_eq!(auth.current_role(), Role::Coordinator);
        assert_eq!(auth.current_user().unwrap().username, "coord");

        auth.logout();
        assert_eq!(auth.current_role(), Role::Guest);
        auth.logout();
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_login_unknown_user_keeps_state() {
        let mut auth = LocalAuthService::new(sample_users());
        auth.login("student").unwrap();
        let err = auth.login("mallory").unwrap_err();
        assert!(matches!(err, SeminarError::UnknownUser(ref u) if u == "mallory"));
        assert_eq!(auth.current_role(), Role::Student);
    }
}
