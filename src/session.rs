//! Signed-in user session.
//!
//! The session owns the single "current user" slot. It is created empty,
//! filled by [`Session::login`], read by every screen, and emptied again by
//! [`Session::logout`]. The application shell owns it and hands it to views
//! by reference.

use tracing::info;

use crate::error::{AppError, Result};
use crate::mock;
use crate::models::{Role, User};

/// Login / register form fields.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub student_id: String,
}

impl LoginForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Explicit session context.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<User>,
    default_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new("John Doe")
    }
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            user: None,
            default_name: default_name.into(),
        }
    }

    /// Sign in with the mock backend.
    ///
    /// Only checks that email and password are filled in.
    pub fn login(&mut self, form: &LoginForm) -> Result<&User> {
        if form.email.trim().is_empty() || form.password.is_empty() {
            return Err(AppError::validation("Please fill in all fields"));
        }

        let name = if form.name.trim().is_empty() {
            self.default_name.clone()
        } else {
            form.name.trim().to_string()
        };

        let mut user = mock::demo_profile();
        user.id = "1".to_string();
        user.email = form.email.trim().to_string();
        user.role = form.role;
        user.name = name;
        if !form.student_id.trim().is_empty() {
            user.student_id = form.student_id.trim().to_string();
        }

        info!("Logged in {} as {}", user.email, user.role.id());
        Ok(self.user.insert(user))
    }

    /// Validate a registration.
    ///
    /// Registration never signs the user in; the caller switches back to the
    /// login form and shows the returned message.
    pub fn register(&self, form: &LoginForm) -> Result<String> {
        if form.email.trim().is_empty() || form.password.is_empty() || form.name.trim().is_empty() {
            return Err(AppError::validation("Please fill in all fields"));
        }
        info!("Registered {} as {}", form.email.trim(), form.role.id());
        Ok("Account created successfully!".to_string())
    }

    /// Drop the current user.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.email);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Current user or [`AppError::NotAuthenticated`].
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(AppError::NotAuthenticated)
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Overwrite the stored user.
    pub(crate) fn replace_user(&mut self, user: User) -> Result<()> {
        match self.user.as_mut() {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(AppError::NotAuthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(matches!(session.require_user(), Err(AppError::NotAuthenticated)));
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let mut session = Session::default();
        assert!(session.login(&form("", "password")).is_err());
        assert!(session.login(&form("student@demo.com", "")).is_err());
        assert!(session.login(&form("   ", "password")).is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_uses_default_name() {
        let mut session = Session::new("Jane Roe");
        let mut f = form("faculty@demo.com", "password");
        f.role = Role::Faculty;

        let user = session.login(&f).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Jane Roe");
        assert_eq!(user.email, "faculty@demo.com");
        assert_eq!(user.role, Role::Faculty);
        assert_eq!(session.role(), Some(Role::Faculty));
    }

    #[test]
    fn test_login_keeps_entered_name() {
        let mut session = Session::default();
        let mut f = form("a@b.c", "pw");
        f.name = "  Ada  ".to_string();
        assert_eq!(session.login(&f).unwrap().name, "Ada");
    }

    #[test]
    fn test_logout_clears_user() {
        let mut session = Session::default();
        session.login(&form("admin@demo.com", "password")).unwrap();
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_register_requires_name_and_does_not_sign_in() {
        let session = Session::default();
        assert!(session.register(&form("a@b.c", "pw")).is_err());

        let mut f = form("a@b.c", "pw");
        f.name = "Ada".to_string();
        assert_eq!(session.register(&f).unwrap(), "Account created successfully!");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_replace_user_requires_login() {
        let mut session = Session::default();
        assert!(session.replace_user(User::default()).is_err());
    }
}
