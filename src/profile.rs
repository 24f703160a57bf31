//! Profile editing with a draft that is only committed on save.

use tracing::info;

use crate::error::{AppError, Result};
use crate::models::{ProfileField, User};
use crate::session::Session;

/// Edit session over the signed-in user's profile.
///
/// While editing, changes go to a private copy of the user. [`save`] writes
/// that copy back into the [`Session`]; [`cancel`] throws it away.
///
/// [`save`]: ProfileEditor::save
/// [`cancel`]: ProfileEditor::cancel
#[derive(Debug, Clone, Default)]
pub struct ProfileEditor {
    draft: Option<User>,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&User> {
        self.draft.as_ref()
    }

    /// Snapshot the user into a fresh draft.
    pub fn enter_edit(&mut self, user: &User) -> Result<()> {
        if self.is_editing() {
            return Err(AppError::invalid_transition("profile is already being edited"));
        }
        self.draft = Some(user.clone());
        Ok(())
    }

    /// Change one draft field.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> Result<()> {
        if !field.is_editable() {
            return Err(AppError::validation(format!("{} cannot be edited", field.label())));
        }
        let draft = self
            .draft
            .as_mut()
            .ok_or_else(|| AppError::invalid_transition("profile is not being edited"))?;
        *draft.field_mut(field) = value.into();
        Ok(())
    }

    /// Mutable draft field for text inputs. `None` for read-only fields.
    pub fn field_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        if !field.is_editable() {
            return None;
        }
        self.draft.as_mut().map(|d| d.field_mut(field))
    }

    /// Commit the draft to the session and leave edit mode.
    pub fn save(&mut self, session: &mut Session) -> Result<()> {
        let draft = self
            .draft
            .take()
            .ok_or_else(|| AppError::invalid_transition("profile is not being edited"))?;
        info!("Saving profile for {}", draft.email);
        session.replace_user(draft)
    }

    /// Drop the draft and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::LoginForm;

    fn signed_in() -> Session {
        let mut session = Session::default();
        session
            .login(&LoginForm {
                email: "student@demo.com".to_string(),
                password: "password".to_string(),
                ..Default::default()
            })
            .unwrap();
        session
    }

    #[test]
    fn test_save_copies_every_draft_field() {
        let mut session = signed_in();
        let mut editor = ProfileEditor::new();
        editor.enter_edit(session.user().unwrap()).unwrap();

        editor.set_field(ProfileField::Name, "Jane Roe").unwrap();
        editor.set_field(ProfileField::Email, "jane@college.edu").unwrap();
        editor.set_field(ProfileField::Phone, "+1 555 000").unwrap();
        editor.set_field(ProfileField::Address, "1 Campus Way").unwrap();
        let expected = editor.draft().unwrap().clone();

        editor.save(&mut session).unwrap();
        assert!(!editor.is_editing());
        assert_eq!(session.user(), Some(&expected));
    }

    #[test]
    fn test_draft_does_not_touch_user_until_save() {
        let mut session = signed_in();
        let before = session.user().unwrap().clone();
        let mut editor = ProfileEditor::new();
        editor.enter_edit(&before).unwrap();

        editor.set_field(ProfileField::Name, "Changed").unwrap();
        assert_eq!(session.user(), Some(&before));

        editor.cancel();
        assert!(!editor.is_editing());
        assert_eq!(session.user(), Some(&before));
    }

    #[test]
    fn test_academic_fields_are_read_only() {
        let session = signed_in();
        let mut editor = ProfileEditor::new();
        editor.enter_edit(session.user().unwrap()).unwrap();

        assert!(editor.set_field(ProfileField::StudentId, "X").is_err());
        assert!(editor.field_mut(ProfileField::Department).is_none());
        assert!(editor.field_mut(ProfileField::Phone).is_some());
    }

    #[test]
    fn test_single_edit_session() {
        let session = signed_in();
        let mut editor = ProfileEditor::new();
        editor.enter_edit(session.user().unwrap()).unwrap();
        assert!(editor.enter_edit(session.user().unwrap()).is_err());
    }

    #[test]
    fn test_set_and_save_require_edit_mode() {
        let mut session = signed_in();
        let mut editor = ProfileEditor::new();
        assert!(editor.set_field(ProfileField::Name, "x").is_err());
        assert!(editor.save(&mut session).is_err());
    }

    #[test]
    fn test_save_after_logout_fails() {
        let mut session = signed_in();
        let mut editor = ProfileEditor::new();
        editor.enter_edit(session.user().unwrap()).unwrap();
        session.logout();
        assert!(matches!(editor.save(&mut session), Err(AppError::NotAuthenticated)));
        assert!(!editor.is_editing());
    }
}
