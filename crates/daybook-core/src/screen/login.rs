//! Login and sign-up form state.

/// Field-level state for the login and sign-up forms.
///
/// Sign-in and sign-up keep separate field sets and separate error texts,
/// since both forms stay mounted while the user flips between them.
/// Editing a field clears that form's error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub signup_email: String,
    pub signup_password: String,
    pub signup_confirm: String,
    login_error: Option<String>,
    signup_error: Option<String>,
    is_loading: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    #[must_use]
    pub fn signup_error(&self) -> Option<&str> {
        self.signup_error.as_deref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.login_error = None;
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.login_error = None;
    }

    pub fn set_signup_email(&mut self, value: impl Into<String>) {
        self.signup_email = value.into();
        self.signup_error = None;
    }

    pub fn set_signup_password(&mut self, value: impl Into<String>) {
        self.signup_password = value.into();
        self.signup_error = None;
    }

    pub fn set_signup_confirm(&mut self, value: impl Into<String>) {
        self.signup_confirm = value.into();
        self.signup_error = None;
    }

    /// Check the sign-in fields before hitting the auth service.
    pub fn validate_sign_in(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }

    /// Check the sign-up fields before hitting the auth service.
    pub fn validate_sign_up(&self) -> Result<(), &'static str> {
        if self.signup_email.trim().is_empty() {
            return Err("Email is required");
        }
        if self.signup_password.is_empty() {
            return Err("Password is required");
        }
        if self.signup_password != self.signup_confirm {
            return Err("Passwords do not match");
        }
        Ok(())
    }

    /// A submission left for the auth service; both error texts clear.
    pub fn begin_submit(&mut self) {
        self.is_loading = true;
        self.login_error = None;
        self.signup_error = None;
    }

    /// The submission settled without an error to show.
    pub fn finish_submit(&mut self) {
        self.is_loading = false;
    }

    /// Sign-in failed; the message renders under the form.
    pub fn fail_sign_in(&mut self, message: impl Into<String>) {
        self.login_error = Some(message.into());
        self.is_loading = false;
    }

    /// Sign-up failed; the message renders under the form.
    pub fn fail_sign_up(&mut self, message: impl Into<String>) {
        self.signup_error = Some(message.into());
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_signup() -> LoginForm {
        let mut form = LoginForm::new();
        form.set_signup_email("user@example.com");
        form.set_signup_password("hunter22");
        form.set_signup_confirm("hunter22");
        form
    }

    #[test]
    fn sign_in_requires_both_fields() {
        let mut form = LoginForm::new();
        assert_eq!(form.validate_sign_in(), Err("Email is required"));

        form.set_email("user@example.com");
        assert_eq!(form.validate_sign_in(), Err("Password is required"));

        form.set_password("hunter22");
        assert_eq!(form.validate_sign_in(), Ok(()));
    }

    #[test]
    fn sign_up_rejects_mismatched_passwords() {
        let mut form = filled_signup();
        assert_eq!(form.validate_sign_up(), Ok(()));

        form.set_signup_confirm("hunter23");
        assert_eq!(form.validate_sign_up(), Err("Passwords do not match"));
    }

    #[test]
    fn editing_a_field_clears_that_forms_error() {
        let mut form = LoginForm::new();
        form.fail_sign_in("Incorrect email or password");
        form.fail_sign_up("An account already exists for this email");

        form.set_password("try again");
        assert_eq!(form.login_error(), None);
        assert!(form.signup_error().is_some());

        form.set_signup_email("other@example.com");
        assert_eq!(form.signup_error(), None);
    }

    #[test]
    fn failing_a_submission_stops_the_spinner() {
        let mut form = LoginForm::new();
        form.begin_submit();
        assert!(form.is_loading());

        form.fail_sign_in("Incorrect email or password");
        assert!(!form.is_loading());
        assert_eq!(form.login_error(), Some("Incorrect email or password"));
    }

    #[test]
    fn submitting_clears_stale_errors() {
        let mut form = LoginForm::new();
        form.fail_sign_in("Incorrect email or password");
        form.begin_submit();
        assert_eq!(form.login_error(), None);
        assert!(form.is_loading());

        form.finish_submit();
        assert!(!form.is_loading());
    }
}
