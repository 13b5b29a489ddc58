//! Signup submission flow
//!
//! Holds the form snapshot, the collaborator seams (auth, notifications,
//! navigation) and [`SignupFlow`], which runs one submission against them.
//! Nothing here touches the DOM, so the whole flow can be driven by fakes.

use serde::{Deserialize, Serialize};

use super::role::Role;
use super::validation::{PASSWORD_RULE_HINT, PasswordIssue, check_password};

/// Path the user lands on after a successful signup
pub const HOME_PATH: &str = "/";

/// Portal endpoint that relays signups to the identity service
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";

/// Snapshot of the signup form at the moment it is submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub role: Role,
    pub loading: bool,
}

impl FormState {
    /// Build the payload for the auth collaborator (UI-only flags are dropped)
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Account creation request passed to the auth collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

/// Failure reported by the auth collaborator. The message is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SignupError {
    pub message: String,
}

impl SignupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// Transient message shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn weak_password() -> Self {
        Self::destructive("Weak password", PASSWORD_RULE_HINT)
    }

    pub fn account_created() -> Self {
        Self::new("Account created", "Welcome aboard! You are now signed in.")
    }

    pub fn signup_failed(error: &SignupError) -> Self {
        Self::destructive("Sign up failed", error.message.clone())
    }
}

/// Creates an account and signs the user in
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn sign_up(&self, request: SignupRequest) -> Result<(), SignupError>;
}

/// Shows transient messages; fire-and-forget
pub trait Notifier {
    fn show(&self, notice: Notice);
}

/// Moves the user to another route
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Password failed the strength rule; nothing was sent
    Rejected(PasswordIssue),
    /// Account created and the user was sent home
    Navigated,
    /// The auth collaborator refused the request
    Failed(SignupError),
}

#[cfg(test)]
impl SubmitOutcome {
    /// Whether the form stays on screen, ready for another attempt
    pub(crate) fn is_retryable(&self) -> bool {
        !matches!(self, SubmitOutcome::Navigated)
    }
}

/// Runs one signup submission against injected collaborators
pub struct SignupFlow<A, N, V> {
    auth: A,
    notifier: N,
    navigator: V,
}

impl<A, N, V> SignupFlow<A, N, V>
where
    A: AuthClient,
    N: Notifier,
    V: Navigator,
{
    pub fn new(auth: A, notifier: N, navigator: V) -> Self {
        Self {
            auth,
            notifier,
            navigator,
        }
    }

    /// Validate the password, then hand the request to the auth collaborator.
    ///
    /// `set_loading` is called with `true` right before the external call and
    /// with `false` once it has settled, whatever the result. A rejected
    /// password never touches it.
    pub async fn submit(&self, form: &FormState, set_loading: impl Fn(bool)) -> SubmitOutcome {
        if let Err(issue) = check_password(&form.password) {
            leptos::logging::log!("signup rejected locally: {issue}");
            self.notifier.show(Notice::weak_password());
            return SubmitOutcome::Rejected(issue);
        }

        set_loading(true);

        let outcome = match self.auth.sign_up(form.to_request()).await {
            Ok(()) => {
                self.notifier.show(Notice::account_created());
                self.navigator.navigate_to(HOME_PATH);
                SubmitOutcome::Navigated
            }
            Err(error) => {
                leptos::logging::warn!("signup failed: {error}");
                self.notifier.show(Notice::signup_failed(&error));
                SubmitOutcome::Failed(error)
            }
        };

        set_loading(false);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_drops_ui_flags() {
        let form = FormState {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Passw0rd!".to_string(),
            show_password: true,
            role: Role::Volunteer,
            loading: true,
        };

        let request = form.to_request();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, "Passw0rd!");
        assert_eq!(request.role, Role::Volunteer);
    }

    #[test]
    fn test_signup_request_json_shape() {
        let request = SignupRequest {
            email: "a@b.co".to_string(),
            password: "Passw0rd!".to_string(),
            name: "A".to_string(),
            role: Role::Donor,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["email"], "a@b.co");
        assert_eq!(json["role"], "donor");
        assert!(json.get("loading").is_none());
    }

    #[test]
    fn test_signup_request_role_defaults_to_receiver() {
        let json = r#"{"email":"a@b.co","password":"Passw0rd!","name":"A"}"#;
        let request: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role, Role::Receiver);
    }

    #[test]
    fn test_signup_error_displays_message_verbatim() {
        let error = SignupError::new("Email already registered");
        assert_eq!(error.to_string(), "Email already registered");
    }

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::weak_password().severity, Severity::Destructive);
        assert_eq!(Notice::account_created().severity, Severity::Default);

        let failed = Notice::signup_failed(&SignupError::new("nope"));
        assert_eq!(failed.severity, Severity::Destructive);
        assert_eq!(failed.description, "nope");
    }

    #[test]
    fn test_outcome_retryable() {
        assert!(SubmitOutcome::Rejected(PasswordIssue::TooShort).is_retryable());
        assert!(SubmitOutcome::Failed(SignupError::new("x")).is_retryable());
        assert!(!SubmitOutcome::Navigated.is_retryable());
    }
}
