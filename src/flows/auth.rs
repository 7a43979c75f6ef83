//! Login, signup and logout.

use crate::api::BlogApi;
use crate::error::{BlogError, FlowError, FlowResult, ResultExt, ValidationError};
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::session::Session;

pub const LOGIN_OK: &str = "Logged in successfully!";
pub const LOGIN_FAILED: &str = "Invalid credentials";
pub const SIGNUP_OK: &str = "Signup successful!";
pub const SIGNUP_FAILED: &str = "Signup failed. Try a different email.";
pub const LOGOUT_OK: &str = "Logged out";
pub const LOGOUT_FAILED: &str = "Failed to log out";

/// Authentication flows. Successful login and signup replace the stored
/// session; failures leave it untouched.
#[derive(Clone)]
pub struct AuthFlow {
    api: BlogApi,
}

impl AuthFlow {
    pub fn new(api: BlogApi) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session and store it.
    pub async fn login(&self, email: &str, password: &str) -> FlowResult<Session> {
        let request = credentials(email, password)?;

        let response = self.api.login(&request).await.or_notice(LOGIN_FAILED)?;
        let session = Session::from(response);
        self.api
            .session()
            .save(&session)
            .await
            .or_notice(LOGIN_FAILED)?;

        tracing::info!(user = %session.user.id, "Signed in");
        Ok(session)
    }

    /// Register, then sign in with the same credentials.
    ///
    /// The two calls are not atomic: when registration succeeds and the
    /// login fails, the account exists but no session is stored.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> FlowResult<Session> {
        if name.trim().is_empty() {
            return Err(FlowError::local(
                ValidationError::required("name", "Name is required").into(),
            ));
        }
        let LoginRequest { email, password } = credentials(email, password)?;
        let request = RegisterRequest {
            email,
            password,
            name: name.to_string(),
        };

        self.api.register(&request).await.or_notice(SIGNUP_FAILED)?;
        tracing::debug!("Registered {}", request.email);

        let response = self.api.login(&request.to_login()).await.map_err(|err| {
            tracing::debug!("Registered but could not sign in: {}", err);
            FlowError::new(SIGNUP_FAILED, err)
        })?;
        let session = Session::from(response);
        self.api
            .session()
            .save(&session)
            .await
            .or_notice(SIGNUP_FAILED)?;

        tracing::info!(user = %session.user.id, "Signed up");
        Ok(session)
    }

    /// Forget the stored session. Nothing is sent to the server.
    pub async fn logout(&self) -> FlowResult<()> {
        self.api.session().clear().await.or_notice(LOGOUT_FAILED)?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.api.session().user().await
    }
}

/// Values are sent as entered; only blank checks look past whitespace.
fn credentials(email: &str, password: &str) -> FlowResult<LoginRequest> {
    if email.trim().is_empty() {
        return Err(required("email", "Email is required"));
    }
    if password.is_empty() {
        return Err(required("password", "Password is required"));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn required(field: &'static str, message: &'static str) -> FlowError {
    FlowError::local(BlogError::from(ValidationError::required(field, message)))
}
