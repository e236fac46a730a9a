use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, PoisonError, RwLock},
};

use uuid::Uuid;

use crate::core::error::AuthError;

const MIN_PASSWORD_LEN: usize = 8;

/// Active session as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInStatus {
    /// Credentials accepted and the session is active.
    Complete(SessionHandle),
    /// The account exists but still has an unfinished step, e.g. email verification.
    NeedsAdditionalSteps,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
}

/// Hosted identity provider. Futures own everything they need so a GUI can
/// run them as detached tasks.
pub trait IdentityService: Clone + Send + Sync + 'static {
    fn sign_in(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<SignInStatus, AuthError>> + Send + 'static;

    /// Creates the account and sends an email verification code.
    fn sign_up(
        &self,
        registration: Registration,
    ) -> impl Future<Output = Result<(), AuthError>> + Send + 'static;

    /// Completes the pending sign-up and activates its session.
    fn verify_email(
        &self,
        code: String,
    ) -> impl Future<Output = Result<SessionHandle, AuthError>> + Send + 'static;

    fn update_profile(
        &self,
        first_name: String,
        last_name: String,
    ) -> impl Future<Output = Result<SessionHandle, AuthError>> + Send + 'static;

    fn sign_out(&self);
    fn is_authenticated(&self) -> bool;
    fn current_session(&self) -> Option<SessionHandle>;
}

/// Email/password sign-in screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl SignInForm {
    /// Takes the entered credentials, leaving both fields empty.
    pub fn take_credentials(&mut self) -> (String, String) {
        self.error = None;
        (
            std::mem::take(&mut self.email),
            std::mem::take(&mut self.password),
        )
    }

    pub fn apply_result(
        &mut self,
        result: Result<SignInStatus, AuthError>,
    ) -> Option<SessionHandle> {
        let err = match result {
            Ok(SignInStatus::Complete(session)) => {
                tracing::info!(email = %session.email, "Signed in");
                return Some(session);
            }
            Ok(SignInStatus::NeedsAdditionalSteps) => AuthError::Incomplete,
            Err(err) => err,
        };
        tracing::warn!(error = %err, "Sign in failed");
        self.error = Some(err.to_string());
        None
    }

    pub async fn submit<S: IdentityService>(&mut self, service: &S) -> Option<SessionHandle> {
        let (email, password) = self.take_credentials();
        let result = service.sign_in(email, password).await;
        self.apply_result(result)
    }
}

/// Sign-up screen state, including the email-code step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub code: String,
    pub pending_verification: bool,
    pub error: Option<String>,
}

impl SignUpForm {
    pub fn registration(&self) -> Registration {
        Registration {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn apply_sign_up(&mut self, result: Result<(), AuthError>) {
        match result {
            Ok(()) => {
                self.error = None;
                self.pending_verification = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign up failed");
                self.password.clear();
                self.error = Some(AuthError::SignUpFailed.to_string());
            }
        }
    }

    pub fn apply_verification(
        &mut self,
        result: Result<SessionHandle, AuthError>,
    ) -> Option<SessionHandle> {
        match result {
            Ok(session) => {
                tracing::info!(email = %session.email, "Email verified");
                self.error = None;
                Some(session)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Email verification failed");
                self.code.clear();
                self.error = Some(AuthError::VerificationFailed.to_string());
                None
            }
        }
    }

    pub async fn submit<S: IdentityService>(&mut self, service: &S) {
        let result = service.sign_up(self.registration()).await;
        self.apply_sign_up(result);
    }

    /// Verifies the code, then stores the entered names on the new account.
    pub async fn verify<S: IdentityService>(&mut self, service: &S) -> Option<SessionHandle> {
        let result = verify_and_name(
            service.clone(),
            self.code.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
        )
        .await;
        self.apply_verification(result)
    }
}

/// Verification followed by the profile update, as one detachable future.
pub async fn verify_and_name<S: IdentityService>(
    service: S,
    code: String,
    first_name: String,
    last_name: String,
) -> Result<SessionHandle, AuthError> {
    service.verify_email(code).await?;
    service.update_profile(first_name, last_name).await
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Default)]
struct IdentityState {
    accounts: HashMap<String, Account>,
    pending: Option<(String, Account)>,
    active: Option<SessionHandle>,
}

/// In-process identity provider for development and tests.
#[derive(Debug, Clone)]
pub struct MemoryIdentity {
    state: Arc<RwLock<IdentityState>>,
    verification_code: Arc<str>,
}

impl MemoryIdentity {
    pub fn new(verification_code: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(IdentityState::default())),
            verification_code: verification_code.into().into(),
        }
    }

    /// Registers a verified account directly.
    pub fn with_account(self, email: &str, password: &str) -> Self {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.accounts.insert(
                email.to_lowercase(),
                Account {
                    password: password.to_string(),
                    first_name: String::new(),
                    last_name: String::new(),
                },
            );
        }
        self
    }
}

fn session_for(email: &str, account: &Account) -> SessionHandle {
    SessionHandle {
        id: Uuid::new_v4(),
        email: email.to_string(),
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
    }
}

impl IdentityService for MemoryIdentity {
    fn sign_in(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<SignInStatus, AuthError>> + Send + 'static {
        let state = self.state.clone();
        async move {
            let mut state = state.write().unwrap_or_else(PoisonError::into_inner);
            let key = email.trim().to_lowercase();
            if let Some(account) = state.accounts.get(&key) {
                if account.password != password {
                    return Err(AuthError::InvalidCredentials);
                }
                let session = session_for(&key, account);
                state.active = Some(session.clone());
                return Ok(SignInStatus::Complete(session));
            }
            match &state.pending {
                Some((pending, account)) if *pending == key && account.password == password => {
                    Ok(SignInStatus::NeedsAdditionalSteps)
                }
                _ => Err(AuthError::InvalidCredentials),
            }
        }
    }

    fn sign_up(
        &self,
        registration: Registration,
    ) -> impl Future<Output = Result<(), AuthError>> + Send + 'static {
        let state = self.state.clone();
        async move {
            let mut state = state.write().unwrap_or_else(PoisonError::into_inner);
            let key = registration.email.trim().to_lowercase();
            if !key.contains('@')
                || registration.password.len() < MIN_PASSWORD_LEN
                || state.accounts.contains_key(&key)
            {
                return Err(AuthError::SignUpFailed);
            }
            tracing::debug!(email = %key, "Verification code issued");
            state.pending = Some((
                key,
                Account {
                    password: registration.password,
                    first_name: String::new(),
                    last_name: String::new(),
                },
            ));
            Ok(())
        }
    }

    fn verify_email(
        &self,
        code: String,
    ) -> impl Future<Output = Result<SessionHandle, AuthError>> + Send + 'static {
        let state = self.state.clone();
        let expected = self.verification_code.clone();
        async move {
            let mut state = state.write().unwrap_or_else(PoisonError::into_inner);
            if code.trim() != &*expected {
                return Err(AuthError::VerificationFailed);
            }
            let (email, account) = state.pending.take().ok_or(AuthError::VerificationFailed)?;
            let session = session_for(&email, &account);
            state.accounts.insert(email, account);
            state.active = Some(session.clone());
            Ok(session)
        }
    }

    fn update_profile(
        &self,
        first_name: String,
        last_name: String,
    ) -> impl Future<Output = Result<SessionHandle, AuthError>> + Send + 'static {
        let state = self.state.clone();
        async move {
            let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
            let state = &mut *guard;
            let session = state
                .active
                .as_mut()
                .ok_or_else(|| AuthError::Unavailable("no active session".to_string()))?;
            if let Some(account) = state.accounts.get_mut(&session.email) {
                account.first_name = first_name.clone();
                account.last_name = last_name.clone();
            }
            session.first_name = first_name;
            session.last_name = last_name;
            Ok(session.clone())
        }
    }

    fn sign_out(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(session) = state.active.take() {
            tracing::info!(email = %session.email, "Signed out");
        }
    }

    fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    fn current_session(&self) -> Option<SessionHandle> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .active
            .clone()
    }
}
