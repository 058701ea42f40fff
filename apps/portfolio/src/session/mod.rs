//! Admin session lifecycle.
//!
//! `Unknown` (loading) resolves exactly once per process into
//! `Authenticated` or `Unauthenticated`; afterwards only `login` and
//! `logout` move the state. An established session is not re-verified, so a
//! token revoked server-side goes unnoticed until the next `initialize`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api_client::ApiClient;
use crate::errors::ClientError;
use crate::i18n::Translator;
use crate::storage::{KeyValueStore, ADMIN_TOKEN_KEY, ADMIN_USERNAME_KEY};

pub mod password;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Stored token not yet checked. Protected views must wait.
    Unknown,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
    pub state: SessionState,
    pub is_signing_in: bool,
    /// Inline text under the login form after a failed attempt.
    pub login_status: Option<String>,
    /// Backend reports the admin still has the seeded password.
    pub first_login: bool,
}

impl Session {
    fn unknown() -> Self {
        Self {
            token: None,
            username: None,
            state: SessionState::Unknown,
            is_signing_in: false,
            login_status: None,
            first_login: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Unknown
    }

    pub fn login_enabled(&self) -> bool {
        !self.is_signing_in
    }
}

/// Sole owner of the session token and its storage keys.
pub struct SessionManager {
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
    translator: Translator,
    session: watch::Sender<Session>,
}

impl SessionManager {
    pub fn new(api: ApiClient, store: Arc<dyn KeyValueStore>, translator: Translator) -> Self {
        let (session, _) = watch::channel(Session::unknown());
        Self {
            api,
            store,
            translator,
            session,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    pub fn require_token(&self) -> Result<String, ClientError> {
        self.token()
            .ok_or_else(|| ClientError::Auth(self.translator.t("admin.noToken").to_string()))
    }

    /// Resolves the initial `Unknown` state from durable storage.
    ///
    /// Without a stored token no request is made. A stored token that fails
    /// verification (for any reason) is purged. Once resolved, later calls
    /// are no-ops.
    pub async fn initialize(&self) {
        if !self.session.borrow().is_loading() {
            debug!("Session already resolved, skipping verification");
            return;
        }

        let stored = match self.store.get(ADMIN_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Could not read stored session, treating as logged out: {e}");
                None
            }
        };

        let Some(token) = stored else {
            info!("No stored session");
            self.session
                .send_modify(|s| s.state = SessionState::Unauthenticated);
            return;
        };

        if self.api.verify_token(&token).await {
            let username = self.store.get(ADMIN_USERNAME_KEY).unwrap_or_else(|e| {
                warn!("Could not read stored username: {e}");
                None
            });
            info!("Restored session for {}", username.as_deref().unwrap_or("<unknown>"));
            self.session.send_modify(|s| {
                s.token = Some(token);
                s.username = username;
                s.state = SessionState::Authenticated;
            });
        } else {
            info!("Stored session is no longer valid");
            self.logout();
        }
    }

    /// Loading gate: returns once the initial verification has finished.
    pub async fn wait_until_loaded(&self) -> Session {
        let mut rx = self.subscribe();
        let loaded = rx.wait_for(|s| !s.is_loading()).await.map(|s| s.clone());
        // the sender lives in `self`, so the channel cannot close here
        loaded.unwrap_or_else(|_| self.snapshot())
    }

    /// Exchanges credentials for a token and persists it.
    ///
    /// Failures are rendered into `login_status` and nothing is stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        self.session.send_modify(|s| {
            s.is_signing_in = true;
            s.login_status = None;
        });

        let result = self.api.login(username, password).await;

        match result {
            Ok(login) => {
                if let Err(e) = self.persist(&login.token, username) {
                    warn!("Logged in but could not persist session: {e}");
                }
                info!("Logged in as {username}");
                self.session.send_modify(|s| {
                    s.token = Some(login.token);
                    s.username = Some(username.to_string());
                    s.state = SessionState::Authenticated;
                    s.is_signing_in = false;
                    s.first_login = login.first_login;
                });
                Ok(())
            }
            Err(e) => {
                let status = match &e {
                    ClientError::Server { message, .. } => message.clone(),
                    _ => self.translator.t("login.connectionFailed").to_string(),
                };
                warn!("Login failed for {username}: {e}");
                self.session.send_modify(|s| {
                    s.is_signing_in = false;
                    s.login_status = Some(status);
                });
                Err(e)
            }
        }
    }

    /// Purges the stored session and drops to `Unauthenticated`.
    pub fn logout(&self) {
        for key in [ADMIN_TOKEN_KEY, ADMIN_USERNAME_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!("Could not remove '{key}' from storage: {e}");
            }
        }
        self.session.send_modify(|s| {
            s.token = None;
            s.username = None;
            s.state = SessionState::Unauthenticated;
            s.first_login = false;
        });
        info!("Session cleared");
    }

    fn persist(&self, token: &str, username: &str) -> Result<(), crate::errors::StorageError> {
        self.store.set(ADMIN_TOKEN_KEY, token)?;
        self.store.set(ADMIN_USERNAME_KEY, username)?;
        Ok(())
    }
}
