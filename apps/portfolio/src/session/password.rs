use tokio::sync::watch;
use tracing::{info, warn};

use crate::api_client::ApiClient;
use crate::errors::{ClientError, ValidationError};
use crate::i18n::Translator;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Transient password change form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn new(current: &str, new: &str, confirm: &str) -> Self {
        Self {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    /// Client-side checks, mismatch first. The backend re-validates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }

    /// All three fields filled in.
    pub fn is_complete(&self) -> bool {
        !self.current_password.is_empty()
            && !self.new_password.is_empty()
            && !self.confirm_password.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordPanel {
    pub form: PasswordChange,
    pub status: Option<String>,
    pub is_changing: bool,
}

impl PasswordPanel {
    pub fn submit_enabled(&self) -> bool {
        self.form.is_complete() && !self.is_changing
    }
}

/// Drives the password change form against the backend.
pub struct PasswordManager {
    api: ApiClient,
    translator: Translator,
    panel: watch::Sender<PasswordPanel>,
}

impl PasswordManager {
    pub fn new(api: ApiClient, translator: Translator) -> Self {
        let (panel, _) = watch::channel(PasswordPanel::default());
        Self {
            api,
            translator,
            panel,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PasswordPanel> {
        self.panel.subscribe()
    }

    pub fn snapshot(&self) -> PasswordPanel {
        self.panel.borrow().clone()
    }

    /// Editing any field clears the previous status line.
    pub fn update_form<F: FnOnce(&mut PasswordChange)>(&self, edit: F) {
        self.panel.send_modify(|p| {
            edit(&mut p.form);
            p.status = None;
        });
    }

    pub fn cancel(&self) {
        self.panel.send_modify(|p| {
            p.form = PasswordChange::default();
            p.status = None;
        });
    }

    /// Submits the current form. Returns `true` when the backend accepted it.
    pub async fn submit(&self, token: Option<&str>) -> bool {
        let t = self.translator;
        let form = self.panel.borrow().form.clone();

        if let Err(e) = form.validate() {
            self.set_status(t.t(validation_key(&e)));
            return false;
        }

        let Some(token) = token else {
            self.set_status(t.t("admin.noToken"));
            return false;
        };

        self.panel.send_modify(|p| {
            p.is_changing = true;
            p.status = Some(t.t("password.changingStatus").to_string());
        });

        let result = self.api.change_password(token, &form).await;

        let succeeded = result.is_ok();
        let status = match result {
            Ok(()) => {
                info!("Admin password changed");
                t.t("password.success").to_string()
            }
            Err(ClientError::Validation(e)) => t.t(validation_key(&e)).to_string(),
            Err(ClientError::Server { message, .. }) => message,
            Err(e) => {
                warn!("Password change failed: {e}");
                t.t("password.connectionFailed").to_string()
            }
        };

        self.panel.send_modify(|p| {
            p.is_changing = false;
            p.status = Some(status);
            if succeeded {
                p.form = PasswordChange::default();
            }
        });
        succeeded
    }

    fn set_status(&self, status: &str) {
        self.panel
            .send_modify(|p| p.status = Some(status.to_string()));
    }
}

fn validation_key(e: &ValidationError) -> &'static str {
    match e {
        ValidationError::PasswordMismatch => "password.mismatch",
        ValidationError::PasswordTooShort { .. } => "password.tooShort",
        _ => "password.failed",
    }
}
