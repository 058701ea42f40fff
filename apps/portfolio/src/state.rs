use std::sync::Arc;

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::cv::CvManager;
use crate::errors::{ClientError, StorageError};
use crate::i18n::{load_locale, Translator};
use crate::session::password::PasswordManager;
use crate::session::{Session, SessionManager};
use crate::storage::{FileStore, KeyValueStore};

/// Everything a front end needs, built once at startup and passed down
/// explicitly.
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    pub store: Arc<dyn KeyValueStore>,
    /// Fixed for the lifetime of the context; the saved locale is read once.
    pub translator: Translator,
    pub session: SessionManager,
    pub cv: CvManager,
    pub password: PasswordManager,
}

impl AppContext {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self, ClientError> {
        let api = ApiClient::new(&config)?;
        let translator = Translator::new(load_locale(store.as_ref()));

        Ok(Self {
            session: SessionManager::new(api.clone(), store.clone(), translator),
            cv: CvManager::new(api.clone(), translator),
            password: PasswordManager::new(api.clone(), translator),
            config,
            api,
            store,
            translator,
        })
    }

    /// Runs the initial session check and waits behind the loading gate.
    pub async fn load_session(&self) -> Session {
        self.session.initialize().await;
        self.session.wait_until_loaded().await
    }
}

/// Opens the durable store named by the config, or the default location.
pub fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let store = match &config.state_file {
        Some(path) => FileStore::with_path(path.clone()),
        None => FileStore::new()?,
    };
    Ok(Arc::new(store))
}
