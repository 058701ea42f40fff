//! The single-slot CV document, proxied to the backend.
//!
//! The local `CvPanel::cv` snapshot is refreshed from the backend after
//! every upload; after a delete it is cleared without re-reading.

use std::path::Path;

use bytes::Bytes;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::api_client::{ApiClient, CvDocument, PDF_CONTENT_TYPE};
use crate::errors::ClientError;
use crate::i18n::Translator;

/// A file picked for upload, with the content type it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content_type: String,
    bytes: Bytes,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads `path`; the declared type is guessed from the extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or_default();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, content_type, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_pdf(&self) -> bool {
        let essence = self.content_type.split(';').next().unwrap_or_default();
        essence.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE)
    }
}

/// Admin-panel view of the CV slot.
#[derive(Debug, Clone, Default)]
pub struct CvPanel {
    pub selected: Option<SelectedFile>,
    /// Value of the raw file input; cleared after an upload so the same
    /// file name can be picked again.
    pub input_value: Option<String>,
    pub status: Option<String>,
    pub cv: Option<CvDocument>,
    pub is_uploading: bool,
    pub is_deleting: bool,
}

impl CvPanel {
    pub fn upload_enabled(&self) -> bool {
        self.selected.is_some() && !self.is_uploading
    }

    pub fn delete_enabled(&self) -> bool {
        self.cv.is_some() && !self.is_deleting
    }
}

pub struct CvManager {
    api: ApiClient,
    translator: Translator,
    panel: watch::Sender<CvPanel>,
}

impl CvManager {
    pub fn new(api: ApiClient, translator: Translator) -> Self {
        let (panel, _) = watch::channel(CvPanel::default());
        Self {
            api,
            translator,
            panel,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CvPanel> {
        self.panel.subscribe()
    }

    pub fn snapshot(&self) -> CvPanel {
        self.panel.borrow().clone()
    }

    pub fn download_url(&self) -> String {
        self.api.download_url()
    }

    /// Accepts a PDF into the upload slot; anything else empties the slot.
    pub fn select_file(&self, file: Option<SelectedFile>) {
        let t = self.translator;
        self.panel.send_modify(|p| {
            p.input_value = file.as_ref().map(|f| f.name().to_string());
            match file {
                Some(f) if f.is_pdf() => {
                    p.selected = Some(f);
                    p.status = None;
                }
                _ => {
                    p.selected = None;
                    p.status = Some(t.t("admin.selectPDFError").to_string());
                }
            }
        });
    }

    /// Re-reads the CV metadata. Without a token this is a no-op.
    pub async fn refresh(&self, token: Option<&str>) {
        let Some(token) = token else {
            return;
        };
        let cv = self.api.fetch_cv_info(token).await;
        self.panel.send_modify(|p| p.cv = cv);
    }

    /// Uploads the selected file, replacing the stored CV. Returns `true` on
    /// success.
    pub async fn upload(&self, token: Option<&str>) -> bool {
        let t = self.translator;

        let selected = self.panel.borrow().selected.clone();
        let Some(file) = selected else {
            self.set_status(t.t("admin.selectFileFirst"));
            return false;
        };

        if !file.is_pdf() {
            self.panel.send_modify(|p| {
                p.selected = None;
                p.status = Some(t.t("admin.selectPDFError").to_string());
            });
            return false;
        }

        let Some(token) = token else {
            self.set_status(t.t("admin.noToken"));
            return false;
        };

        self.panel.send_modify(|p| {
            p.is_uploading = true;
            p.status = Some(t.t("admin.uploading").to_string());
        });

        let succeeded = match self.api.upload_cv(token, &file).await {
            Ok(_) => {
                info!("Uploaded CV '{}' ({} bytes)", file.name(), file.size());
                self.panel.send_modify(|p| {
                    p.status = Some(t.t("admin.uploadSuccess").to_string());
                    p.selected = None;
                    p.input_value = None;
                });
                self.refresh(Some(token)).await;
                true
            }
            Err(e) => {
                warn!("CV upload failed: {e}");
                let status = match e {
                    ClientError::Validation(_) => t.t("admin.selectPDFError").to_string(),
                    ClientError::Server { message, .. } => message,
                    other => format!("{}: {other}", t.t("admin.uploadFailed")),
                };
                self.set_status(&status);
                false
            }
        };

        self.panel.send_modify(|p| p.is_uploading = false);
        succeeded
    }

    /// Deletes the stored CV. On success the cached snapshot becomes absent.
    pub async fn delete(&self, token: Option<&str>) -> bool {
        let t = self.translator;
        let Some(token) = token else {
            self.set_status(t.t("admin.noToken"));
            return false;
        };

        self.panel.send_modify(|p| p.is_deleting = true);

        let result = self.api.delete_cv(token).await;
        let succeeded = result.is_ok();
        let status = match result {
            Ok(()) => {
                info!("CV deleted");
                self.panel.send_modify(|p| p.cv = None);
                t.t("admin.deleteSuccess").to_string()
            }
            Err(ClientError::Server { message, .. }) => message,
            Err(e) => {
                warn!("CV delete failed: {e}");
                t.t("admin.deleteConnectionFailed").to_string()
            }
        };

        self.panel.send_modify(|p| {
            p.is_deleting = false;
            p.status = Some(status);
        });
        succeeded
    }

    /// Fetches the public CV bytes.
    pub async fn download(&self) -> Result<Bytes, ClientError> {
        self.api.download_cv().await
    }

    fn set_status(&self, status: &str) {
        self.panel
            .send_modify(|p| p.status = Some(status.to_string()));
    }
}
