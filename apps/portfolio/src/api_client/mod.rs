//! HTTP client for the portfolio backend.
//!
//! ARCHITECTURAL RULE: No other module issues HTTP requests. Callers hand a
//! token in per request; this client never stores, caches or mutates it and
//! never touches client storage.

use bytes::Bytes;
use reqwest::{multipart, Client, Response};
use tracing::{debug, warn};

use crate::config::Config;
use crate::cv::SelectedFile;
use crate::errors::{ClientError, ValidationError};
use crate::session::password::PasswordChange;

mod types;

pub use types::{CvDocument, CvStats, LoginResponse, UploadResult};
use types::{ChangePasswordRequest, ErrorBody, LoginRequest};

pub const LOGIN: &str = "/api/login";
pub const VERIFY: &str = "/api/verify";
pub const CV_INFO: &str = "/api/cv-info";
pub const UPLOAD_CV: &str = "/api/upload-cv";
pub const DOWNLOAD_CV: &str = "/api/download-cv";
pub const VIEW_CV: &str = "/api/view-cv";
pub const DELETE_CV: &str = "/api/cv";
pub const CHANGE_PASSWORD: &str = "/api/change-password";
pub const CV_STATS: &str = "/api/cv-stats";

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
/// Multipart field the backend reads the upload from.
const UPLOAD_FIELD: &str = "cv";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(config.http_timeout).build()?,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Public URL visitors download the current CV from.
    pub fn download_url(&self) -> String {
        self.url(DOWNLOAD_CV)
    }

    /// Public URL that serves the CV inline for in-browser viewing.
    pub fn view_url(&self) -> String {
        self.url(VIEW_CV)
    }

    /// POST /api/login
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .client
            .post(self.url(LOGIN))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Login failed").await);
        }

        let login: LoginResponse = response.json().await?;
        debug!("Login succeeded for '{username}' (first_login={})", login.first_login);
        Ok(login)
    }

    /// GET /api/verify
    ///
    /// `true` only on a 2xx. Every failure, including transport errors,
    /// resolves to `false` and is only reported to the log.
    pub async fn verify_token(&self, token: &str) -> bool {
        match self.client.get(self.url(VERIFY)).bearer_auth(token).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("Token verification rejected with {}", response.status());
                false
            }
            Err(e) => {
                warn!("Token verification failed: {e}");
                false
            }
        }
    }

    /// GET /api/cv-info
    ///
    /// "No CV" is a normal state, so any failure maps to `None`.
    pub async fn fetch_cv_info(&self, token: &str) -> Option<CvDocument> {
        let response = match self.client.get(self.url(CV_INFO)).bearer_auth(token).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to fetch CV info: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!("CV info unavailable ({})", response.status());
            return None;
        }

        match response.json::<CvDocument>().await {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!("CV info response could not be decoded: {e}");
                None
            }
        }
    }

    /// POST /api/upload-cv
    ///
    /// Non-PDF files are rejected before any request is built.
    pub async fn upload_cv(
        &self,
        token: &str,
        file: &SelectedFile,
    ) -> Result<UploadResult, ClientError> {
        if !file.is_pdf() {
            return Err(ValidationError::InvalidFileType(file.content_type().to_string()).into());
        }

        let part = multipart::Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(PDF_CONTENT_TYPE)?;
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.url(UPLOAD_CV))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Upload failed").await);
        }

        let result: UploadResult = response.json().await?;
        debug!("Uploaded '{}' ({} bytes)", file.name(), file.size());
        Ok(result)
    }

    /// GET /api/download-cv (public)
    pub async fn download_cv(&self) -> Result<Bytes, ClientError> {
        let response = self.client.get(self.download_url()).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response, "Download failed").await);
        }
        Ok(response.bytes().await?)
    }

    /// DELETE /api/cv
    pub async fn delete_cv(&self, token: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(DELETE_CV))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to delete CV").await);
        }
        debug!("CV deleted");
        Ok(())
    }

    /// PUT /api/change-password
    ///
    /// The request is validated locally first; invalid changes never reach
    /// the backend.
    pub async fn change_password(
        &self,
        token: &str,
        change: &PasswordChange,
    ) -> Result<(), ClientError> {
        change.validate()?;

        let response = self
            .client
            .put(self.url(CHANGE_PASSWORD))
            .bearer_auth(token)
            .json(&ChangePasswordRequest {
                current_password: &change.current_password,
                new_password: &change.new_password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Password change failed").await);
        }
        debug!("Password changed");
        Ok(())
    }

    /// GET /api/cv-stats
    pub async fn fetch_cv_stats(&self, token: &str) -> Result<CvStats, ClientError> {
        let response = self
            .client
            .get(self.url(CV_STATS))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "Failed to get statistics").await);
        }
        Ok(response.json().await?)
    }
}

/// Builds a `Server` error from a non-2xx response, preferring the body's
/// `error` field over `fallback`.
async fn error_from_response(response: Response, fallback: &str) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    debug!("Backend returned {status}: {message}");
    ClientError::Server { status, message }
}
