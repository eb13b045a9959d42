//! Destinations for an exported PDF.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

#[cfg(feature = "upload")]
use std::time::Duration;

/// Saves exported files on the local machine.
pub trait LocalSink {
    /// Store `bytes` under `filename`, returning where they went.
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf>;
}

impl<S: LocalSink + ?Sized> LocalSink for &S {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        (**self).save(filename, bytes)
    }
}

/// Writes exported files into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LocalSink for DirectorySink {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "pdf saved locally");
        Ok(path)
    }
}

/// Form fields posted to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    /// The PDF, base64-encoded.
    pub data: String,
    pub filename: String,
}

/// Sends an exported document to remote storage.
pub trait Uploader {
    /// Post `form` and return the endpoint's response text.
    ///
    /// An `Err` means the request could not be completed; interpreting the
    /// response text is left to the caller.
    fn upload(&self, form: &UploadForm) -> Result<String>;
}

impl<U: Uploader + ?Sized> Uploader for &U {
    fn upload(&self, form: &UploadForm) -> Result<String> {
        (**self).upload(form)
    }
}

/// Uploader for setups that only save locally. Every upload fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUpload;

impl Uploader for NoUpload {
    fn upload(&self, _form: &UploadForm) -> Result<String> {
        Err(Error::Upload("no upload endpoint configured".to_string()))
    }
}

/// Posts the document as `application/x-www-form-urlencoded` to a script
/// endpoint, e.g. a deployed Apps Script web app.
///
/// Any HTTP reply counts as a completed request, whatever its status: the
/// body text is returned and judged by the exporter.
#[cfg(feature = "upload")]
#[derive(Debug, Clone)]
pub struct HttpUploader {
    endpoint: String,
    agent: ureq::Agent,
}

#[cfg(feature = "upload")]
impl HttpUploader {
    /// Default request timeout.
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Self::TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            endpoint: endpoint.into(),
            agent: config.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "upload")]
impl Uploader for HttpUploader {
    fn upload(&self, form: &UploadForm) -> Result<String> {
        info!(endpoint = %self.endpoint, filename = %form.filename, "uploading pdf");

        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .send_form([
                ("data", form.data.as_str()),
                ("filename", form.filename.as_str()),
            ])
            .map_err(|e| Error::Upload(e.to_string()))?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::Upload(e.to_string()))
    }
}
