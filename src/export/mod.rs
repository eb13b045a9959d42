//! Export orchestration: snapshot, rasterize, assemble, dispatch.
//!
//! An [`Exporter`] owns the export configuration, the pipeline
//! collaborators and the two export buttons. Each call to
//! [`Exporter::export`] walks `Idle → Preparing → Rendering → Dispatching →
//! Idle`; once it returns, the buttons stay disabled until
//! [`Exporter::poll`] observes that the restore delay has elapsed.

mod controls;
mod sink;

pub use controls::{Button, Controls, Labels};
#[cfg(feature = "upload")]
pub use sink::HttpUploader;
pub use sink::{DirectorySink, LocalSink, NoUpload, UploadForm, Uploader};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::form::Form;
use crate::render::pdf::PdfDocument;
use crate::render::Rasterizer;
use crate::snapshot::Snapshot;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, info_span, warn};

/// Which export button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    /// Save the PDF on the local machine.
    SaveLocal,
    /// Upload the PDF to the remote endpoint.
    Upload,
}

/// Stage of the export pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Preparing,
    Rendering,
    Dispatching,
}

/// Result of an upload attempt as seen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The endpoint answered with the success marker.
    Stored { response: String },
    /// The endpoint answered without the success marker.
    Rejected { response: String },
    /// The request did not complete.
    ConnectionFailed { error: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Stored { .. })
    }
}

/// What happened to the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    SavedLocally { path: PathBuf },
    Uploaded(UploadOutcome),
}

/// Summary of one export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// File name given to the document.
    pub filename: String,
    pub outcome: ExportOutcome,
    /// Blocking alert to show the user, if any.
    pub alert: Option<String>,
    /// Size of the generated PDF.
    pub pdf_bytes: usize,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            ExportOutcome::SavedLocally { .. } => true,
            ExportOutcome::Uploaded(upload) => upload.is_success(),
        }
    }
}

/// File name for a document exported on `date`: `<prefix>_YYYY_MM_DD.pdf`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use receipt_render::export_filename;
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
/// assert_eq!(export_filename("Recibo", date), "Recibo_2023_12_25.pdf");
/// ```
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}.pdf", date.format("%Y_%m_%d"))
}

/// Drives exports of a form to a local sink or a remote uploader.
pub struct Exporter<R, S, U> {
    config: Config,
    labels: Labels,
    rasterizer: R,
    sink: S,
    uploader: U,
    controls: Controls,
    state: ExportState,
    restore_at: Option<Instant>,
}

impl<R, S, U> Exporter<R, S, U>
where
    R: Rasterizer,
    S: LocalSink,
    U: Uploader,
{
    /// Create an exporter. The configuration is validated up front.
    pub fn new(config: Config, rasterizer: R, sink: S, uploader: U) -> Result<Self> {
        config.validate()?;
        let labels = Labels::default();
        Ok(Self {
            controls: Controls::new(&labels),
            labels,
            config,
            rasterizer,
            sink,
            uploader,
            state: ExportState::Idle,
            restore_at: None,
        })
    }

    /// Replace the button and alert texts.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.controls = Controls::new(&labels);
        self.labels = labels;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    /// When the controls will be restored, if an export is settling.
    pub fn restore_deadline(&self) -> Option<Instant> {
        self.restore_at
    }

    /// Export `form`, naming the file after today's UTC date.
    pub fn export(&mut self, form: &Form, action: ExportAction) -> Result<ExportReport> {
        self.export_dated(form, action, chrono::Utc::now().date_naive())
    }

    /// Export `form`, naming the file after `date`.
    ///
    /// Fails with [`Error::ControlsDisabled`] while a previous export is
    /// settling. Upload problems are reported in the returned
    /// [`ExportReport`]; rendering and local I/O problems are returned as
    /// errors. Either way the controls are scheduled for restoration.
    pub fn export_dated(
        &mut self,
        form: &Form,
        action: ExportAction,
        date: NaiveDate,
    ) -> Result<ExportReport> {
        if !self.controls.is_enabled() {
            return Err(Error::ControlsDisabled);
        }

        let filename = export_filename(&self.config.filename_prefix, date);
        let span = info_span!("export", ?action, %filename);
        let _enter = span.enter();

        self.controls.disable();
        match action {
            ExportAction::SaveLocal => self.controls.save.set_label(&self.labels.generating),
            ExportAction::Upload => self.controls.upload.set_label(&self.labels.generating),
        }

        let result = self.run(form, action, filename);

        self.state = ExportState::Idle;
        self.restore_at = Some(Instant::now() + self.config.restore_delay);

        if let Err(e) = &result {
            warn!(error = %e, "export failed");
        }
        result
    }

    /// Restore the controls if the restore delay has elapsed by `now`.
    ///
    /// Returns `true` when the controls were restored by this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.restore_at {
            Some(deadline) if now >= deadline => {
                self.controls.restore(&self.labels);
                self.restore_at = None;
                true
            }
            _ => false,
        }
    }

    fn run(&mut self, form: &Form, action: ExportAction, filename: String) -> Result<ExportReport> {
        self.state = ExportState::Preparing;
        let snapshot = Snapshot::capture(form, &self.config);
        let html = snapshot.to_html();
        info!(fields = snapshot.fields.len(), "snapshot prepared");

        self.state = ExportState::Rendering;
        let raster = self.rasterizer.rasterize(&html, &self.config)?;
        info!(width = raster.width, height = raster.height, "receipt rasterized");

        self.state = ExportState::Dispatching;
        let pdf = PdfDocument::from_raster(&raster, &self.config)?;
        let pdf_bytes = pdf.bytes().len();

        let (outcome, alert) = match action {
            ExportAction::SaveLocal => {
                let path = self.sink.save(&filename, pdf.bytes())?;
                self.controls.save.set_label(&self.labels.saved_locally);
                (ExportOutcome::SavedLocally { path }, None)
            }
            ExportAction::Upload => {
                let (upload, alert) = self.dispatch_upload(&pdf, &filename);
                (ExportOutcome::Uploaded(upload), alert)
            }
        };

        Ok(ExportReport {
            filename,
            outcome,
            alert,
            pdf_bytes,
        })
    }

    fn dispatch_upload(
        &mut self,
        pdf: &PdfDocument,
        filename: &str,
    ) -> (UploadOutcome, Option<String>) {
        self.controls.upload.set_label(&self.labels.uploading);

        let form = UploadForm {
            data: pdf.to_base64(),
            filename: filename.to_string(),
        };

        match self.uploader.upload(&form) {
            Ok(response) if response.contains(self.config.success_marker.as_str()) => {
                info!(%response, "upload stored");
                self.controls.upload.set_label(&self.labels.uploaded);
                (UploadOutcome::Stored { response }, None)
            }
            Ok(response) => {
                warn!(%response, "upload rejected by endpoint");
                self.controls.upload.set_label(&self.labels.upload_rejected);
                let alert = format!("{}{response}", self.labels.upload_rejected_alert);
                (UploadOutcome::Rejected { response }, Some(alert))
            }
            Err(e) => {
                warn!(error = %e, "upload connection failed");
                self.controls.upload.set_label(&self.labels.connection_failed);
                (
                    UploadOutcome::ConnectionFailed {
                        error: e.to_string(),
                    },
                    Some(self.labels.connection_failed_alert.clone()),
                )
            }
        }
    }
}
