//! # receipt-render
//!
//! A receipt form with live input masking and Chromium-free PDF export.
//!
//! Fields are edited through [`Form`]: currency fields are masked as they are
//! typed (`"12345"` becomes `"R$ 123,45"`), date fields become `DD/MM/YYYY`,
//! and every change to a line-item value recomputes the total. An
//! [`Exporter`] then snapshots the form into static HTML, rasterizes it with
//! [Blitz](https://github.com/DioxusLabs/blitz), wraps the image in a
//! single-page PDF and either saves it locally or uploads it.
//!
//! ## Features
//!
//! - **Masking**: currency and date masks, plus the inverse currency parser
//! - **Totals**: synchronous re-aggregation on every line-item keystroke
//! - **PNG/PDF export**: raster image embedded in a page sized from the form
//! - **Upload**: form-encoded POST to a script endpoint, success by marker
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use receipt_render::{
//!     ids, BlitzRasterizer, Config, DirectorySink, ExportAction, Exporter, Form, NoUpload,
//! };
//!
//! let mut form = Form::receipt();
//! form.input(ids::PAYER, "Maria da Silva")?;
//! form.input(&ids::item_value(1), "1000")?;
//! form.input(&ids::item_value(2), "550")?;
//! assert_eq!(form.total(), Some("R$ 15,50"));
//!
//! let mut exporter = Exporter::new(
//!     Config::default(),
//!     BlitzRasterizer,
//!     DirectorySink::new("out"),
//!     NoUpload,
//! )?;
//! let report = exporter.export(&form, ExportAction::SaveLocal)?;
//! println!("saved {}", report.filename);
//! # Ok::<(), receipt_render::Error>(())
//! ```

mod config;
mod error;
mod export;
mod form;
mod mask;
mod render;
mod snapshot;

pub use config::{ColorScheme, Config, MM_TO_PT, PX_TO_MM};
pub use error::{Error, Result};
#[cfg(feature = "upload")]
pub use export::HttpUploader;
pub use export::{
    export_filename, Button, Controls, DirectorySink, ExportAction, ExportOutcome, ExportReport,
    ExportState, Exporter, Labels, LocalSink, NoUpload, UploadForm, UploadOutcome, Uploader,
};
pub use form::{ids, Field, FieldKind, FieldValue, Form, LINE_ITEMS};
pub use mask::{
    format_currency, mask_currency, mask_date, parse_currency, Amount, CurrencyFormat,
    DATE_DIGITS, MAX_CURRENCY_DIGITS,
};
pub use render::pdf::{Orientation, PdfDocument};
pub use render::{BlitzRasterizer, Raster, Rasterizer};
pub use snapshot::{Snapshot, StaticContent, StaticField, CHECKED_GLYPH, UNCHECKED_GLYPH};

/// Rasterize `form` and wrap it into a PDF without dispatching it anywhere.
///
/// This is the Preparing and Rendering half of an export, for callers that
/// want the document bytes themselves.
///
/// # Example
///
/// ```rust,no_run
/// use receipt_render::{render_pdf, Config, Form};
///
/// let pdf = render_pdf(&Form::receipt(), &Config::default())?;
/// std::fs::write("recibo.pdf", pdf.bytes())?;
/// # Ok::<(), receipt_render::Error>(())
/// ```
pub fn render_pdf(form: &Form, config: &Config) -> Result<PdfDocument> {
    config.validate()?;
    let html = Snapshot::capture(form, config).to_html();
    let raster = BlitzRasterizer.rasterize(&html, config)?;
    PdfDocument::from_raster(&raster, config)
}

/// Rasterize `form` to PNG bytes.
///
/// # Example
///
/// ```rust,no_run
/// use receipt_render::{render_png, Config, Form};
///
/// let png = render_png(&Form::receipt(), &Config::default().scale(1.0))?;
/// std::fs::write("recibo.png", png)?;
/// # Ok::<(), receipt_render::Error>(())
/// ```
pub fn render_png(form: &Form, config: &Config) -> Result<Vec<u8>> {
    let html = Snapshot::capture(form, config).to_html();
    Ok(BlitzRasterizer.rasterize(&html, config)?.png)
}
