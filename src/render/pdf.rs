//! PDF assembly using Krilla.
//!
//! The receipt is exported as a single page holding one image: the raster
//! produced by the PNG stage, stretched over the whole page. The page size is
//! the receipt's CSS pixel size converted at a fixed 96 px per inch; there is
//! no DPI negotiation.

use super::Raster;
use crate::config::Config;
use crate::error::{Error, Result};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[cfg(feature = "pdf")]
use krilla::geom::Size;
#[cfg(feature = "pdf")]
use krilla::image::Image;
#[cfg(feature = "pdf")]
use krilla::page::PageSettings;
#[cfg(feature = "pdf")]
use krilla::Document;
#[cfg(feature = "pdf")]
use tracing::debug;

/// Page orientation, derived from the page dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// A finished single-page PDF.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    bytes: Vec<u8>,
    width_mm: f32,
    height_mm: f32,
}

impl PdfDocument {
    /// Embed `raster` into a new one-page document sized from `config`.
    #[cfg(feature = "pdf")]
    pub fn from_raster(raster: &Raster, config: &Config) -> Result<Self> {
        let (width_mm, height_mm) = config.page_size_mm();
        let (width_pt, height_pt) = config.page_size_pt();

        let mut pdf_doc = Document::new();

        let size = Size::from_wh(width_pt, height_pt)
            .ok_or_else(|| Error::PdfCreate("Invalid page dimensions".to_string()))?;
        let mut page = pdf_doc.start_page_with(PageSettings::new(size));
        let mut surface = page.surface();

        // Krilla uses a top-left origin, so the image lands at (0, 0)
        let image = Image::from_png(raster.png.clone().into(), true)
            .map_err(|e| Error::Image(format!("{:?}", e)))?;
        surface.draw_image(image, size);

        surface.finish();
        page.finish();

        let bytes = pdf_doc
            .finish()
            .map_err(|e| Error::PdfCreate(format!("{:?}", e)))?;

        debug!(
            width_mm,
            height_mm,
            raster_width = raster.width,
            raster_height = raster.height,
            bytes = bytes.len(),
            "pdf assembled"
        );

        Ok(Self {
            bytes,
            width_mm,
            height_mm,
        })
    }

    #[cfg(not(feature = "pdf"))]
    pub fn from_raster(_raster: &Raster, _config: &Config) -> Result<Self> {
        Err(Error::FormatNotEnabled("pdf"))
    }

    /// The PDF file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Page size in millimetres.
    pub fn page_size_mm(&self) -> (f32, f32) {
        (self.width_mm, self.height_mm)
    }

    pub fn orientation(&self) -> Orientation {
        if self.width_mm > self.height_mm {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// The document encoded as standard base64.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// A self-describing data URI carrying the file name.
    pub fn to_data_uri(&self, filename: &str) -> String {
        format!(
            "data:application/pdf;filename={filename};base64,{}",
            self.to_base64()
        )
    }
}
