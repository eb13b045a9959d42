//! Rendering stages: snapshot markup to PNG, PNG to PDF.

pub mod pdf;
pub mod png;

use crate::config::Config;
use crate::error::Result;

use blitz_dom::DocumentConfig;
use blitz_html::HtmlDocument;
use blitz_traits::shell::Viewport;

/// A rasterized receipt, PNG-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// PNG file bytes.
    pub png: Vec<u8>,
    /// Width in device pixels (CSS width times scale).
    pub width: u32,
    /// Height in device pixels (CSS height times scale).
    pub height: u32,
}

/// Turns static receipt markup into a bitmap.
///
/// The default implementation is [`BlitzRasterizer`]; tests and embedders may
/// substitute their own.
pub trait Rasterizer {
    /// Rasterize `html` at the size and scale given by `config`.
    fn rasterize(&self, html: &str, config: &Config) -> Result<Raster>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(&self, html: &str, config: &Config) -> Result<Raster> {
        (**self).rasterize(html, config)
    }
}

/// Chromium-free rasterizer built on Blitz layout and Vello CPU painting.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlitzRasterizer;

impl Rasterizer for BlitzRasterizer {
    fn rasterize(&self, html: &str, config: &Config) -> Result<Raster> {
        config.validate()?;

        // Parse HTML, then resolve styles and compute layout
        let mut document = create_document(html, config);
        document.resolve(0.0);

        png::render_to_png(&document, config)
    }
}

/// Create and configure a Blitz document from HTML.
fn create_document(html: &str, config: &Config) -> HtmlDocument {
    let viewport = Viewport::new(
        config.width,
        config.height,
        config.scale,
        config.color_scheme.into(),
    );

    let doc_config = DocumentConfig {
        viewport: Some(viewport),
        ..Default::default()
    };

    HtmlDocument::from_html(html, doc_config)
}
