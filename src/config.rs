//! Configuration for rendering and exporting receipts.

use crate::error::{Error, Result};
use std::time::Duration;

/// Millimetres per CSS pixel (96 px per inch).
pub const PX_TO_MM: f32 = 25.4 / 96.0;

/// PDF points per millimetre.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// Color scheme preference for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Light color scheme.
    #[default]
    Light,
    /// Dark color scheme.
    Dark,
}

impl From<ColorScheme> for blitz_traits::shell::ColorScheme {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => blitz_traits::shell::ColorScheme::Light,
            ColorScheme::Dark => blitz_traits::shell::ColorScheme::Dark,
        }
    }
}

/// Configuration for receipt export.
///
/// Use the builder pattern to construct a configuration:
///
/// ```rust
/// use receipt_render::Config;
/// use std::time::Duration;
///
/// let config = Config::new()
///     .size(900, 500)
///     .scale(2.0)
///     .filename_prefix("Recibo")
///     .success_marker("Sucesso")
///     .restore_delay(Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Width of the receipt in CSS pixels.
    pub width: u32,

    /// Height of the receipt in CSS pixels.
    pub height: u32,

    /// Rasterization scale factor (2.0 gives a crisp embedded image).
    pub scale: f32,

    /// Color scheme preference (light or dark mode).
    pub color_scheme: ColorScheme,

    /// Background color as RGBA (default: white).
    pub background: [u8; 4],

    /// Emit rasterizer progress at `debug` instead of `trace` level.
    pub logging: bool,

    /// Prefix of the exported file name, `<prefix>_<YYYY_MM_DD>.pdf`.
    pub filename_prefix: String,

    /// Text the upload endpoint includes in its response on success.
    pub success_marker: String,

    /// Delay after an export before the controls are restored.
    pub restore_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
            scale: 2.0,
            color_scheme: ColorScheme::Light,
            background: [255, 255, 255, 255], // White
            logging: false,
            filename_prefix: "Recibo".to_string(),
            success_marker: "Sucesso".to_string(),
            restore_delay: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Smallest accepted width or height in pixels.
    pub const MIN_DIMENSION: u32 = 1;

    /// Largest accepted scaled width or height in pixels.
    pub const MAX_DIMENSION: u32 = 16_384;

    /// Create a new configuration with default values.
    ///
    /// Defaults:
    /// - Size: 900 x 500 px
    /// - Scale: 2.0
    /// - File name prefix: `Recibo`
    /// - Success marker: `Sucesso`
    /// - Restore delay: 3 s
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the receipt width in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the receipt height in pixels.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set both width and height at once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use receipt_render::Config;
    ///
    /// let config = Config::new().size(1200, 600);
    /// assert_eq!(config.width, 1200);
    /// assert_eq!(config.height, 600);
    /// ```
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the rasterization scale factor.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the color scheme preference.
    ///
    /// This affects CSS media queries like `prefers-color-scheme`.
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Set the background color as RGBA values.
    pub fn background(mut self, rgba: [u8; 4]) -> Self {
        self.background = rgba;
        self
    }

    /// Enable rasterizer progress logging.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Set the exported file name prefix.
    pub fn filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    /// Set the success marker looked for in upload responses.
    pub fn success_marker(mut self, marker: impl Into<String>) -> Self {
        self.success_marker = marker.into();
        self
    }

    /// Set the delay before controls are restored after an export.
    pub fn restore_delay(mut self, delay: Duration) -> Self {
        self.restore_delay = delay;
        self
    }

    /// Page size in millimetres, converted from the pixel size.
    ///
    /// ```rust
    /// use receipt_render::Config;
    ///
    /// let (w, h) = Config::new().page_size_mm();
    /// assert!((w - 238.125).abs() < 1e-3);
    /// assert!((h - 132.291_67).abs() < 1e-3);
    /// ```
    pub fn page_size_mm(&self) -> (f32, f32) {
        (
            self.width as f32 * PX_TO_MM,
            self.height as f32 * PX_TO_MM,
        )
    }

    /// Page size in PDF points.
    pub fn page_size_pt(&self) -> (f32, f32) {
        let (w, h) = self.page_size_mm();
        (w * MM_TO_PT, h * MM_TO_PT)
    }

    /// Pixel size of the rasterized image.
    pub fn raster_size(&self) -> (u32, u32) {
        let scale = self.scale as f64;
        (
            (self.width as f64 * scale) as u32,
            (self.height as f64 * scale) as u32,
        )
    }

    /// Check the configuration for values the pipeline cannot handle.
    pub fn validate(&self) -> Result<()> {
        if self.width < Self::MIN_DIMENSION {
            return Err(Error::InvalidConfig(format!(
                "width must be at least {}",
                Self::MIN_DIMENSION
            )));
        }
        if self.height < Self::MIN_DIMENSION {
            return Err(Error::InvalidConfig(format!(
                "height must be at least {}",
                Self::MIN_DIMENSION
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }

        let (raster_w, raster_h) = self.raster_size();
        if raster_w == 0 || raster_h == 0 {
            return Err(Error::InvalidConfig(
                "scaled size rounds down to zero pixels".to_string(),
            ));
        }
        if raster_w > Self::MAX_DIMENSION || raster_h > Self::MAX_DIMENSION {
            return Err(Error::InvalidConfig(format!(
                "scaled size {raster_w}x{raster_h} exceeds {}",
                Self::MAX_DIMENSION
            )));
        }

        if self.filename_prefix.is_empty()
            || self.filename_prefix.contains(['/', '\\'])
        {
            return Err(Error::InvalidConfig(format!(
                "filename prefix '{}' must be non-empty and contain no path separators",
                self.filename_prefix
            )));
        }
        if self.success_marker.is_empty() {
            return Err(Error::InvalidConfig(
                "success marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
