//! PNG rasterization using Blitz and Vello.

use super::Raster;
use crate::config::Config;
use crate::error::{Error, Result};

#[cfg(feature = "png")]
use anyrender::render_to_buffer;
#[cfg(feature = "png")]
use anyrender_vello_cpu::VelloCpuImageRenderer;
#[cfg(feature = "png")]
use blitz_html::HtmlDocument;
#[cfg(feature = "png")]
use blitz_paint::paint_scene;
#[cfg(feature = "png")]
use tracing::{debug, trace};

/// Render a laid-out Blitz document to a PNG raster.
#[cfg(feature = "png")]
pub fn render_to_png(document: &HtmlDocument, config: &Config) -> Result<Raster> {
    let scale = config.scale as f64;
    let (render_width, render_height) = config.raster_size();

    if config.logging {
        debug!(render_width, render_height, scale, "rasterizing receipt");
    } else {
        trace!(render_width, render_height, scale, "rasterizing receipt");
    }

    // Background is painted by the body element's background style
    let buffer = render_to_buffer::<VelloCpuImageRenderer, _>(
        |scene| {
            paint_scene(scene, document.as_ref(), scale, render_width, render_height);
        },
        render_width,
        render_height,
    );

    let expected = render_width as usize * render_height as usize * 4;
    if buffer.len() != expected {
        return Err(Error::PngRender(format!(
            "renderer produced {} bytes, expected {expected}",
            buffer.len()
        )));
    }

    let png = encode_png(&buffer, render_width, render_height)?;

    if config.logging {
        debug!(bytes = png.len(), "raster encoded");
    }

    Ok(Raster {
        png,
        width: render_width,
        height: render_height,
    })
}

/// Encode RGBA buffer to PNG bytes.
#[cfg(feature = "png")]
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut output = Vec::new();

    {
        let mut encoder = png::Encoder::new(&mut output, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);

        let mut writer = encoder
            .write_header()
            .map_err(|e| Error::PngEncode(e.to_string()))?;

        writer
            .write_image_data(buffer)
            .map_err(|e| Error::PngEncode(e.to_string()))?;
    }

    Ok(output)
}

#[cfg(not(feature = "png"))]
pub fn render_to_png(_document: &blitz_html::HtmlDocument, _config: &Config) -> Result<Raster> {
    Err(Error::FormatNotEnabled("png"))
}
