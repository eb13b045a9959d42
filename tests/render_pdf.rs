//! Integration tests for PDF assembly.

#![cfg(all(feature = "png", feature = "pdf"))]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lopdf::{Document, Object};
use receipt_render::{
    ids, render_pdf, BlitzRasterizer, Config, Form, Orientation, PdfDocument, Rasterizer,
};

/// Check if bytes start with PDF magic header.
fn is_valid_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}

/// Read the MediaBox of the single page, following the page tree upwards.
fn media_box(bytes: &[u8]) -> [f32; 4] {
    let doc = Document::load_mem(bytes).expect("lopdf should parse the PDF");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "receipt should have exactly one page");

    let mut node_id = *pages.values().next().unwrap();
    loop {
        let dict = doc.get_object(node_id).unwrap().as_dict().unwrap();
        if let Ok(Object::Array(values)) = dict.get(b"MediaBox") {
            let nums: Vec<f32> = values.iter().map(|v| v.as_float().unwrap()).collect();
            return [nums[0], nums[1], nums[2], nums[3]];
        }
        node_id = dict
            .get(b"Parent")
            .and_then(Object::as_reference)
            .expect("page without MediaBox must have a parent");
    }
}

#[test]
fn test_pdf_basic_render() {
    let pdf = render_pdf(&Form::receipt(), &Config::new().scale(1.0)).expect("render should succeed");
    assert!(is_valid_pdf(pdf.bytes()), "output should be valid PDF");
}

#[test]
fn test_pdf_page_size_from_pixels() {
    let pdf = render_pdf(&Form::receipt(), &Config::new().scale(1.0)).unwrap();

    let (w_mm, h_mm) = pdf.page_size_mm();
    assert!((w_mm - 238.125).abs() < 0.01);
    assert!((h_mm - 132.29).abs() < 0.01);
    assert_eq!(pdf.orientation(), Orientation::Landscape);

    // 900 x 500 CSS px at 96 dpi is 675 x 375 pt
    let [x0, y0, x1, y1] = media_box(pdf.bytes());
    assert!((x1 - x0 - 675.0).abs() < 0.5, "width was {}", x1 - x0);
    assert!((y1 - y0 - 375.0).abs() < 0.5, "height was {}", y1 - y0);
}

#[test]
fn test_pdf_page_size_ignores_scale() {
    let config = Config::new().size(400, 800).scale(2.0);
    let pdf = render_pdf(&Form::receipt(), &config).unwrap();

    let [x0, y0, x1, y1] = media_box(pdf.bytes());
    assert!((x1 - x0 - 300.0).abs() < 0.5);
    assert!((y1 - y0 - 600.0).abs() < 0.5);
    assert_eq!(pdf.orientation(), Orientation::Portrait);
}

#[test]
fn test_pdf_embeds_an_image() {
    let mut form = Form::receipt();
    form.input(ids::PAYER, "Maria").unwrap();
    let pdf = render_pdf(&form, &Config::new().scale(1.0)).unwrap();

    let doc = Document::load_mem(pdf.bytes()).unwrap();
    let has_image = doc.objects.values().any(|obj| {
        obj.as_stream()
            .ok()
            .and_then(|stream| stream.dict.get(b"Subtype").ok())
            .and_then(|subtype| subtype.as_name().ok())
            == Some(b"Image".as_slice())
    });
    assert!(has_image, "PDF should contain an image XObject");
}

#[test]
fn test_pdf_base64_round_trips() {
    let config = Config::new().size(200, 100).scale(1.0);
    let raster = BlitzRasterizer.rasterize("<p>Recibo</p>", &config).unwrap();
    let pdf = PdfDocument::from_raster(&raster, &config).unwrap();

    let decoded = STANDARD.decode(pdf.to_base64()).unwrap();
    assert_eq!(decoded, pdf.bytes());

    let uri = pdf.to_data_uri("Recibo_2023_12_25.pdf");
    let payload = uri.split(',').nth(1).unwrap();
    assert_eq!(STANDARD.decode(payload).unwrap(), pdf.bytes());
}

#[test]
fn test_pdf_rejects_garbage_raster() {
    let config = Config::default();
    let raster = receipt_render::Raster {
        png: b"not a png".to_vec(),
        width: 1800,
        height: 1000,
    };
    assert!(PdfDocument::from_raster(&raster, &config).is_err());
}
