//! Static HTML for a snapshot, consumed by the rasterizer.

use super::{Snapshot, StaticContent, StaticField};
use crate::form::FieldKind;
use std::fmt::Write;

const STYLE: &str = r#"
* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
body { font-family: sans-serif; color: #1f2933; font-size: 15px; }
.recibo-container {
    border: 2px solid #1f2933;
    padding: 20px 28px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}
.recibo-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    border-bottom: 1px solid #9aa5b1;
    padding-bottom: 8px;
}
.recibo-header h1 { margin: 0; font-size: 26px; letter-spacing: 4px; }
.recibo-fields { display: flex; flex-wrap: wrap; gap: 10px 24px; }
.field { display: flex; align-items: baseline; gap: 6px; }
.field-label { font-weight: bold; }
.static-content { min-width: 140px; border-bottom: 1px solid #9aa5b1; padding: 0 4px; }
.date-static { min-width: 100px; }
.total-static { font-size: 20px; font-weight: bold; border: 1px solid #1f2933; padding: 4px 10px; }
.static-checkbox { display: inline-block; margin-right: 10px; font-size: 18px; }
"#;

impl Snapshot {
    /// Render the snapshot as a standalone HTML document sized to the receipt.
    ///
    /// Every value is HTML-escaped. The total field is drawn in the header;
    /// the remaining fields wrap in declaration order.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(4096);

        let _ = write!(
            html,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{STYLE}\
             html, body {{ background: {bg}; }}\
             .recibo-container {{ width: {w}px; height: {h}px; }}</style></head><body>\
             <div class=\"recibo-container\"><div class=\"recibo-header\"><h1>{title}</h1>",
            bg = css_rgba(self.background),
            w = self.width,
            h = self.height,
            title = escape_html(&self.title),
        );

        for field in self.fields.iter().filter(|f| f.is_total) {
            write_field(&mut html, field);
        }

        html.push_str("</div><div class=\"recibo-fields\">");
        for field in self.fields.iter().filter(|f| !f.is_total) {
            write_field(&mut html, field);
        }
        html.push_str("</div></div></body></html>");

        html
    }
}

/// CSS `rgba()` for an RGBA byte quadruple.
fn css_rgba([r, g, b, a]: [u8; 4]) -> String {
    format!("rgba({r}, {g}, {b}, {})", f32::from(a) / 255.0)
}

fn write_field(html: &mut String, field: &StaticField) {
    let id = escape_html(&field.id);
    let label = escape_html(&field.label);

    match &field.content {
        StaticContent::Checkbox(_) => {
            let _ = write!(
                html,
                "<span class=\"field field-checkbox\" id=\"{id}\">\
                 <span class=\"static-checkbox\">{}</span>{label}</span>",
                field.content.as_text(),
            );
        }
        StaticContent::Text(value) => {
            let mut class = String::from("static-content");
            if field.kind == FieldKind::Date {
                class.push_str(" date-static");
            }
            if field.is_total {
                class.push_str(" total-static");
            }
            let _ = write!(
                html,
                "<div class=\"field field-{kind}\" id=\"{id}\">\
                 <span class=\"field-label\">{label}</span>\
                 <div class=\"{class}\">{value}</div></div>",
                kind = field.kind,
                value = escape_html(value),
            );
        }
    }
}

/// Escape text for use in HTML content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
