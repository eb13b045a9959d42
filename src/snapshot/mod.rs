//! Detached, static view of a form at export time.
//!
//! A [`Snapshot`] is a plain serializable value: interactive fields are
//! replaced by what they show (text for text/date/currency fields, a glyph
//! for checkboxes). It is built once per export and never shares state with
//! the live [`Form`].

mod markup;

use crate::config::Config;
use crate::form::{FieldKind, Form};
use serde::Serialize;

/// Glyph shown for a checked checkbox.
pub const CHECKED_GLYPH: &str = "☑";

/// Glyph shown for an unchecked checkbox.
pub const UNCHECKED_GLYPH: &str = "☐";

/// Static replacement for an interactive control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StaticContent {
    Text(String),
    Checkbox(bool),
}

impl StaticContent {
    /// The text drawn in place of the control.
    pub fn as_text(&self) -> &str {
        match self {
            StaticContent::Text(s) => s,
            StaticContent::Checkbox(true) => CHECKED_GLYPH,
            StaticContent::Checkbox(false) => UNCHECKED_GLYPH,
        }
    }
}

/// One field of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub content: StaticContent,
    pub is_total: bool,
}

/// The form as it will be exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub title: String,
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
    /// Page background as RGBA.
    pub background: [u8; 4],
    pub fields: Vec<StaticField>,
}

impl Snapshot {
    /// Copy the current field values of `form`.
    pub fn capture(form: &Form, config: &Config) -> Self {
        let total_id = form.total_id();
        let fields = form
            .fields()
            .iter()
            .map(|field| StaticField {
                id: field.id.clone(),
                label: field.label.clone(),
                kind: field.kind,
                content: match field.kind {
                    FieldKind::Checkbox => StaticContent::Checkbox(field.is_checked()),
                    _ => StaticContent::Text(field.display().to_string()),
                },
                is_total: total_id == Some(field.id.as_str()),
            })
            .collect();

        Self {
            title: form.title().to_string(),
            width: config.width,
            height: config.height,
            background: config.background,
            fields,
        }
    }

    /// Look up a field by id.
    pub fn field(&self, id: &str) -> Option<&StaticField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{ids, Field};

    #[test]
    fn test_capture_replaces_controls() {
        let mut form = Form::receipt();
        form.input(ids::PAYER, "Ana").unwrap();
        form.set_checked(ids::PIX, true).unwrap();

        let snapshot = Snapshot::capture(&form, &Config::default());
        assert_eq!(
            snapshot.field(ids::PAYER).unwrap().content,
            StaticContent::Text("Ana".to_string())
        );
        assert_eq!(snapshot.field(ids::PIX).unwrap().content.as_text(), "☑");
        assert_eq!(snapshot.field(ids::CASH).unwrap().content.as_text(), "☐");
        assert!(snapshot.field(ids::TOTAL).unwrap().is_total);
    }

    #[test]
    fn test_capture_is_detached() {
        let mut form = Form::new("R").field(Field::text("a", "A"));
        form.input("a", "before").unwrap();
        let snapshot = Snapshot::capture(&form, &Config::default());

        form.input("a", "after").unwrap();
        assert_eq!(snapshot.field("a").unwrap().content.as_text(), "before");
    }

    #[test]
    fn test_capture_uses_config_size() {
        let snapshot = Snapshot::capture(&Form::receipt(), &Config::new().size(640, 320));
        assert_eq!((snapshot.width, snapshot.height), (640, 320));
    }

    #[test]
    fn test_capture_carries_background() {
        let config = Config::new().background([10, 20, 30, 255]);
        let snapshot = Snapshot::capture(&Form::receipt(), &config);
        assert_eq!(snapshot.background, [10, 20, 30, 255]);
    }
}
