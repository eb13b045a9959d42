//! The live receipt form: typed fields mutated by keystrokes and toggles.
//!
//! A [`Form`] owns every field of the receipt. Keystrokes go through
//! [`Form::input`], which applies the field's mask in place and, for
//! line-item currency fields, re-runs the total aggregator.

mod template;
mod total;

pub use template::{ids, LINE_ITEMS};

use crate::error::{Error, Result};
use crate::mask::{mask_date, Amount, CurrencyFormat};
use serde::Serialize;
use tracing::debug;

/// The kind of input a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, stored as typed.
    Text,
    /// `DD/MM/YYYY` masked digits.
    Date,
    /// Currency masked digits.
    Currency,
    /// A boolean toggle.
    Checkbox,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::Currency => "currency",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Current value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Display(String),
    Checked(bool),
}

/// A named, typed input slot of the form.
#[derive(Debug, Clone)]
pub struct Field {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    value: FieldValue,
    line_item: bool,
}

impl Field {
    fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        let value = match kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            _ => FieldValue::Display(String::new()),
        };
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            value,
            line_item: false,
        }
    }

    /// Create a free-text field.
    pub fn text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    /// Create a date field.
    pub fn date(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Date)
    }

    /// Create a currency field that is not summed into the total.
    pub fn currency(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Currency)
    }

    /// Create a checkbox, initially unchecked.
    pub fn checkbox(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Checkbox)
    }

    /// Mark this field as a member of the line-item category.
    ///
    /// Only currency fields contribute to the total; the flag is ignored for
    /// other kinds.
    pub fn line_item(mut self) -> Self {
        self.line_item = true;
        self
    }

    /// Whether the field belongs to the line-item category.
    pub fn is_line_item(&self) -> bool {
        self.line_item && self.kind == FieldKind::Currency
    }

    /// The display string; empty for checkboxes.
    pub fn display(&self) -> &str {
        match &self.value {
            FieldValue::Display(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Whether the checkbox is checked; `false` for other kinds.
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checked(true))
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    fn expect_kind(&self, expected: FieldKind) -> Result<()> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(Error::FieldKindMismatch {
                id: self.id.clone(),
                expected: expected.name(),
                actual: self.kind.name(),
            })
        }
    }
}

/// A receipt form: an ordered set of fields plus the designated total field.
#[derive(Debug, Clone)]
pub struct Form {
    title: String,
    fields: Vec<Field>,
    total_id: Option<String>,
    currency: CurrencyFormat,
}

impl Form {
    /// Create an empty form.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            fields: Vec::new(),
            total_id: None,
            currency: CurrencyFormat::default(),
        }
    }

    /// Add a field. Fields render in insertion order.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a currency field and designate it as the total.
    pub fn total_field(mut self, id: &str, label: &str) -> Self {
        self.fields.push(Field::currency(id, label));
        self.total_id = Some(id.to_string());
        self
    }

    /// Set the currency convention used by every currency field.
    pub fn currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Look up a field by id.
    pub fn get(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Display string of a field.
    pub fn display(&self, id: &str) -> Option<&str> {
        self.get(id).map(Field::display)
    }

    /// Id of the total field, if one was designated.
    pub fn total_id(&self) -> Option<&str> {
        self.total_id.as_deref()
    }

    /// Display string of the total field.
    pub fn total(&self) -> Option<&str> {
        self.total_id.as_deref().and_then(|id| self.display(id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Field> {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::UnknownField(id.to_string()))
    }

    fn is_total(&self, id: &str) -> bool {
        self.total_id.as_deref() == Some(id)
    }

    /// Apply a keystroke: `raw` is the field's full value after the key.
    ///
    /// Text is stored as typed, dates and currency are masked in place.
    /// Returns the parsed amount for currency fields. Input into a line-item
    /// currency field recomputes the total.
    pub fn input(&mut self, id: &str, raw: &str) -> Result<Option<Amount>> {
        let currency = self.currency.clone();
        let recompute = !self.is_total(id);
        let field = self.get_mut(id)?;

        let amount = match field.kind {
            FieldKind::Text => {
                field.value = FieldValue::Display(raw.to_string());
                None
            }
            FieldKind::Date => {
                field.value = FieldValue::Display(mask_date(raw));
                None
            }
            FieldKind::Currency => {
                let (display, amount) = currency.mask(raw);
                field.value = FieldValue::Display(display);
                Some(amount)
            }
            FieldKind::Checkbox => {
                return Err(Error::FieldKindMismatch {
                    id: id.to_string(),
                    expected: "text, date or currency",
                    actual: field.kind.name(),
                })
            }
        };

        debug!(field = id, value = field.display(), "field input");

        if recompute && field.is_line_item() {
            self.recompute_total();
        }

        Ok(amount)
    }

    /// Set a checkbox state.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<()> {
        let field = self.get_mut(id)?;
        field.expect_kind(FieldKind::Checkbox)?;
        field.value = FieldValue::Checked(checked);
        debug!(field = id, checked, "checkbox set");
        Ok(())
    }

    /// Flip a checkbox, returning the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let checked = !self.get(id).map(Field::is_checked).unwrap_or_default();
        self.set_checked(id, checked)?;
        Ok(checked)
    }

    /// Overwrite a field's display string without masking or recomputing.
    ///
    /// This mirrors a value written straight into the control, e.g. a
    /// pre-filled document number or a hand-edited total.
    pub fn set_display(&mut self, id: &str, value: &str) -> Result<()> {
        let field = self.get_mut(id)?;
        if field.kind == FieldKind::Checkbox {
            return Err(Error::FieldKindMismatch {
                id: id.to_string(),
                expected: "text, date or currency",
                actual: field.kind.name(),
            });
        }
        field.value = FieldValue::Display(value.to_string());
        Ok(())
    }
}
