//! The standard receipt layout.

use super::{Field, Form};

/// Field ids of the standard receipt built by [`Form::receipt`].
pub mod ids {
    pub const NUMBER: &str = "number";
    pub const TOTAL: &str = "total";
    pub const PAYER: &str = "payer";
    pub const REFERENCE: &str = "reference";
    pub const CASH: &str = "payment_cash";
    pub const PIX: &str = "payment_pix";
    pub const CARD: &str = "payment_card";
    pub const CITY: &str = "city";
    pub const DATE: &str = "date";
    pub const SIGNATURE: &str = "signature";

    /// Description field of line item `n` (1-based).
    pub fn item_description(n: usize) -> String {
        format!("item_{n}_description")
    }

    /// Value field of line item `n` (1-based).
    pub fn item_value(n: usize) -> String {
        format!("item_{n}_value")
    }
}

/// Number of line items on the standard receipt.
pub const LINE_ITEMS: usize = 3;

impl Form {
    /// The standard receipt: payer, reference, three line items with a
    /// running total, payment method checkboxes, place, date and signature.
    pub fn receipt() -> Self {
        let mut form = Form::new("RECIBO")
            .field(Field::text(ids::NUMBER, "Nº"))
            .total_field(ids::TOTAL, "Valor")
            .field(Field::text(ids::PAYER, "Recebi(emos) de"))
            .field(Field::text(ids::REFERENCE, "Referente a"));

        for n in 1..=LINE_ITEMS {
            form = form
                .field(Field::text(&ids::item_description(n), &format!("Item {n}")))
                .field(Field::currency(&ids::item_value(n), "Valor").line_item());
        }

        form.field(Field::checkbox(ids::CASH, "Dinheiro"))
            .field(Field::checkbox(ids::PIX, "PIX"))
            .field(Field::checkbox(ids::CARD, "Cartão"))
            .field(Field::text(ids::CITY, "Cidade"))
            .field(Field::date(ids::DATE, "Data"))
            .field(Field::text(ids::SIGNATURE, "Assinatura"))
    }
}
