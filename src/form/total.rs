//! Total aggregation over line-item currency fields.

use super::{FieldValue, Form};
use crate::mask::Amount;
use tracing::debug;

impl Form {
    /// Sum of every line-item currency field, excluding the total field.
    ///
    /// Each display string is parsed back through the currency mask's
    /// inverse; empty or unparseable values count as zero.
    pub fn sum_line_items(&self) -> Amount {
        self.fields
            .iter()
            .filter(|f| f.is_line_item() && !self.is_total(&f.id))
            .map(|f| self.currency.parse(f.display()))
            .sum()
    }

    /// Re-scan all line items and write the formatted sum into the total field.
    ///
    /// Runs in O(fields) with no incremental state, so calling it twice in a
    /// row yields the same display string. Without a total field the sum is
    /// still returned.
    pub fn recompute_total(&mut self) -> Amount {
        let sum = self.sum_line_items();
        let shown = self.currency.format(sum);

        if let Some(total_id) = self.total_id.clone() {
            if let Some(field) = self.fields.iter_mut().find(|f| f.id == total_id) {
                debug!(total = %shown, "total recomputed");
                field.value = FieldValue::Display(shown);
            }
        }

        sum
    }
}

#[cfg(test)]
mod tests {
    use crate::form::{Field, Form};
    use crate::mask::Amount;

    fn form_with_items(n: usize) -> Form {
        let mut form = Form::new("Recibo");
        for i in 0..n {
            form = form.field(Field::currency(&format!("v{i}"), "Valor").line_item());
        }
        form.field(Field::currency("deposit", "Sinal"))
            .total_field("total", "Total")
    }

    #[test]
    fn test_empty_form_totals_zero() {
        let mut form = form_with_items(2);
        assert_eq!(form.recompute_total(), Amount::ZERO);
        assert_eq!(form.total(), Some("R$ 0,00"));
    }

    #[test]
    fn test_sums_prefilled_displays() {
        let mut form = form_with_items(2);
        form.set_display("v0", "R$ 10,00").unwrap();
        form.set_display("v1", "R$ 5,50").unwrap();
        form.recompute_total();
        assert_eq!(form.total(), Some("R$ 15,50"));
    }

    #[test]
    fn test_non_line_item_currency_is_ignored() {
        let mut form = form_with_items(1);
        form.input("deposit", "999").unwrap();
        form.input("v0", "100").unwrap();
        assert_eq!(form.total(), Some("R$ 1,00"));
    }

    #[test]
    fn test_total_is_excluded_even_when_flagged() {
        let mut form = Form::new("Recibo")
            .field(Field::currency("v0", "Valor").line_item())
            .total_field("total", "Total");
        form.fields
            .iter_mut()
            .filter(|f| f.id == "total")
            .for_each(|f| f.line_item = true);

        form.input("v0", "250").unwrap();
        form.recompute_total();
        form.recompute_total();
        assert_eq!(form.total(), Some("R$ 2,50"));
    }

    #[test]
    fn test_recompute_writes_formatted_sum() {
        let mut form = form_with_items(3);
        form.set_display("v0", "R$ 1.000,00").unwrap();
        form.set_display("v2", "R$ 0,99").unwrap();

        assert_eq!(form.recompute_total(), Amount::from_cents(100_099));
        assert_eq!(form.total(), Some("R$ 1.000,99"));
    }

    #[test]
    fn test_unparseable_value_counts_as_zero() {
        let mut form = form_with_items(2);
        form.set_display("v0", "abc").unwrap();
        form.input("v1", "300").unwrap();
        assert_eq!(form.total(), Some("R$ 3,00"));
    }
}
